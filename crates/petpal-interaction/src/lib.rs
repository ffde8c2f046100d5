//! Response generation for PetPal.
//!
//! The [`PetResponder`] trait is the seam between the chat use case and
//! whatever produces pet replies. [`SimulatedBackend`] is the only
//! implementation: it runs the keyword-and-trait [`ResponseSimulator`]
//! after an artificial latency.

pub mod backend;
pub mod fallback;
pub mod rules;
pub mod simulator;
pub mod stickers;

use async_trait::async_trait;
use petpal_core::error::Result;
use petpal_core::message::MessageAction;
use petpal_core::pet::Pet;
use serde::{Deserialize, Serialize};

pub use backend::SimulatedBackend;
pub use fallback::fallback_reply;
pub use simulator::ResponseSimulator;

/// Which branch of the generator produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOrigin {
    /// A keyword rule matched the message.
    Keyword,
    /// A trait trigger won its coin flip.
    Trait,
    /// Nothing matched; a generic line was used.
    Generic,
    /// The responder failed and the deterministic fallback was used.
    Fallback,
}

/// A generated pet reply, not yet stored as a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetReply {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MessageAction>,
    pub origin: ReplyOrigin,
}

/// Produces a pet's reply to a user message.
#[async_trait]
pub trait PetResponder: Send + Sync {
    /// # Errors
    ///
    /// Implementations may fail; callers are expected to substitute
    /// [`fallback_reply`] and keep the conversation going.
    async fn respond(&self, pet: &Pet, message: &str) -> Result<PetReply>;
}
