//! Chat use case implementation.
//!
//! This module provides the `ChatUseCase` which coordinates the shared
//! [`PetStore`], a [`PetResponder`] and the notification channel. It is the
//! only place where a send crosses an await point, so it owns the loading
//! indicator and the fallback path for failed replies.

use crate::notification::Notifier;
use crate::store::{PetStore, SelectOutcome, StoreSnapshot};
use petpal_core::error::Result;
use petpal_core::message::Message;
use petpal_core::pet::{Pet, PetDraft};
use petpal_interaction::{PetResponder, ReplyOrigin, fallback_reply};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

const REPLY_FAILED_TITLE: &str = "Error";
const REPLY_FAILED_DESCRIPTION: &str =
    "Failed to generate pet response. Our pets are taking a nap right now.";

/// Result of [`ChatUseCase::send_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank text or no pet selected; nothing was recorded.
    Ignored,
    /// Both the user message and the pet's reply were stored.
    Replied {
        user: Message,
        reply: Message,
        origin: ReplyOrigin,
    },
    /// The pet was deleted before its reply arrived; only the user message
    /// was recorded, and it went away with the pet.
    Discarded { user: Message },
}

/// Use case for managing the pet roster and conversations.
///
/// `ChatUseCase` is cheap to clone; clones share the same store, responder
/// and loading counter, so several sends may run concurrently.
///
/// # Thread Safety
///
/// The store sits behind a `tokio::sync::RwLock`. The lock is never held
/// across the responder call, which lets roster edits proceed while a reply
/// is pending.
#[derive(Clone)]
pub struct ChatUseCase {
    store: Arc<RwLock<PetStore>>,
    responder: Arc<dyn PetResponder>,
    notifier: Notifier,
    /// Number of sends currently waiting for a reply
    in_flight: Arc<AtomicUsize>,
}

impl ChatUseCase {
    pub fn new(store: PetStore, responder: Arc<dyn PetResponder>, notifier: Notifier) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            responder,
            notifier,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> Arc<RwLock<PetStore>> {
        self.store.clone()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let is_loading = self.is_loading();
        self.store.read().await.snapshot(is_loading)
    }

    /// True while at least one send is waiting for its reply.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Adds a pet, selects it and greets the user.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the breed does not belong to the kind.
    pub async fn create_pet(&self, draft: PetDraft) -> Result<Option<Pet>> {
        self.store.write().await.create_pet(draft)
    }

    pub async fn select_pet(&self, id: &str) -> SelectOutcome {
        self.store.write().await.select_pet(id)
    }

    /// Replaces a pet's details and announces the change.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the breed does not belong to the kind.
    pub async fn update_pet(&self, pet: Pet) -> Result<Option<Pet>> {
        let updated = self.store.write().await.update_pet(pet)?;
        if let Some(pet) = &updated {
            self.notifier.info(
                "Pet Updated",
                format!("{}'s details have been updated.", pet.name),
            );
        }
        Ok(updated)
    }

    /// Removes a pet and its conversation, announcing the removal.
    pub async fn delete_pet(&self, id: &str) -> Option<Pet> {
        let removed = self.store.write().await.delete_pet(id);
        if removed.is_some() {
            self.notifier.info("Pet Deleted", "Your pet has been removed.");
        }
        removed
    }

    /// Sends `text` to the selected pet and stores its reply.
    ///
    /// The user message is recorded before the responder is called. A
    /// responder failure is logged, surfaced as a warning notification and
    /// replaced by [`fallback_reply`], so a send never fails outright.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let Some(pending) = self.store.write().await.begin_send(text) else {
            return SendOutcome::Ignored;
        };
        let _loading = LoadingGuard::enter(&self.in_flight);

        let reply = match self.responder.respond(&pending.pet, &pending.text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(pet_id = %pending.pet.id, error = %e, "Pet response failed, using fallback");
                self.notifier
                    .warn(REPLY_FAILED_TITLE, REPLY_FAILED_DESCRIPTION);
                fallback_reply(&pending.pet, &pending.text)
            }
        };
        let origin = reply.origin;

        match self.store.write().await.complete_send(&pending, reply) {
            Some(reply) => SendOutcome::Replied {
                user: pending.user_message,
                reply,
                origin,
            },
            None => SendOutcome::Discarded {
                user: pending.user_message,
            },
        }
    }
}

/// Marks one send as in flight for as long as it lives.
///
/// Dropping the guard, including when the owning future is cancelled,
/// releases the mark.
struct LoadingGuard {
    counter: Arc<AtomicUsize>,
}

impl LoadingGuard {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self {
            counter: counter.clone(),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_guard_balances_counter() {
        let counter = Arc::new(AtomicUsize::new(0));
        let outer = LoadingGuard::enter(&counter);
        {
            let _inner = LoadingGuard::enter(&counter);
            assert_eq!(counter.load(Ordering::SeqCst), 2);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        drop(outer);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
