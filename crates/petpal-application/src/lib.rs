//! Application layer for PetPal.
//!
//! This crate holds the in-memory roster and chat log ([`PetStore`]) and the
//! use case that drives it from a front end ([`ChatUseCase`]), including
//! the loading indicator and user notifications.

pub mod chat_usecase;
pub mod demo;
pub mod notification;
pub mod store;

pub use chat_usecase::{ChatUseCase, SendOutcome};
pub use demo::demo_store;
pub use notification::{Notification, NotificationLevel, Notifier};
pub use store::{PendingReply, PetStore, SelectOutcome, StoreSnapshot};
