//! Pet domain module.
//!
//! # Module Structure
//!
//! - `model`: `Pet`, `PetKind`, `PetTrait`
//! - `catalog`: breed lists and welcome greetings
//! - `request`: `PetDraft` and identifier derivation

mod catalog;
mod model;
pub mod request;

// Re-export public API
pub use catalog::welcome_message;
pub use model::{Pet, PetKind, PetTrait};
pub use request::{PetDraft, derive_pet_id};
