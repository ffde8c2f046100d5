//! Domain layer for PetPal.
//!
//! Holds the pet and message models, the breed/trait catalog, the
//! configuration model, the shared error type and the random source
//! abstraction used by the response simulator.

pub mod config;
pub mod error;
pub mod message;
pub mod pet;
pub mod random;

// Re-export common error type
pub use error::{PetPalError, Result};
