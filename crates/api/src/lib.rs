//! Public API traits and types for the edukyber library
//!
//! This crate provides the surface shared by every edukyber crate: the error
//! type, the single-bit message type and the [`BitEncryption`] trait that the
//! Kyber protocol steps implement.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::BitEncryption;
pub use types::Bit;
