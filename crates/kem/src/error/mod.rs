//! Error handling for the Kyber protocol steps
//!
//! The protocol shares the workspace-wide error type; this module adds the
//! phase-specific guards used by both the pure functions and the session.

pub use edukyber_api::error::{Error, Result};

pub mod validate;
