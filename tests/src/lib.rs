//! Testing utilities for the edukyber library
//!
//! Decryption is only correct with high probability, so most end-to-end checks
//! are stated as success rates over many seeded trials.

pub mod statistical;

pub use statistical::{TrialConfig, TrialReport};
