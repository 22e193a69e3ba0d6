//! Validation utilities for the Kyber protocol steps

use edukyber_api::Bit;

use super::{Error, Result};

/// Operation names used in precondition errors
pub mod op {
    /// Encryption phase
    pub const ENCRYPT: &str = "encrypt";
    /// Decryption phase
    pub const DECRYPT: &str = "decrypt";
    /// Noise analysis of a session
    pub const NOISE_ANALYSIS: &str = "noise analysis";
}

/// Parse a caller-supplied message bit
pub fn message_bit(value: u8) -> Result<Bit> {
    Bit::from_u8(value)
}

/// Require a phase artifact to exist
pub fn require(condition: bool, operation: &'static str, missing: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::precondition(operation, missing));
    }
    Ok(())
}

/// Require two vectors (or a vector and a matrix) to share the module rank
pub fn same_rank(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::input(
            context,
            format!("expected module rank {}, got {}", expected, actual),
        ));
    }
    Ok(())
}
