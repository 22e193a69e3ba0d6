// kem/src/kyber/kyber768.rs

//! Kyber-768 preset (NIST PQC Security Level 3).

use super::scheme::ToyKyber;
use super::params::Kyber768Params;

/// Kyber-768, implementing `edukyber_api::BitEncryption`.
pub type Kyber768 = ToyKyber<Kyber768Params>;
