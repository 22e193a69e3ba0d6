// kem/src/kyber/kyber1024.rs

//! Kyber-1024 preset (NIST PQC Security Level 5).

use super::scheme::ToyKyber;
use super::params::Kyber1024Params;

/// Kyber-1024, implementing `edukyber_api::BitEncryption`.
pub type Kyber1024 = ToyKyber<Kyber1024Params>;
