// kem/src/kyber/kyber512.rs

//! Kyber-512 preset (NIST PQC Security Level 1).

use super::scheme::ToyKyber;
use super::params::Kyber512Params;

/// Kyber-512, implementing `edukyber_api::BitEncryption`.
pub type Kyber512 = ToyKyber<Kyber512Params>;
