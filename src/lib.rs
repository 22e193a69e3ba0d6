//! # edukyber
//!
//! A pedagogical rendition of the CRYSTALS-Kyber lattice arithmetic: the
//! polynomial ring R_q = Z_q[X]/(X^256 + 1) with q = 3329, centered binomial
//! noise, and single-bit key generation, encryption and decryption.
//!
//! **Not for production use.** Nothing here is constant-time, messages are a
//! single bit, and no ciphertext compression or CCA transform is applied.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! edukyber = "0.3"
//! ```
//!
//! ```no_run
//! use edukyber::prelude::*;
//! use rand::SeedableRng;
//!
//! # fn main() -> edukyber::api::Result<()> {
//! let rng = rand_chacha::ChaChaRng::seed_from_u64(2024);
//! let mut session = KyberSession::new(KyberConfig::default(), rng);
//! session.generate_keys();
//! session.encrypt(1)?;
//! assert_eq!(session.decrypt()?, Bit::One);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `kem` (default): the Kyber steps and the session state machine
//! - `algorithms`: the ring engine alone
//! - `serde`: serialization of polynomials, keys and ciphertexts
//! - `full`: everything
//!
//! ## Crate Structure
//!
//! - [`edukyber-api`]: error type, [`Bit`](api::Bit) and the `BitEncryption` trait
//! - [`edukyber-params`]: N, Q and the named security levels
//! - [`edukyber-algorithms`]: polynomial ring engine
//! - [`edukyber-kem`]: key generation, encryption, decryption, sessions

// Core re-exports (always available)
pub use edukyber_api as api;
pub use rand;
pub use edukyber_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use edukyber_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use edukyber_kem as kem;

/// Common imports for edukyber users
pub mod prelude {
    pub use crate::api::{Bit, BitEncryption, Error, Result};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::poly::prelude::*;

    #[cfg(feature = "kem")]
    pub use crate::kem::kyber::{
        Ciphertext, CryptoEvent, CryptoOperation, EventKind, Kyber1024, Kyber512, Kyber768,
        KyberConfig, KyberParams, KyberSession, Poly, PolyMatrix, PolyVec, PublicKey, SecretKey,
        ToyKyber,
    };
}
