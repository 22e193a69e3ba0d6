// kem/src/kyber/mod.rs

//! Toy Kyber public key encryption.
//!
//! Pure protocol steps live in [`cpa_pke`]; [`KyberSession`] drives them as a
//! state machine and keeps every intermediate artifact; [`ToyKyber`] exposes
//! them through `edukyber_api::BitEncryption`.

pub mod cpa_pke;
pub mod events;
pub mod params;
pub mod polyvec;
mod scheme;
mod session;

// Presets
mod kyber1024;
mod kyber512;
mod kyber768;

pub use self::kyber1024::Kyber1024;
pub use self::kyber512::Kyber512;
pub use self::kyber768::Kyber768;

pub use self::cpa_pke::{
    Ciphertext, DecodeTrace, Decryption, Encryption, KeyGeneration, NoiseMargin, PublicKey,
    SecretKey,
};
pub use self::events::{CryptoEvent, CryptoOperation, EventJournal, EventKind};
pub use self::scheme::ToyKyber;
pub use self::params::{
    Kyber1024Params, Kyber512Params, Kyber768Params, KyberConfig, KyberParams, Poly, KYBER_N,
    KYBER_Q,
};
pub use self::polyvec::{PolyMatrix, PolyVec};
pub use self::session::KyberSession;
