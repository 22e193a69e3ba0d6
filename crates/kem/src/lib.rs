//! Toy Kyber public key encryption
//!
//! Composes the ring engine from `edukyber-algorithms` into the three Kyber
//! steps (key generation, encryption, decryption) over vectors and matrices of
//! polynomials, and wraps them in a [`KyberSession`] state machine that keeps
//! every intermediate artifact and an event journal for presentation layers.
//!
//! Pedagogical only: one message bit per ciphertext, no compression, no
//! constant-time guarantees, and whatever generator the caller injects.

#![forbid(unsafe_code)]

pub mod error;
pub mod kyber;

// Re-exports
pub use error::{Error, Result};
pub use kyber::{
    Ciphertext, CryptoEvent, CryptoOperation, EventKind, Kyber1024, Kyber512, Kyber768,
    KyberConfig, KyberParams, KyberSession, PublicKey, SecretKey, ToyKyber,
};
