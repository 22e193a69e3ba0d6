//! Trait definitions

pub mod pke;

pub use pke::BitEncryption;
