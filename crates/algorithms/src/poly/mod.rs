//! Polynomial Ring Engine
//!
//! Elements of R_q = Z_q[X]/(X^N + 1) together with their arithmetic, the
//! uniform and centered-binomial samplers, single-bit message encoding and
//! descriptive statistics.

pub mod encode;
pub mod params;
pub mod polynomial;
pub mod sampling;
pub mod stats;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::encode::{decode_coefficient, encode_bit, DecodeBand};
    pub use super::params::{center, KyberRing, Modulus};
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{CbdSampler, DefaultSamplers, RingSampler, UniformSampler};
    pub use super::stats::PolyStatistics;
}
