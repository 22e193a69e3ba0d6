// kem/src/kyber/params.rs

//! Kyber parameter definitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use edukyber_algorithms::poly::params::KyberRing;
use edukyber_algorithms::poly::polynomial::Polynomial;
use edukyber_api::error::validation;
use edukyber_params::pqc::kyber as global_params; // Using an alias for clarity

use crate::error::Result;

/// Common Kyber polynomial degree.
pub const KYBER_N: usize = global_params::KYBER_N;
/// Common Kyber coefficient modulus.
pub const KYBER_Q: u32 = global_params::KYBER_Q as u32;

/// A polynomial in the Kyber ring.
pub type Poly = Polynomial<KyberRing>;

/// Trait defining parameters for a specific Kyber variant.
pub trait KyberParams: Send + Sync + 'static {
    /// Module rank k (dimension of vectors/matrices).
    const K: usize;
    /// CBD width used for every noise draw.
    const ETA: u8;
    /// Algorithm name string.
    const NAME: &'static str;
    /// NIST security category.
    const SECURITY_LEVEL: u8;
}

/// Kyber-512 parameters.
pub struct Kyber512Params;
impl KyberParams for Kyber512Params {
    const K: usize = global_params::KYBER512.k;
    const ETA: u8 = global_params::KYBER512.eta1;
    const NAME: &'static str = global_params::KYBER512.name;
    const SECURITY_LEVEL: u8 = global_params::KYBER512.security_level;
}

/// Kyber-768 parameters.
pub struct Kyber768Params;
impl KyberParams for Kyber768Params {
    const K: usize = global_params::KYBER768.k;
    const ETA: u8 = global_params::KYBER768.eta1;
    const NAME: &'static str = global_params::KYBER768.name;
    const SECURITY_LEVEL: u8 = global_params::KYBER768.security_level;
}

/// Kyber-1024 parameters.
pub struct Kyber1024Params;
impl KyberParams for Kyber1024Params {
    const K: usize = global_params::KYBER1024.k;
    const ETA: u8 = global_params::KYBER1024.eta1;
    const NAME: &'static str = global_params::KYBER1024.name;
    const SECURITY_LEVEL: u8 = global_params::KYBER1024.security_level;
}

/// Runtime parameter selection: module rank `k` and CBD width `eta`.
///
/// Only `k` and `eta` vary between levels here; N and Q are fixed by
/// [`KyberRing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawKyberConfig")
)]
pub struct KyberConfig {
    k: usize,
    eta: u8,
}

/// Unvalidated wire form; deserialization goes through [`KyberConfig::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawKyberConfig {
    k: usize,
    eta: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawKyberConfig> for KyberConfig {
    type Error = crate::error::Error;

    fn try_from(raw: RawKyberConfig) -> Result<Self> {
        Self::new(raw.k, raw.eta)
    }
}

impl KyberConfig {
    /// Validates and builds a configuration.
    ///
    /// `k` must be 2, 3 or 4 and `eta` must be 2 or 3.
    pub fn new(k: usize, eta: u8) -> Result<Self> {
        validation::one_of(k, &global_params::SUPPORTED_K, "k")?;
        validation::one_of(eta, &global_params::SUPPORTED_ETA, "eta")?;
        Ok(Self { k, eta })
    }

    /// Configuration of a compile-time parameter set.
    pub fn of<P: KyberParams>() -> Self {
        Self {
            k: P::K,
            eta: P::ETA,
        }
    }

    /// Module rank
    pub fn k(&self) -> usize {
        self.k
    }

    /// CBD width
    pub fn eta(&self) -> u8 {
        self.eta
    }

    /// Name of the matching security level, if `k` identifies one.
    pub fn level_name(&self) -> Option<&'static str> {
        global_params::ALL_LEVELS
            .iter()
            .find(|level| level.k == self.k)
            .map(|level| level.name)
    }
}

impl Default for KyberConfig {
    /// The classroom setup: k = 2, eta = 2.
    fn default() -> Self {
        Self {
            k: global_params::TEACHING_K,
            eta: global_params::TEACHING_ETA,
        }
    }
}

impl core::fmt::Display for KyberConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (N={}, Q={}, k={}, eta={})",
            self.level_name().unwrap_or("custom"),
            KYBER_N,
            KYBER_Q,
            self.k,
            self.eta
        )
    }
}
