//! Descriptive statistics over polynomial coefficients

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary of a polynomial's coefficient distribution.
///
/// Built from whichever representation the caller picks: canonical values in
/// `[0, Q)` via [`Polynomial::statistics`](super::polynomial::Polynomial::statistics) or
/// centered values via
/// [`Polynomial::centered_statistics`](super::polynomial::Polynomial::centered_statistics).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest value
    pub min: i64,
    /// Largest value
    pub max: i64,
    /// Euclidean (L2) norm
    pub norm: f64,
}

impl PolyStatistics {
    /// Mean below which a centered polynomial may be small noise
    pub const NOISE_MEAN_LIMIT: f64 = 10.0;
    /// Standard deviation below which a centered polynomial may be small noise
    pub const NOISE_STD_DEV_LIMIT: f64 = 5.0;
    /// L2 norm above which a polynomial counts as large
    pub const LARGE_NORM: f64 = 1000.0;

    /// Computes statistics over a sequence of values. Empty input yields all zeros.
    pub fn from_values<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let values: Vec<i64> = values.into_iter().collect();
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        let norm = values.iter().map(|&v| (v as f64).powi(2)).sum::<f64>().sqrt();

        Self {
            mean,
            std_dev: variance.sqrt(),
            min: values.iter().copied().min().unwrap_or(0),
            max: values.iter().copied().max().unwrap_or(0),
            norm,
        }
    }

    /// Heuristic: near-zero mean and tight spread, as CBD samples have.
    pub fn looks_like_noise(&self) -> bool {
        self.mean.abs() < Self::NOISE_MEAN_LIMIT && self.std_dev < Self::NOISE_STD_DEV_LIMIT
    }

    /// Heuristic: L2 norm above [`Self::LARGE_NORM`].
    pub fn is_large(&self) -> bool {
        self.norm > Self::LARGE_NORM
    }
}
