// src/statistical.rs

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use statrs::distribution::{Binomial, ChiSquared, ContinuousCDF, DiscreteCDF};
use statrs::function::factorial::binomial;

/// How many seeded trials to run and what counts as passing.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub trials: usize,
    pub min_success_rate: f64,
    pub base_seed: u64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            min_success_rate: 0.99,
            base_seed: 0x6b79_6265,
        }
    }
}

impl TrialConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_min_success_rate(mut self, rate: f64) -> Self {
        self.min_success_rate = rate;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Runs `trial` once per seed, each with its own generator.
    pub fn run<F>(&self, mut trial: F) -> TrialReport
    where
        F: FnMut(&mut ChaChaRng) -> bool,
    {
        let successes = (0..self.trials as u64)
            .filter(|i| {
                let mut rng = ChaChaRng::seed_from_u64(self.base_seed.wrapping_add(*i));
                trial(&mut rng)
            })
            .count();

        TrialReport {
            trials: self.trials,
            successes,
            min_success_rate: self.min_success_rate,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TrialReport {
    pub trials: usize,
    pub successes: usize,
    pub min_success_rate: f64,
}

impl TrialReport {
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.successes as f64 / self.trials as f64
    }

    pub fn passed(&self) -> bool {
        self.success_rate() >= self.min_success_rate
    }

    /// Two-sided p-value of the observed count under Binomial(trials, p).
    pub fn binomial_p_value(&self, p: f64) -> f64 {
        let dist = match Binomial::new(p, self.trials as u64) {
            Ok(dist) => dist,
            Err(_) => return 0.0,
        };
        let k = self.successes as u64;
        let lower = dist.cdf(k);
        let upper = if k == 0 { 1.0 } else { 1.0 - dist.cdf(k - 1) };
        (2.0 * lower.min(upper)).min(1.0)
    }
}

/// Pearson chi-squared statistic of observed counts against expected probabilities.
pub fn chi_squared(observed: &[u64], expected_probabilities: &[f64]) -> f64 {
    let total: u64 = observed.iter().sum();
    observed
        .iter()
        .zip(expected_probabilities)
        .map(|(&o, &p)| {
            let e = p * total as f64;
            let d = o as f64 - e;
            d * d / e
        })
        .sum()
}

/// Critical value of the chi-squared distribution at `1 - alpha`.
pub fn chi_squared_critical(degrees_of_freedom: f64, alpha: f64) -> f64 {
    match ChiSquared::new(degrees_of_freedom) {
        Ok(dist) => dist.inverse_cdf(1.0 - alpha),
        Err(_) => f64::NAN,
    }
}

/// P(X = v) for X ~ CBD(eta), v in -eta..=eta.
pub fn cbd_probabilities(eta: u8) -> Vec<f64> {
    let n = 2 * eta as u64;
    let total = (1u64 << n) as f64;
    (0..=n).map(|j| binomial(n, j) / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cbd_probabilities() {
        let p = cbd_probabilities(2);
        assert_eq!(p, vec![1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0]);
        assert!((cbd_probabilities(3).iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_chi_squared_critical() {
        // Tabulated: 4 degrees of freedom at 0.999 is 18.467
        assert!((chi_squared_critical(4.0, 0.001) - 18.467).abs() < 0.01);
    }

    #[test]
    fn test_report() {
        let report = TrialConfig::default()
            .with_trials(10)
            .run(|_| true);
        assert_eq!(report.successes, 10);
        assert!(report.passed());
        assert!(report.binomial_p_value(0.5) < 0.01);
    }
}
