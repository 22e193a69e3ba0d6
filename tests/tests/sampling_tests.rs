//! Distribution checks for the uniform and centered binomial samplers

use edukyber_algorithms::poly::prelude::*;
use edukyber_tests::statistical::{cbd_probabilities, chi_squared, chi_squared_critical};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use statrs::statistics::Statistics;

const Q: u32 = 3329;

/// 40 polynomials, 10240 coefficients
fn cbd_values(eta: u8, seed: u64) -> Vec<i32> {
    let mut sampler = RingSampler::new(ChaChaRng::seed_from_u64(seed));
    (0..40)
        .flat_map(|_| sampler.cbd::<KyberRing>(eta).centered())
        .collect()
}

#[test]
fn cbd_eta2_support() {
    let mut sampler = RingSampler::new(ChaChaRng::seed_from_u64(1));
    for _ in 0..40 {
        let p = sampler.cbd::<KyberRing>(2);
        assert!(p
            .as_coeffs_slice()
            .iter()
            .all(|c| [0, 1, 2, Q - 2, Q - 1].contains(c)));
    }
}

#[test]
fn cbd_eta2_moments() {
    let values: Vec<f64> = cbd_values(2, 2).into_iter().map(f64::from).collect();
    let mean = (&values).mean();
    let variance = (&values).variance();

    assert!(mean.abs() < 0.05, "mean {mean}");
    assert!((variance - 1.0).abs() < 0.08, "variance {variance}");
}

#[test]
fn cbd_eta3_moments() {
    let values: Vec<f64> = cbd_values(3, 3).into_iter().map(f64::from).collect();
    assert!(values.iter().all(|v| v.abs() <= 3.0));

    let variance = (&values).variance();
    assert!((variance - 1.5).abs() < 0.1, "variance {variance}");
}

#[test]
fn cbd_matches_binomial_shape() {
    for eta in [2u8, 3] {
        let mut counts = vec![0u64; 2 * eta as usize + 1];
        for v in cbd_values(eta, 10 + eta as u64) {
            counts[(v + eta as i32) as usize] += 1;
        }

        let stat = chi_squared(&counts, &cbd_probabilities(eta));
        let critical = chi_squared_critical(2.0 * eta as f64, 0.001);
        assert!(stat < critical, "eta {eta}: chi^2 {stat:.2} >= {critical:.2}");
    }
}

#[test]
fn cbd_eta0_is_zero() {
    let mut sampler = RingSampler::new(ChaChaRng::seed_from_u64(4));
    assert!(sampler.cbd::<KyberRing>(0).is_zero());
}

#[test]
fn uniform_covers_the_field_evenly() {
    const BUCKETS: usize = 16;
    let mut sampler = RingSampler::new(ChaChaRng::seed_from_u64(5));
    let mut counts = [0u64; BUCKETS];

    for _ in 0..64 {
        for &c in sampler.uniform::<KyberRing>().as_coeffs_slice() {
            assert!(c < Q);
            counts[c as usize * BUCKETS / Q as usize] += 1;
        }
    }

    // Bucket widths differ by at most one value out of ~208
    let probabilities: Vec<f64> = (0..BUCKETS)
        .map(|b| {
            let lo = (b * Q as usize).div_ceil(BUCKETS);
            let hi = ((b + 1) * Q as usize).div_ceil(BUCKETS);
            (hi - lo) as f64 / Q as f64
        })
        .collect();

    let stat = chi_squared(&counts, &probabilities);
    let critical = chi_squared_critical((BUCKETS - 1) as f64, 0.001);
    assert!(stat < critical, "chi^2 {stat:.2} >= {critical:.2}");
}

#[test]
fn samplers_are_reproducible() {
    let mut a = RingSampler::new(ChaChaRng::seed_from_u64(6));
    let mut b = RingSampler::new(ChaChaRng::seed_from_u64(6));
    assert_eq!(a.uniform::<KyberRing>(), b.uniform::<KyberRing>());
    assert_eq!(a.cbd::<KyberRing>(2), b.cbd::<KyberRing>(2));
}

#[test]
fn noise_statistics_heuristics() {
    let mut sampler = RingSampler::new(ChaChaRng::seed_from_u64(7));

    let noise = sampler.cbd::<KyberRing>(2).centered_statistics();
    assert!(noise.looks_like_noise());
    assert!(!noise.is_large());

    let uniform = sampler.uniform::<KyberRing>().centered_statistics();
    assert!(!uniform.looks_like_noise());
    assert!(uniform.is_large());
}
