//! params.rs - Polynomial ring parameters

use edukyber_params::pqc::kyber::{KYBER_N, KYBER_Q};

/// Basic trait defining the modulus and degree for a polynomial ring
pub trait Modulus: Clone + core::fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    /// The primary modulus Q for coefficient arithmetic
    const Q: u32;

    /// The polynomial degree N (number of coefficients)
    const N: usize;
}

/// The Kyber ring: N = 256, Q = 3329
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KyberRing;

impl Modulus for KyberRing {
    const Q: u32 = KYBER_Q as u32;
    const N: usize = KYBER_N;
}

/// Reduce any signed integer into the canonical range [0, Q).
#[inline(always)]
pub fn reduce<M: Modulus>(x: i64) -> u32 {
    x.rem_euclid(M::Q as i64) as u32
}

/// Centered representative of a canonical coefficient, in (-Q/2, Q/2].
#[inline(always)]
pub fn center<M: Modulus>(c: u32) -> i32 {
    let c = (c % M::Q) as i32;
    if c > (M::Q / 2) as i32 {
        c - M::Q as i32
    } else {
        c
    }
}
