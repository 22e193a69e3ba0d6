//! polynomial.rs - Elements of R_q = Z_q[X]/(X^N + 1) and their arithmetic

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::params::{center, reduce, Modulus};
use super::stats::PolyStatistics;

/// A polynomial in a ring R_Q = Z_Q[X]/(X^N + 1)
///
/// Always holds exactly `M::N` coefficients, each in `[0, M::Q)`. Every
/// operation returns a fresh value; operands are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound = "", from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct Polynomial<M: Modulus> {
    coeffs: Vec<u32>,
    _marker: PhantomData<M>,
}

impl<M: Modulus> Polynomial<M> {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self::from_reduced(vec![0; M::N])
    }

    /// Creates a polynomial from a slice of coefficients.
    ///
    /// Never fails: a short slice is zero-padded, a long one is truncated to
    /// N, and every coefficient is reduced modulo Q.
    pub fn from_coeffs(coeffs_slice: &[u32]) -> Self {
        let coeffs = (0..M::N)
            .map(|i| coeffs_slice.get(i).map_or(0, |&c| c % M::Q))
            .collect();
        Self::from_reduced(coeffs)
    }

    /// Creates a polynomial from signed coefficients, reducing each with a
    /// floor-mod so that negative inputs land in `[0, Q)`.
    pub fn from_signed(coeffs_slice: &[i64]) -> Self {
        let coeffs = (0..M::N)
            .map(|i| coeffs_slice.get(i).map_or(0, |&c| reduce::<M>(c)))
            .collect();
        Self::from_reduced(coeffs)
    }

    /// The constant polynomial `c`
    pub fn constant(c: u32) -> Self {
        Self::from_coeffs(&[c])
    }

    /// Wraps a coefficient vector that already satisfies the length and range invariants.
    pub(crate) fn from_reduced(coeffs: Vec<u32>) -> Self {
        debug_assert_eq!(coeffs.len(), M::N);
        debug_assert!(coeffs.iter().all(|&c| c < M::Q));
        Self {
            coeffs,
            _marker: PhantomData,
        }
    }

    /// Returns the degree N of the polynomial
    pub fn degree() -> usize {
        M::N
    }

    /// Returns the modulus Q for coefficient arithmetic
    pub fn modulus_q() -> u32 {
        M::Q
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u32] {
        &self.coeffs
    }

    /// Coefficient of X^i
    ///
    /// # Panics
    /// If `i >= N`.
    pub fn coeff(&self, i: usize) -> u32 {
        self.coeffs[i]
    }

    /// True if every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Polynomial addition modulo Q
    pub fn add(&self, other: &Self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| (a + b) % M::Q)
            .collect();
        Self::from_reduced(coeffs)
    }

    /// Polynomial subtraction modulo Q
    pub fn sub(&self, other: &Self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| reduce::<M>(a as i64 - b as i64))
            .collect();
        Self::from_reduced(coeffs)
    }

    /// Polynomial negation modulo Q
    pub fn neg(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| if c == 0 { 0 } else { M::Q - c })
            .collect();
        Self::from_reduced(coeffs)
    }

    /// Scalar multiplication
    pub fn scalar_mul(&self, scalar: u32) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| ((c as u64 * scalar as u64) % M::Q as u64) as u32)
            .collect();
        Self::from_reduced(coeffs)
    }

    /// Negacyclic schoolbook multiplication.
    ///
    /// Forms the full length 2N-1 convolution, folds the upper half onto the
    /// lower half with a sign flip (X^N = -1), then reduces modulo Q. O(N^2).
    pub fn mul(&self, other: &Self) -> Self {
        let n = M::N;
        let mut acc = vec![0i64; 2 * n - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                acc[i + j] += a as i64 * b as i64;
            }
        }

        for k in (n..2 * n - 1).rev() {
            acc[k - n] -= acc[k];
        }

        Self::from_reduced(acc[..n].iter().map(|&c| reduce::<M>(c)).collect())
    }

    /// Coefficients in centered form, each in (-Q/2, Q/2]
    pub fn centered(&self) -> Vec<i32> {
        self.coeffs.iter().map(|&c| center::<M>(c)).collect()
    }

    /// Infinity norm over the centered coefficients
    pub fn infinity_norm(&self) -> u32 {
        self.coeffs
            .iter()
            .map(|&c| center::<M>(c).unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Statistics over the canonical coefficients in `[0, Q)`
    pub fn statistics(&self) -> PolyStatistics {
        PolyStatistics::from_values(self.coeffs.iter().map(|&c| c as i64))
    }

    /// Statistics over the centered coefficients; the meaningful view for noise
    pub fn centered_statistics(&self) -> PolyStatistics {
        PolyStatistics::from_values(self.coeffs.iter().map(|&c| center::<M>(c) as i64))
    }
}

// Zeroes in place; the length invariant survives.
impl<M: Modulus> Zeroize for Polynomial<M> {
    fn zeroize(&mut self) {
        self.coeffs.as_mut_slice().zeroize();
    }
}

impl<M: Modulus> Default for Polynomial<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: Modulus> From<Vec<u32>> for Polynomial<M> {
    fn from(coeffs: Vec<u32>) -> Self {
        Self::from_coeffs(&coeffs)
    }
}

impl<M: Modulus> From<Polynomial<M>> for Vec<u32> {
    fn from(poly: Polynomial<M>) -> Self {
        poly.coeffs
    }
}

impl<M: Modulus> fmt::Display for Polynomial<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head: Vec<String> = self.coeffs.iter().take(3).map(|c| c.to_string()).collect();
        match self.coeffs.last() {
            Some(last) if M::N > 3 => write!(f, "Poly([{},...,{}])", head.join(","), last),
            _ => write!(f, "Poly([{}])", head.join(",")),
        }
    }
}

// Implement standard ops traits for ergonomic usage
impl<M: Modulus> Add for Polynomial<M> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(&self, &other)
    }
}

impl<M: Modulus> Add for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl<M: Modulus> Sub for Polynomial<M> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(&self, &other)
    }
}

impl<M: Modulus> Sub for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

impl<M: Modulus> Mul for Polynomial<M> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::mul(&self, &other)
    }
}

impl<M: Modulus> Mul for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::mul(self, other)
    }
}

impl<M: Modulus> Neg for Polynomial<M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl<M: Modulus> Neg for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}
