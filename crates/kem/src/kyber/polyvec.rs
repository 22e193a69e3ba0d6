// kem/src/kyber/polyvec.rs

//! Polynomial vectors and matrices over the Kyber ring.

use core::ops::Index;

use edukyber_algorithms::poly::params::{center, KyberRing};
use edukyber_algorithms::poly::sampling::RingSampler;
use edukyber_algorithms::poly::stats::PolyStatistics;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::params::Poly;

/// A vector of polynomials, of dimension k.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyVec {
    polys: Vec<Poly>,
}

impl PolyVec {
    /// Creates a new zero PolyVec of dimension k.
    pub fn zero(k: usize) -> Self {
        Self {
            polys: vec![Poly::zero(); k],
        }
    }

    /// Wraps existing polynomials.
    pub fn from_polys(polys: Vec<Poly>) -> Self {
        Self { polys }
    }

    /// k polynomials drawn from CBD(eta).
    pub fn sample_cbd<R: RngCore>(sampler: &mut RingSampler<R>, k: usize, eta: u8) -> Self {
        Self {
            polys: (0..k).map(|_| sampler.cbd::<KyberRing>(eta)).collect(),
        }
    }

    /// Returns the dimension of this PolyVec.
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// True for the zero-dimensional vector.
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Iterates over the polynomials.
    pub fn iter(&self) -> core::slice::Iter<'_, Poly> {
        self.polys.iter()
    }

    /// Slice view of the polynomials.
    pub fn as_slice(&self) -> &[Poly] {
        &self.polys
    }

    /// Elementwise sum. Dimensions must agree.
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len());
        Self {
            polys: self.polys.iter().zip(&other.polys).map(|(a, b)| a.add(b)).collect(),
        }
    }

    /// Elementwise difference. Dimensions must agree.
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len(), other.len());
        Self {
            polys: self.polys.iter().zip(&other.polys).map(|(a, b)| a.sub(b)).collect(),
        }
    }

    /// Statistics over every centered coefficient of every polynomial.
    pub fn centered_statistics(&self) -> PolyStatistics {
        PolyStatistics::from_values(self.polys.iter().flat_map(|p| {
            p.as_coeffs_slice()
                .iter()
                .map(|&c| center::<KyberRing>(c) as i64)
        }))
    }

    /// Ring inner product: sum over i of self[i] * other[i].
    pub fn inner_product(&self, other: &Self) -> Poly {
        debug_assert_eq!(self.len(), other.len());
        self.polys
            .iter()
            .zip(&other.polys)
            .fold(Poly::zero(), |acc, (a, b)| acc.add(&a.mul(b)))
    }
}

impl Index<usize> for PolyVec {
    type Output = Poly;

    fn index(&self, i: usize) -> &Poly {
        &self.polys[i]
    }
}

impl<'a> IntoIterator for &'a PolyVec {
    type Item = &'a Poly;
    type IntoIter = core::slice::Iter<'a, Poly>;

    fn into_iter(self) -> Self::IntoIter {
        self.polys.iter()
    }
}

/// A k x k matrix of polynomials, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMatrix {
    rows: Vec<PolyVec>,
}

impl PolyMatrix {
    /// k x k uniformly random polynomials.
    pub fn sample_uniform<R: RngCore>(sampler: &mut RingSampler<R>, k: usize) -> Self {
        let rows = (0..k)
            .map(|_| PolyVec::from_polys((0..k).map(|_| sampler.uniform::<KyberRing>()).collect()))
            .collect();
        Self { rows }
    }

    /// Builds a matrix from rows. Every row must have as many entries as there are rows.
    pub fn from_rows(rows: Vec<PolyVec>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// Dimension k.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Entry at (row, col).
    pub fn get(&self, row: usize, col: usize) -> &Poly {
        &self.rows[row][col]
    }

    /// Row `row` as a vector.
    pub fn row(&self, row: usize) -> &PolyVec {
        &self.rows[row]
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Self {
        let k = self.dimension();
        let rows = (0..k)
            .map(|col| PolyVec::from_polys((0..k).map(|row| self.get(row, col).clone()).collect()))
            .collect();
        Self { rows }
    }

    /// A * v: entry `row` is sum over col of A[row][col] * v[col].
    pub fn mul_vec(&self, v: &PolyVec) -> PolyVec {
        PolyVec::from_polys(self.rows.iter().map(|row| row.inner_product(v)).collect())
    }

    /// A^T * v: entry `col` is sum over row of A[row][col] * v[row].
    pub fn transpose_mul_vec(&self, v: &PolyVec) -> PolyVec {
        debug_assert_eq!(self.dimension(), v.len());
        let k = self.dimension();
        let polys = (0..k)
            .map(|col| {
                (0..k).fold(Poly::zero(), |acc, row| acc.add(&self.get(row, col).mul(&v[row])))
            })
            .collect();
        PolyVec::from_polys(polys)
    }
}
