//! sampling.rs - Polynomial sampling algorithms
//!
//! Every sampler draws from a generator supplied by the caller. There is no
//! ambient or global random source: seed the generator and the output is
//! reproducible.

use rand::RngCore;

use super::params::{reduce, Modulus};
use super::polynomial::Polynomial;

/// Trait for sampling polynomials uniformly at random
pub trait UniformSampler<M: Modulus> {
    /// Samples a polynomial with coefficients uniformly random in [0, Q-1]
    fn sample_uniform<R: RngCore + ?Sized>(rng: &mut R) -> Polynomial<M>;
}

/// Trait for sampling polynomials from a Centered Binomial Distribution (CBD)
pub trait CbdSampler<M: Modulus> {
    /// Samples a polynomial with coefficients from CBD(eta), mapped into [0, Q)
    fn sample_cbd<R: RngCore + ?Sized>(rng: &mut R, eta: u8) -> Polynomial<M>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl<M: Modulus> UniformSampler<M> for DefaultSamplers {
    fn sample_uniform<R: RngCore + ?Sized>(rng: &mut R) -> Polynomial<M> {
        let coeffs = if M::Q <= (1 << 16) {
            (0..M::N).map(|_| sample_below_small(rng, M::Q)).collect()
        } else {
            (0..M::N).map(|_| sample_below_large(rng, M::Q)).collect()
        };
        Polynomial::from_reduced(coeffs)
    }
}

/// Rejection sampling on 16-bit draws (Q <= 2^16)
fn sample_below_small<R: RngCore + ?Sized>(rng: &mut R, q: u32) -> u32 {
    // Largest multiple of q that fits in u16
    let threshold = ((1u32 << 16) / q) * q;

    loop {
        let mut bytes = [0u8; 2];
        rng.fill_bytes(&mut bytes);
        let sample = u16::from_le_bytes(bytes) as u32;

        if sample < threshold {
            return sample % q;
        }
    }
}

/// Rejection sampling on 32-bit draws (2^16 < Q)
fn sample_below_large<R: RngCore + ?Sized>(rng: &mut R, q: u32) -> u32 {
    let threshold = u32::MAX - (u32::MAX % q);

    loop {
        let sample = rng.next_u32();
        if sample < threshold {
            return sample % q;
        }
    }
}

/// Hands out single fair bits, refilling from the generator 64 at a time.
struct BitReader<'a, R: RngCore + ?Sized> {
    rng: &'a mut R,
    word: u64,
    remaining: u32,
}

impl<'a, R: RngCore + ?Sized> BitReader<'a, R> {
    fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            word: 0,
            remaining: 0,
        }
    }

    fn next_bit(&mut self) -> i64 {
        if self.remaining == 0 {
            self.word = self.rng.next_u64();
            self.remaining = 64;
        }
        let bit = (self.word & 1) as i64;
        self.word >>= 1;
        self.remaining -= 1;
        bit
    }

    fn sum_bits(&mut self, count: u8) -> i64 {
        (0..count).map(|_| self.next_bit()).sum()
    }
}

impl<M: Modulus> CbdSampler<M> for DefaultSamplers {
    fn sample_cbd<R: RngCore + ?Sized>(rng: &mut R, eta: u8) -> Polynomial<M> {
        let mut bits = BitReader::new(rng);

        // CBD(eta): sum of eta fair bits minus sum of another eta fair bits,
        // giving a value in [-eta, eta] with mean 0 and variance eta/2
        let coeffs = (0..M::N)
            .map(|_| {
                let a = bits.sum_bits(eta);
                let b = bits.sum_bits(eta);
                reduce::<M>(a - b)
            })
            .collect();

        Polynomial::from_reduced(coeffs)
    }
}

/// A random source bound to the ring engine.
///
/// Owns (or mutably borrows, since `&mut R` is itself an `RngCore`) the
/// generator so that protocol code threads one explicit capability through
/// every draw.
#[derive(Debug)]
pub struct RingSampler<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RingSampler<R> {
    /// Wraps a generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform polynomial over [0, Q)
    pub fn uniform<M: Modulus>(&mut self) -> Polynomial<M> {
        <DefaultSamplers as UniformSampler<M>>::sample_uniform(&mut self.rng)
    }

    /// Centered binomial polynomial of width `eta`
    pub fn cbd<M: Modulus>(&mut self, eta: u8) -> Polynomial<M> {
        <DefaultSamplers as CbdSampler<M>>::sample_cbd(&mut self.rng, eta)
    }

    /// Access to the underlying generator
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Releases the generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}
