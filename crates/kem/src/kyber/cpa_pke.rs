// kem/src/kyber/cpa_pke.rs

//! The three Kyber steps as pure functions.
//!
//! Randomness comes only from the injected [`RingSampler`]; nothing is
//! mutated in place. Each function returns every artifact it produced so a
//! presentation layer can show the intermediate values.

use edukyber_algorithms::poly::encode::{encode_bit, DecodeBand};
use edukyber_algorithms::poly::params::{center, KyberRing};
use edukyber_algorithms::poly::sampling::RingSampler;
use edukyber_algorithms::poly::stats::PolyStatistics;
use edukyber_api::Bit;
use log::debug;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::params::{KyberConfig, Poly, KYBER_Q};
use super::polyvec::{PolyMatrix, PolyVec};
use crate::error::validate::{self, op};
use crate::error::Result;

/// Public key (A, t).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey {
    /// Uniform public matrix
    pub a: PolyMatrix,
    /// t = A s + e
    pub t: PolyVec,
}

impl PublicKey {
    /// Module rank of the key
    pub fn rank(&self) -> usize {
        self.t.len()
    }
}

/// Secret key s. Wiped when dropped.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    /// Small secret vector
    pub s: PolyVec,
}

impl SecretKey {
    /// Module rank of the key
    pub fn rank(&self) -> usize {
        self.s.len()
    }
}

/// Everything key generation produced.
#[derive(Debug, Clone)]
pub struct KeyGeneration {
    /// Published (A, t)
    pub public_key: PublicKey,
    /// Retained s
    pub secret_key: SecretKey,
    /// Key-generation error e; not needed after t is formed
    pub e: PolyVec,
}

/// Ciphertext (u, v).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ciphertext {
    /// u = A^T r + e1
    pub u: PolyVec,
    /// v = t^T r + e2 + encode(m)
    pub v: Poly,
}

/// Everything one encryption produced.
///
/// r, e1 and e2 are exposed for inspection only; they must never be reused for
/// another encryption.
#[derive(Debug, Clone)]
pub struct Encryption {
    /// The ciphertext
    pub ciphertext: Ciphertext,
    /// Ephemeral secret vector
    pub r: PolyVec,
    /// Error added to u
    pub e1: PolyVec,
    /// Error added to v
    pub e2: Poly,
    /// The plaintext bit
    pub bit: Bit,
}

/// How coefficient 0 of the noisy message was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeTrace {
    /// m'[0]
    pub coefficient: u32,
    /// Lower edge of the band decoding to 1
    pub lower: u32,
    /// Upper edge of the band decoding to 1
    pub upper: u32,
    /// Decoded bit
    pub bit: Bit,
}

/// Everything one decryption produced.
#[derive(Debug, Clone)]
pub struct Decryption {
    /// Recovered bit
    pub bit: Bit,
    /// m' = v - s^T u
    pub noisy_message: Poly,
    /// Decode decision for m'[0]
    pub trace: DecodeTrace,
}

impl Decryption {
    /// Statistics of the centered noisy message
    pub fn noisy_statistics(&self) -> PolyStatistics {
        self.noisy_message.centered_statistics()
    }
}

/// Coefficient-0 noise compared with the decoding threshold Q/4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseMargin {
    /// Centered noise at coefficient 0
    pub coefficient: i32,
    /// Q/4
    pub bound: u32,
}

impl NoiseMargin {
    /// True when the noise is small enough for decoding to be exact.
    pub fn within_bound(&self) -> bool {
        self.coefficient.unsigned_abs() < self.bound
    }

    /// Distance left before the noise reaches the bound; negative once past it.
    pub fn headroom(&self) -> i64 {
        self.bound as i64 - self.coefficient.unsigned_abs() as i64
    }
}

/// Key generation: A uniform, s and e from CBD(eta), t = A s + e.
pub fn keygen<R: RngCore>(sampler: &mut RingSampler<R>, config: &KyberConfig) -> KeyGeneration {
    let k = config.k();

    let a = PolyMatrix::sample_uniform(sampler, k);
    debug!("keygen: sampled {k}x{k} public matrix A");

    let s = PolyVec::sample_cbd(sampler, k, config.eta());
    let e = PolyVec::sample_cbd(sampler, k, config.eta());
    debug!("keygen: sampled s and e from CBD(eta={})", config.eta());

    let t = a.mul_vec(&s).add(&e);
    debug!("keygen: computed t = A*s + e");

    KeyGeneration {
        public_key: PublicKey { a, t },
        secret_key: SecretKey { s },
        e,
    }
}

/// Encryption of one bit given as an integer; anything but 0 or 1 is rejected.
pub fn encrypt<R: RngCore>(
    sampler: &mut RingSampler<R>,
    config: &KyberConfig,
    public_key: &PublicKey,
    bit: u8,
) -> Result<Encryption> {
    let bit = validate::message_bit(bit)?;
    encrypt_bit(sampler, config, public_key, bit)
}

/// Encryption: fresh r, e1, e2 from CBD(eta); u = A^T r + e1; v = t^T r + e2 + encode(m).
pub fn encrypt_bit<R: RngCore>(
    sampler: &mut RingSampler<R>,
    config: &KyberConfig,
    public_key: &PublicKey,
    bit: Bit,
) -> Result<Encryption> {
    validate::require(!public_key.t.is_empty(), op::ENCRYPT, "a public key t")?;
    validate::same_rank("public matrix A", public_key.rank(), public_key.a.dimension())?;
    validate::same_rank("public key t", config.k(), public_key.rank())?;

    let k = config.k();
    let r = PolyVec::sample_cbd(sampler, k, config.eta());
    let e1 = PolyVec::sample_cbd(sampler, k, config.eta());
    let e2 = sampler.cbd::<KyberRing>(config.eta());
    debug!("encrypt: sampled r, e1, e2 from CBD(eta={})", config.eta());

    let u = public_key.a.transpose_mul_vec(&r).add(&e1);
    debug!("encrypt: computed u = A^T*r + e1");

    let m = encode_bit::<KyberRing>(bit);
    let v = public_key.t.inner_product(&r).add(&e2).add(&m);
    debug!("encrypt: computed v = t^T*r + e2 + encode(m), m'[0] = {}", m.coeff(0));

    Ok(Encryption {
        ciphertext: Ciphertext { u, v },
        r,
        e1,
        e2,
        bit,
    })
}

/// Decryption returning only the bit.
pub fn decrypt(secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<Bit> {
    decrypt_traced(secret_key, ciphertext).map(|d| d.bit)
}

/// Decryption: m' = v - s^T u, then decode m'[0].
pub fn decrypt_traced(secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<Decryption> {
    validate::require(!secret_key.s.is_empty(), op::DECRYPT, "a secret key s")?;
    validate::require(!ciphertext.u.is_empty(), op::DECRYPT, "a ciphertext (u, v)")?;
    validate::same_rank("ciphertext u", secret_key.rank(), ciphertext.u.len())?;

    let s_dot_u = secret_key.s.inner_product(&ciphertext.u);
    debug!("decrypt: computed s^T*u");

    let noisy_message = ciphertext.v.sub(&s_dot_u);
    let band = DecodeBand::for_modulus::<KyberRing>();
    let coefficient = noisy_message.coeff(0);
    let bit = band.decode(coefficient);
    debug!(
        "decrypt: m'[0] = {} against [{}, {}] -> {}",
        coefficient, band.lower, band.upper, bit
    );

    Ok(Decryption {
        bit,
        noisy_message,
        trace: DecodeTrace {
            coefficient,
            lower: band.lower,
            upper: band.upper,
            bit,
        },
    })
}

/// The decryption perturbation e2 + e^T r - s^T e1.
///
/// For an honest run, v - s^T u equals encode(m) plus exactly this polynomial:
/// the A-dependent terms (A s)^T r and s^T (A^T r) cancel.
pub fn noise_term(s: &PolyVec, e: &PolyVec, r: &PolyVec, e1: &PolyVec, e2: &Poly) -> Poly {
    e2.add(&e.inner_product(r)).sub(&s.inner_product(e1))
}

/// Coefficient 0 of a noise polynomial, measured against Q/4.
pub fn noise_margin(noise: &Poly) -> NoiseMargin {
    NoiseMargin {
        coefficient: center::<KyberRing>(noise.coeff(0)),
        bound: KYBER_Q / 4,
    }
}
