// kem/src/kyber/scheme.rs

//! Toy Kyber as a single-bit public key encryption scheme.

use core::marker::PhantomData;

use edukyber_algorithms::poly::sampling::RingSampler;
use edukyber_api::error::Result as ApiResult;
use edukyber_api::{Bit, BitEncryption};
use rand::RngCore;

use super::cpa_pke::{self, Ciphertext, PublicKey, SecretKey};
use super::params::{KyberConfig, KyberParams};

/// Stateless Kyber scheme for the parameter set `P`.
///
/// Each call wraps the caller's generator in a fresh [`RingSampler`]; the
/// intermediate noise is dropped once the call returns. Use
/// [`KyberSession`](super::KyberSession) to keep it for inspection.
pub struct ToyKyber<P: KyberParams> {
    _params: PhantomData<P>,
}

impl<P: KyberParams> ToyKyber<P> {
    /// Parameters this scheme runs with
    pub fn config() -> KyberConfig {
        KyberConfig::of::<P>()
    }
}

impl<P: KyberParams> BitEncryption for ToyKyber<P> {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Ciphertext = Ciphertext;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: RngCore + ?Sized>(rng: &mut R) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let mut sampler = RingSampler::new(rng);
        let keygen = cpa_pke::keygen(&mut sampler, &Self::config());
        Ok((keygen.public_key, keygen.secret_key))
    }

    fn encrypt<R: RngCore + ?Sized>(
        rng: &mut R,
        public_key: &Self::PublicKey,
        bit: Bit,
    ) -> ApiResult<Self::Ciphertext> {
        let mut sampler = RingSampler::new(rng);
        cpa_pke::encrypt_bit(&mut sampler, &Self::config(), public_key, bit)
            .map(|encryption| encryption.ciphertext)
    }

    fn decrypt(secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> ApiResult<Bit> {
        cpa_pke::decrypt(secret_key, ciphertext)
    }
}
