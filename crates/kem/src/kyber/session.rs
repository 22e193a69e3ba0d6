// kem/src/kyber/session.rs

//! A single-owner Kyber session: the three phases as a state machine.
//!
//! Phases run in order KeyGen -> Encrypt -> Decrypt. Re-running key
//! generation discards any pending ciphertext. Decryption consumes the
//! ephemeral artifacts (r, e1, e2, u, v), so every decryption needs a fresh
//! encryption before it.

use edukyber_api::Bit;
use log::{debug, info, warn};
use rand::RngCore;

use edukyber_algorithms::poly::sampling::RingSampler;

use super::cpa_pke::{
    self, Ciphertext, Decryption, Encryption, KeyGeneration, NoiseMargin, PublicKey, SecretKey,
};
use super::events::{CryptoEvent, CryptoOperation, EventJournal, EventKind};
use super::params::{KyberConfig, Poly, KYBER_Q};
use super::polyvec::PolyVec;
use crate::error::validate::{self, op};
use crate::error::{Error, Result};

/// Session state for one logical caller.
///
/// Owns its generator; independent sessions share nothing and need no
/// coordination.
pub struct KyberSession<R: RngCore> {
    config: KyberConfig,
    sampler: RingSampler<R>,
    keys: Option<KeyGeneration>,
    exchange: Option<Encryption>,
    last_decryption: Option<Decryption>,
    journal: EventJournal,
}

impl<R: RngCore> KyberSession<R> {
    /// New session with no keys.
    pub fn new(config: KyberConfig, rng: R) -> Self {
        let mut journal = EventJournal::default();
        journal.record(
            CryptoOperation::KeyGeneration,
            "init",
            EventKind::Info,
            format!("Session initialised for {}", config),
        );
        Self {
            config,
            sampler: RingSampler::new(rng),
            keys: None,
            exchange: None,
            last_decryption: None,
            journal,
        }
    }

    /// Parameters of this session
    pub fn config(&self) -> &KyberConfig {
        &self.config
    }

    /// KeyGen phase. Always succeeds; discards any previous keys and ciphertext.
    pub fn generate_keys(&mut self) -> &PublicKey {
        let k = self.config.k();
        self.journal.record(
            CryptoOperation::KeyGeneration,
            "start",
            EventKind::Action,
            format!("Starting key generation for {}", self.config),
        );

        let keygen = cpa_pke::keygen(&mut self.sampler, &self.config);
        self.exchange = None;
        self.last_decryption = None;

        self.journal.record(
            CryptoOperation::KeyGeneration,
            "matrix_A",
            EventKind::Info,
            format!("Public matrix A sampled ({}x{} uniform polynomials in Z_q[X])", k, k),
        );
        self.journal.record_with_statistics(
            CryptoOperation::KeyGeneration,
            "secret_s",
            EventKind::Info,
            format!(
                "Secret vector s sampled from CBD(eta={}), max |coefficient| = {}",
                self.config.eta(),
                max_infinity_norm(&keygen.secret_key.s)
            ),
            keygen.secret_key.s.centered_statistics(),
        );
        self.journal.record_with_statistics(
            CryptoOperation::KeyGeneration,
            "public_key",
            EventKind::Success,
            "Public key t = A*s + e computed",
            keygen.public_key.t.centered_statistics(),
        );
        self.journal.record(
            CryptoOperation::KeyGeneration,
            "complete",
            EventKind::Success,
            "Key generation complete, ready to encrypt",
        );
        info!("key generation complete for {}", self.config);

        &self.keys.insert(keygen).public_key
    }

    /// Encrypt phase for a bit given as an integer.
    ///
    /// Fails with `InvalidInput` unless `bit` is 0 or 1, and with
    /// `Precondition` before key generation.
    pub fn encrypt(&mut self, bit: u8) -> Result<&Ciphertext> {
        let bit = validate::message_bit(bit)?;
        self.encrypt_bit(bit)
    }

    /// Encrypt phase for a typed bit.
    pub fn encrypt_bit(&mut self, bit: Bit) -> Result<&Ciphertext> {
        let keys = self
            .keys
            .as_ref()
            .ok_or(Error::precondition(op::ENCRYPT, "generated keys"))?;

        self.journal.record(
            CryptoOperation::Encryption,
            "start",
            EventKind::Action,
            format!("Encrypting message bit m = {}", bit),
        );

        let encryption =
            cpa_pke::encrypt_bit(&mut self.sampler, &self.config, &keys.public_key, bit)?;
        self.last_decryption = None;

        self.journal.record(
            CryptoOperation::Encryption,
            "randomness",
            EventKind::Info,
            format!("Ephemeral r, e1, e2 sampled from CBD(eta={})", self.config.eta()),
        );
        self.journal.record(
            CryptoOperation::Encryption,
            "encode",
            EventKind::Info,
            format!(
                "Message encoded: m = {} -> m[0] = {} (floor(q/2) = {})",
                bit,
                bit.as_u8() as u32 * (KYBER_Q / 2),
                KYBER_Q / 2
            ),
        );
        self.journal.record_with_statistics(
            CryptoOperation::Encryption,
            "ciphertext_u",
            EventKind::Info,
            "Ciphertext component u = A^T*r + e1 computed",
            encryption.ciphertext.u.centered_statistics(),
        );
        self.journal.record_with_statistics(
            CryptoOperation::Encryption,
            "ciphertext_v",
            EventKind::Info,
            "Ciphertext component v = t^T*r + e2 + encode(m) computed",
            encryption.ciphertext.v.centered_statistics(),
        );
        self.journal.record(
            CryptoOperation::Encryption,
            "complete",
            EventKind::Success,
            format!("Encryption complete, ciphertext (u, v) produced for m = {}", bit),
        );
        info!("encrypted one bit under {}", self.config);

        Ok(&self.exchange.insert(encryption).ciphertext)
    }

    /// Decrypt phase. Consumes the pending ciphertext.
    ///
    /// Fails with `Precondition` before key generation or when no encryption
    /// is pending.
    pub fn decrypt(&mut self) -> Result<Bit> {
        let keys = self
            .keys
            .as_ref()
            .ok_or(Error::precondition(op::DECRYPT, "a secret key"))?;
        let exchange = self
            .exchange
            .take()
            .ok_or(Error::precondition(op::DECRYPT, "a ciphertext"))?;

        self.journal.record(
            CryptoOperation::Decryption,
            "start",
            EventKind::Action,
            "Decrypting with secret key s",
        );

        let decryption = cpa_pke::decrypt_traced(&keys.secret_key, &exchange.ciphertext)?;
        let trace = decryption.trace;

        self.journal.record(
            CryptoOperation::Decryption,
            "inner_product",
            EventKind::Info,
            "Inner product s^T*u computed",
        );
        self.journal.record_with_statistics(
            CryptoOperation::Decryption,
            "decode",
            EventKind::Info,
            format!(
                "Decoding: m'[0] = {}, band = [{}, {}] -> m' = {}",
                trace.coefficient, trace.lower, trace.upper, trace.bit
            ),
            decryption.noisy_statistics(),
        );

        if decryption.bit == exchange.bit {
            self.journal.record(
                CryptoOperation::Decryption,
                "complete",
                EventKind::Success,
                format!("Bit {} recovered correctly", decryption.bit),
            );
            info!("decryption recovered the encrypted bit");
        } else {
            self.journal.record(
                CryptoOperation::Decryption,
                "complete",
                EventKind::Error,
                format!(
                    "Decoding failure: expected {}, got {}",
                    exchange.bit, decryption.bit
                ),
            );
            warn!(
                "decryption failure: encrypted {}, recovered {} (m'[0] = {})",
                exchange.bit, decryption.bit, trace.coefficient
            );
        }

        let bit = decryption.bit;
        self.last_decryption = Some(decryption);
        Ok(bit)
    }

    /// The exact decryption perturbation e2 + e^T r - s^T e1 of the pending ciphertext.
    pub fn noise_term(&self) -> Result<Poly> {
        let keys = self
            .keys
            .as_ref()
            .ok_or(Error::precondition(op::NOISE_ANALYSIS, "generated keys"))?;
        let exchange = self
            .exchange
            .as_ref()
            .ok_or(Error::precondition(op::NOISE_ANALYSIS, "a pending ciphertext"))?;

        Ok(cpa_pke::noise_term(
            &keys.secret_key.s,
            &keys.e,
            &exchange.r,
            &exchange.e1,
            &exchange.e2,
        ))
    }

    /// Coefficient-0 noise of the pending ciphertext against Q/4.
    pub fn noise_margin(&self) -> Result<NoiseMargin> {
        let margin = cpa_pke::noise_margin(&self.noise_term()?);
        debug!(
            "noise margin: |{}| vs {} (headroom {})",
            margin.coefficient,
            margin.bound,
            margin.headroom()
        );
        Ok(margin)
    }

    /// Discards all keys, ciphertexts and events.
    pub fn reset(&mut self) {
        self.keys = None;
        self.exchange = None;
        self.last_decryption = None;
        self.journal.clear();
        self.journal.record(
            CryptoOperation::KeyGeneration,
            "reset",
            EventKind::Info,
            "Session reset",
        );
        debug!("session reset");
    }

    /// True once key generation has run
    pub fn has_keys(&self) -> bool {
        self.keys.is_some()
    }

    /// True while an encryption awaits decryption
    pub fn has_ciphertext(&self) -> bool {
        self.exchange.is_some()
    }

    /// Public key (A, t)
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.keys.as_ref().map(|k| &k.public_key)
    }

    /// Secret key s
    pub fn secret_key(&self) -> Option<&SecretKey> {
        self.keys.as_ref().map(|k| &k.secret_key)
    }

    /// Key-generation error vector e
    pub fn key_error(&self) -> Option<&PolyVec> {
        self.keys.as_ref().map(|k| &k.e)
    }

    /// Pending encryption artifacts (u, v, r, e1, e2)
    pub fn encryption(&self) -> Option<&Encryption> {
        self.exchange.as_ref()
    }

    /// Pending ciphertext
    pub fn ciphertext(&self) -> Option<&Ciphertext> {
        self.exchange.as_ref().map(|e| &e.ciphertext)
    }

    /// Bit of the pending ciphertext
    pub fn message_bit(&self) -> Option<Bit> {
        self.exchange.as_ref().map(|e| e.bit)
    }

    /// Result of the most recent decryption since the last encryption
    pub fn last_decryption(&self) -> Option<&Decryption> {
        self.last_decryption.as_ref()
    }

    /// Journal entries, oldest first
    pub fn events(&self) -> impl Iterator<Item = &CryptoEvent> {
        self.journal.iter()
    }

    /// The journal itself
    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    /// Drops all journal entries
    pub fn clear_events(&mut self) {
        self.journal.clear();
    }
}

fn max_infinity_norm(v: &PolyVec) -> u32 {
    v.iter().map(|p| p.infinity_norm()).max().unwrap_or(0)
}
