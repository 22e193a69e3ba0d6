//! Trait definition for single-bit public key encryption schemes.

use crate::error::Result;
use crate::types::Bit;
use rand::RngCore;
use zeroize::Zeroize;

/// A public key encryption scheme whose plaintext space is one bit.
///
/// The generator is injected on every call; implementations keep no hidden
/// random state, so a seeded generator makes every run reproducible.
pub trait BitEncryption {
    /// Public key type.
    type PublicKey: Clone;

    /// Secret key type. Wiped on request via `Zeroize`.
    type SecretKey: Zeroize + Clone;

    /// Ciphertext type.
    type Ciphertext: Clone;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new key pair.
    fn keypair<R: RngCore + ?Sized>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypt one bit under `public_key`, drawing fresh ephemeral noise from `rng`.
    fn encrypt<R: RngCore + ?Sized>(
        rng: &mut R,
        public_key: &Self::PublicKey,
        bit: Bit,
    ) -> Result<Self::Ciphertext>;

    /// Recover the bit from a ciphertext.
    ///
    /// Correct with high probability only; the scheme has a small,
    /// parameter-determined decryption failure rate.
    fn decrypt(secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<Bit>;
}
