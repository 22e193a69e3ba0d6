//! Constants for the Kyber lattice scheme

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u16 = 3329;

/// Module ranks accepted by runtime configuration
pub const SUPPORTED_K: [usize; 3] = [2, 3, 4];

/// CBD widths accepted by runtime configuration
pub const SUPPORTED_ETA: [u8; 2] = [2, 3];

/// Module rank and noise width used by the classroom walkthrough
pub const TEACHING_K: usize = 2;

/// CBD width used by the classroom walkthrough
pub const TEACHING_ETA: u8 = 2;

/// One Kyber security level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KyberLevel {
    /// Display name
    pub name: &'static str,

    /// Number of polynomials per vector (module rank)
    pub k: usize,

    /// CBD width for secrets and key-generation errors
    pub eta1: u8,

    /// CBD width for encryption errors
    pub eta2: u8,

    /// Ciphertext compression bits for u (not applied by this implementation)
    pub du: usize,

    /// Ciphertext compression bits for v (not applied by this implementation)
    pub dv: usize,

    /// NIST security category
    pub security_level: u8,
}

/// Kyber-512 parameters
pub const KYBER512: KyberLevel = KyberLevel {
    name: "Kyber-512",
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    security_level: 1,
};

/// Kyber-768 parameters
pub const KYBER768: KyberLevel = KyberLevel {
    name: "Kyber-768",
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    security_level: 3,
};

/// Kyber-1024 parameters
pub const KYBER1024: KyberLevel = KyberLevel {
    name: "Kyber-1024",
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    security_level: 5,
};

/// All levels, weakest first
pub const ALL_LEVELS: [KyberLevel; 3] = [KYBER512, KYBER768, KYBER1024];
