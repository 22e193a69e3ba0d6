//! Single-bit message encoding

use edukyber_api::Bit;

use super::params::Modulus;
use super::polynomial::Polynomial;

/// The inclusive interval of coefficients that decode to 1.
///
/// `[floor(Q/4), Q - floor(Q/4)]`, symmetric about Q/2. For Q = 3329 this is
/// `[832, 2497]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeBand {
    /// Smallest coefficient decoding to 1
    pub lower: u32,
    /// Largest coefficient decoding to 1
    pub upper: u32,
}

impl DecodeBand {
    /// The band for modulus `M::Q`
    pub fn for_modulus<M: Modulus>() -> Self {
        Self {
            lower: M::Q / 4,
            // Mirrors the lower edge around Q/2. floor(3Q/4) = 2496 would leave
            // the band one short of symmetric on the upper side.
            upper: M::Q - M::Q / 4,
        }
    }

    /// Inclusive membership test
    pub fn contains(&self, coeff: u32) -> bool {
        coeff >= self.lower && coeff <= self.upper
    }

    /// The bit a coefficient decodes to
    pub fn decode(&self, coeff: u32) -> Bit {
        Bit::from(self.contains(coeff))
    }
}

/// Encode one bit as a polynomial: coefficient 0 is `floor(Q/2)` for 1, zero otherwise.
pub fn encode_bit<M: Modulus>(bit: Bit) -> Polynomial<M> {
    match bit {
        Bit::One => Polynomial::constant(M::Q / 2),
        Bit::Zero => Polynomial::zero(),
    }
}

/// Decode one coefficient back to a bit: 1 inside the band around Q/2, 0 near zero.
pub fn decode_coefficient<M: Modulus>(coeff: u32) -> Bit {
    DecodeBand::for_modulus::<M>().decode(coeff % M::Q)
}

impl<M: Modulus> Polynomial<M> {
    /// Decode the message bit carried by coefficient 0.
    pub fn decode_bit(&self) -> Bit {
        decode_coefficient::<M>(self.coeff(0))
    }
}
