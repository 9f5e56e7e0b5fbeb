//! Conversion between binary quartets and positional-numeral quintets.
//!
//! A quartet of four bytes is read as a big-endian `u32` and written as five
//! digits in the alphabet's radix, most significant first. Since every radix
//! in 85..=95 satisfies `radix^5 >= 2^32`, five digits always suffice; the
//! reverse direction has to reject digit strings that overflow 32 bits.

use crate::core::alphabet::Alphabet;

use super::errors::DecodeError;

/// Bytes per binary group.
pub const QUARTET: usize = 4;
/// Characters per text group.
pub const QUINTET: usize = 5;

/// Place values of a quintet: `[r^4, r^3, r^2, r^1, r^0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixPowers {
    radix: u64,
    powers: [u64; QUINTET],
}

impl RadixPowers {
    pub fn new(radix: usize) -> Self {
        let radix = radix as u64;
        let mut powers = [1u64; QUINTET];
        for i in (0..QUINTET - 1).rev() {
            powers[i] = powers[i + 1] * radix;
        }
        RadixPowers { radix, powers }
    }

    /// Splits `value` into five digits, most significant first.
    pub fn to_digits(&self, value: u32) -> [u8; QUINTET] {
        let value = u64::from(value);
        // Each digit is reduced mod radix (< 96), so it fits in a u8.
        self.powers.map(|power| ((value / power) % self.radix) as u8)
    }

    /// Combines five digits into their numeric value.
    ///
    /// The result may exceed `u32::MAX`; callers decide what to do with it.
    pub fn from_digits(&self, digits: &[u8; QUINTET]) -> u64 {
        digits
            .iter()
            .zip(self.powers)
            .map(|(&digit, power)| u64::from(digit) * power)
            .sum()
    }
}

/// Reads a padded quartet as a big-endian integer.
pub fn quartet_to_u32(quartet: &[u8]) -> u32 {
    u32::from_be_bytes([quartet[0], quartet[1], quartet[2], quartet[3]])
}

/// Encodes one padded quartet into five symbols.
pub fn encode_quartet(
    alphabet: &Alphabet,
    powers: &RadixPowers,
    quartet: &[u8],
) -> [char; QUINTET] {
    powers
        .to_digits(quartet_to_u32(quartet))
        .map(|digit| alphabet.digit_symbol(digit))
}

/// Decodes one padded quintet into four bytes.
///
/// `offset` is the position of the quintet's first character in the whole
/// input, used to report illegal characters.
pub fn decode_quintet(
    alphabet: &Alphabet,
    powers: &RadixPowers,
    offset: usize,
    quintet: &[char],
) -> Result<[u8; QUARTET], DecodeError> {
    let mut digits = [0u8; QUINTET];
    for (i, (&c, digit)) in quintet.iter().zip(digits.iter_mut()).enumerate() {
        *digit = alphabet
            .position(c)
            .ok_or_else(|| DecodeError::illegal_character(c, offset + i))?;
    }

    let value = powers.from_digits(&digits);
    let value = u32::try_from(value).map_err(|_| DecodeError::illegal_sequence(quintet, value))?;
    Ok(value.to_be_bytes())
}
