use std::str::FromStr;
use std::sync::LazyLock;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::{AlphabetError, DecodeError};
use crate::encoders::algorithms::{engine, numeric::RadixPowers};

/// The ZeroMQ Z85 alphabet.
pub const Z85_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Adobe Ascii85 digits: code points 33 (`!`) through 117 (`u`).
pub const ADOBE85_ALPHABET: &str = r##"!"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\]^_`abcdefghijklmnopqrstu"##;

/// 92 symbols safe inside single-quoted PHP strings, used for generated keys.
pub const W92_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ`,~| _;.-:+=^!/*?&<>()[]{}@%$#";

/// Process-wide Z85 codec.
pub static Z85: LazyLock<Codec> = LazyLock::new(Codec::z85);

/// A binary-to-text codec over an alphabet of 85 to 95 printable ASCII
/// characters.
///
/// Every four input bytes become five output characters. A trailing group
/// of `n` bytes becomes `n + 1` characters, so no padding characters ever
/// appear in the output.
///
/// A `Codec` is immutable once built and can be shared freely between
/// threads.
///
/// # Example
///
/// ```
/// use base8x::Codec;
///
/// let codec = Codec::z85();
/// let text = codec.encode(&[0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]);
/// assert_eq!(text, "HelloWorld");
/// assert_eq!(codec.decode(&text).unwrap().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
    powers: RadixPowers,
}

impl Codec {
    /// Builds a codec from an ordered alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the alphabet contains a non-printable or
    /// repeated character, or has fewer than 85 or more than 95 characters.
    pub fn new<I>(alphabet: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let alphabet = Alphabet::new(alphabet)?;
        let powers = RadixPowers::new(alphabet.radix());
        log::debug!("built base-{} codec", alphabet.radix());
        Ok(Codec { alphabet, powers })
    }

    /// Builds the Z85 codec.
    pub fn z85() -> Self {
        // Z85_ALPHABET is a valid constant; a failure here is a build defect.
        match Self::new(Z85_ALPHABET.chars()) {
            Ok(codec) => codec,
            Err(err) => unreachable!("Z85 alphabet rejected: {err}"),
        }
    }

    /// Returns the alphabet symbols in digit order.
    pub fn alphabet(&self) -> &str {
        self.alphabet.symbols()
    }

    /// Returns the radix (alphabet size).
    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    /// Encodes `data` into text.
    pub fn encode(&self, data: &[u8]) -> String {
        engine::encode(&self.alphabet, &self.powers, data)
    }

    /// Decodes text produced by [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::IllegalCharacter`] for a character outside the
    /// alphabet and [`DecodeError::IllegalSequence`] for a group whose value
    /// doesn't fit in 32 bits.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        engine::decode(&self.alphabet, &self.powers, text)
    }
}

impl FromStr for Codec {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}
