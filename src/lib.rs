//! Binary-to-text encoding over alphabets of 85 to 95 printable ASCII
//! characters.
//!
//! Every four bytes of input become five characters of output, written as a
//! base-N number where N is the alphabet size. The built-in [`Z85`] codec is
//! compatible with ZeroMQ's Z85; other alphabets (Adobe Ascii85 digits, the
//! quote-free `w92` set, all of printable ASCII) are available through
//! [`Codec::new`] or the [`AlphabetRegistry`].
//!
//! # Example
//!
//! ```
//! let text = base8x::encode(b"\x86\x4f\xd2\x6f\xb5\x59\xf7\x5b");
//! assert_eq!(text, "HelloWorld");
//! assert_eq!(base8x::decode(&text).unwrap(), b"\x86\x4f\xd2\x6f\xb5\x59\xf7\x5b");
//! ```

mod codec;
mod core;
mod encoders;
pub mod keygen;
pub mod prelude;

pub use codec::{ADOBE85_ALPHABET, Codec, W92_ALPHABET, Z85, Z85_ALPHABET};
pub use crate::core::alphabet::{Alphabet, MAX_RADIX, MIN_RADIX, validate_alphabet};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, FALLBACK_ALPHABET, Settings};
pub use encoders::algorithms::{
    AlphabetError, AlphabetNotFoundError, Chunker, DecodeError, InvalidParameter,
    find_closest_alphabet,
};

/// Encodes `data` with the Z85 alphabet.
pub fn encode(data: &[u8]) -> String {
    Z85.encode(data)
}

/// Decodes Z85 text.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    Z85.decode(text)
}

#[cfg(test)]
mod tests;
