use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::encoders::algorithms::errors::AlphabetError;

/// Smallest accepted alphabet size.
pub const MIN_RADIX: usize = 85;
/// Largest accepted alphabet size (every printable ASCII character).
pub const MAX_RADIX: usize = 95;

const PRINTABLE: RangeInclusive<u32> = 32..=126;

/// Validates a candidate alphabet and returns its canonical string form.
///
/// Characters are consumed one at a time. The first character that is not
/// printable ASCII (code points 32 to 126) or that repeats an earlier one
/// rejects the whole alphabet without reading any further, so an unbounded
/// source is rejected after at most 96 items.
///
/// # Errors
///
/// Returns [`AlphabetError`] if a character is non-printable or duplicated, or
/// if the alphabet does not hold between [`MIN_RADIX`] and [`MAX_RADIX`]
/// characters.
pub fn validate_alphabet<I>(candidate: I) -> Result<String, AlphabetError>
where
    I: IntoIterator<Item = char>,
{
    let mut seen = HashSet::with_capacity(MAX_RADIX);
    let mut accepted = String::with_capacity(MAX_RADIX);

    for (position, c) in candidate.into_iter().enumerate() {
        if !PRINTABLE.contains(&(c as u32)) {
            return Err(AlphabetError::NonPrintable { char: c, position });
        }
        if !seen.insert(c) {
            return Err(AlphabetError::Duplicate { char: c, position });
        }
        accepted.push(c);
    }

    let length = accepted.len();
    if !(MIN_RADIX..=MAX_RADIX).contains(&length) {
        return Err(AlphabetError::InvalidLength { length });
    }

    Ok(accepted)
}

/// A validated encoding alphabet.
///
/// Holds the ordered symbols and the reverse lookup from symbol to digit
/// value. Every symbol is printable ASCII, so the lookup is a flat table
/// indexed by code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: String,
    order: [Option<u8>; 128],
}

impl Alphabet {
    /// Validates `candidate` and builds the symbol lookup table.
    ///
    /// # Errors
    ///
    /// See [`validate_alphabet`].
    pub fn new<I>(candidate: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols = validate_alphabet(candidate)?;

        let mut order = [None; 128];
        for (digit, byte) in symbols.bytes().enumerate() {
            // At most 95 symbols, so every digit fits in a u8.
            order[usize::from(byte)] = Some(digit as u8);
        }

        Ok(Alphabet { symbols, order })
    }

    /// Returns the symbols in digit order.
    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    /// Returns the number of symbols, which is the radix of the encoding.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol for `digit`, or `None` if `digit` is not below
    /// [`radix`](Self::radix).
    pub fn symbol(&self, digit: u8) -> Option<char> {
        self.symbols
            .as_bytes()
            .get(usize::from(digit))
            .copied()
            .map(char::from)
    }

    /// Returns the symbol for a digit already reduced modulo the radix.
    pub(crate) fn digit_symbol(&self, digit: u8) -> char {
        char::from(self.symbols.as_bytes()[usize::from(digit)])
    }

    /// Returns the digit value of `c`, or `None` if `c` is not in the alphabet.
    pub fn position(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.order[c as usize]
        } else {
            None
        }
    }

    /// Returns the highest-valued symbol, used to pad short groups on decode.
    pub fn last_symbol(&self) -> char {
        // A validated alphabet always holds at least MIN_RADIX symbols.
        self.digit_symbol((self.radix() - 1) as u8)
    }
}
