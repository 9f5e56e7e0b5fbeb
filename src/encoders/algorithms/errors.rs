use std::fmt;

use crate::core::alphabet::{MAX_RADIX, MIN_RADIX};

/// Errors that can occur while validating an alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// A character outside printable ASCII (code points 32 to 126)
    NonPrintable { char: char, position: usize },
    /// A character that already appeared earlier in the alphabet
    Duplicate { char: char, position: usize },
    /// The alphabet holds too few or too many characters
    InvalidLength { length: usize },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_error_header(f)?;
        match self {
            AlphabetError::NonPrintable { char: c, position } => {
                writeln!(
                    f,
                    "invalid alphabet: non-printable character U+{:04X} at position {}",
                    *c as u32, position
                )?;
                write_hint(f, "alphabet characters must be printable ASCII (' ' to '~')")
            }
            AlphabetError::Duplicate { char: c, position } => {
                writeln!(
                    f,
                    "invalid alphabet: duplicate character '{}' at position {}",
                    c, position
                )?;
                write_hint(f, "every alphabet character must be unique")
            }
            AlphabetError::InvalidLength { length } => {
                writeln!(
                    f,
                    "invalid alphabet: {} characters, expected {} to {}",
                    length, MIN_RADIX, MAX_RADIX
                )?;
                write_hint(f, "choose a larger or smaller set of printable characters")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    IllegalCharacter {
        char: char,
        ordinal: u32,
        position: usize,
    },
    /// A five-character group resolves to a value above `u32::MAX`
    IllegalSequence { group: String, value: u64 },
}

impl DecodeError {
    /// Create an IllegalCharacter error for `c` at `position` in the input
    pub fn illegal_character(c: char, position: usize) -> Self {
        DecodeError::IllegalCharacter {
            char: c,
            ordinal: c as u32,
            position,
        }
    }

    /// Create an IllegalSequence error from the raw group text
    pub fn illegal_sequence(group: &[char], value: u64) -> Self {
        DecodeError::IllegalSequence {
            group: group.iter().collect(),
            value,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_error_header(f)?;
        match self {
            DecodeError::IllegalCharacter {
                char: c,
                ordinal,
                position,
            } => {
                writeln!(
                    f,
                    "illegal character {:?} (ordinal {}) at position {}",
                    c, ordinal, position
                )?;
                write_hint(f, "the input contains a character outside the alphabet")
            }
            DecodeError::IllegalSequence { group, value } => {
                writeln!(f, "illegal sequence: ({}, {:#x})", group, value)?;
                write_hint(f, "the group decodes to a value larger than 32 bits")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A chunking stride of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidParameter {
    pub name: &'static str,
    pub value: usize,
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid parameter: {} must be positive, got {}",
            self.name, self.value
        )
    }
}

impl std::error::Error for InvalidParameter {}

/// Error when an alphabet is not found in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_error_header(f)?;
        writeln!(f, "alphabet '{}' not found", self.name)?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        let command = "`base8x config list`";
        if should_use_color() {
            write!(f, "      run \x1b[1m{}\x1b[0m to see all alphabets", command)
        } else {
            write!(f, "      run {} to see all alphabets", command)
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

fn write_error_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if should_use_color() {
        write!(f, "\x1b[1;31merror:\x1b[0m ")
    } else {
        write!(f, "error: ")
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, hint: &str) -> fmt::Result {
    if should_use_color() {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
