use std::convert::Infallible;
use std::num::NonZeroUsize;

use crate::core::alphabet::Alphabet;

use super::chunker::Chunker;
use super::errors::DecodeError;
use super::numeric::{QUARTET, QUINTET, RadixPowers, decode_quintet, encode_quartet};

const QUARTET_STRIDE: NonZeroUsize = NonZeroUsize::new(QUARTET).unwrap();
const QUINTET_STRIDE: NonZeroUsize = NonZeroUsize::new(QUINTET).unwrap();

/// Chunks `items`, converts every group and hands the converted items to
/// `emit`.
///
/// The final group may be padded; only its first `N - pad_count` converted
/// items are emitted. The first conversion error aborts the whole run.
fn apply_groups<T, O, E, const N: usize>(
    items: impl Iterator<Item = T>,
    stride: NonZeroUsize,
    padding: T,
    mut convert: impl FnMut(usize, &[T]) -> Result<[O; N], E>,
    mut emit: impl FnMut(&[O]),
) -> Result<(), E>
where
    T: Clone,
{
    let chunker = Chunker::with_stride(items, stride, Some(padding));
    for (index, (group, pad_count)) in chunker.enumerate() {
        let converted = convert(index * stride.get(), &group)?;
        emit(&converted[..N - pad_count]);
    }
    Ok(())
}

/// Encodes `data` into text, trimming the symbols that only carry padding.
pub fn encode(alphabet: &Alphabet, powers: &RadixPowers, data: &[u8]) -> String {
    let full_groups = data.len() / QUARTET;
    let mut text = String::with_capacity(full_groups * QUINTET + QUINTET);

    let Ok(()) = apply_groups(
        data.iter().copied(),
        QUARTET_STRIDE,
        0u8,
        |_, quartet| Ok::<_, Infallible>(encode_quartet(alphabet, powers, quartet)),
        |symbols| text.extend(symbols),
    );
    text
}

/// Decodes `text` back into bytes.
///
/// Short trailing groups are padded with the alphabet's highest symbol.
///
/// # Errors
///
/// Returns [`DecodeError`] on the first illegal character or out-of-range
/// group; no partial output is returned.
pub fn decode(
    alphabet: &Alphabet,
    powers: &RadixPowers,
    text: &str,
) -> Result<Vec<u8>, DecodeError> {
    let mut bytes = Vec::with_capacity(text.len() / QUINTET * QUARTET + QUARTET);

    apply_groups(
        text.chars(),
        QUINTET_STRIDE,
        alphabet.last_symbol(),
        |offset, quintet| decode_quintet(alphabet, powers, offset, quintet),
        |quartet| bytes.extend_from_slice(quartet),
    )?;

    Ok(bytes)
}
