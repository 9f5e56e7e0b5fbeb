use std::num::NonZeroUsize;

use super::errors::InvalidParameter;

/// Splits a sequence into fixed-size groups.
///
/// Yields `(group, pad_count)` pairs. Every full group has a pad count of
/// zero. A short trailing group reports how many items it is missing; if a
/// padding value was given, the group is filled up with copies of it,
/// otherwise it is yielded short. Empty input yields nothing.
///
/// The chunker consumes its source and can't be restarted.
#[derive(Debug)]
pub struct Chunker<I: Iterator> {
    source: I,
    stride: NonZeroUsize,
    padding: Option<I::Item>,
    finished: bool,
}

impl<I> Chunker<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Creates a chunker over `source`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if `stride` is zero.
    pub fn new<S>(
        source: S,
        stride: usize,
        padding: Option<I::Item>,
    ) -> Result<Self, InvalidParameter>
    where
        S: IntoIterator<IntoIter = I>,
    {
        let stride = NonZeroUsize::new(stride).ok_or(InvalidParameter {
            name: "stride",
            value: stride,
        })?;
        Ok(Self::with_stride(source, stride, padding))
    }

    /// Creates a chunker with a stride already known to be positive.
    pub fn with_stride<S>(source: S, stride: NonZeroUsize, padding: Option<I::Item>) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Chunker {
            source: source.into_iter(),
            stride,
            padding,
            finished: false,
        }
    }
}

impl<I> Iterator for Chunker<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (Vec<I::Item>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let stride = self.stride.get();
        let mut group: Vec<I::Item> = self.source.by_ref().take(stride).collect();

        if group.len() == stride {
            return Some((group, 0));
        }

        // Source exhausted.
        self.finished = true;
        if group.is_empty() {
            return None;
        }

        let pad_count = stride - group.len();
        if let Some(pad) = &self.padding {
            group.resize(stride, pad.clone());
        }
        Some((group, pad_count))
    }
}
