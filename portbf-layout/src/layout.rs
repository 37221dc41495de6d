use portbf_int::Word;
use std::convert::TryFrom;

use crate::{LayoutError, WordIndex};

/// Types stored with a statically known size and alignment.
pub trait Layout {
    const SIZE: usize;
    const ALIGN_BITS: u32 = Self::SIZE.trailing_zeros();
}

impl<W: Word> Layout for W {
    const SIZE: usize = W::WIDTH.bytes();
}

pub fn check_alignment<T: Layout>(offset: usize) -> Result<(), LayoutError> {
    if offset.trailing_zeros() >= T::ALIGN_BITS {
        Ok(())
    } else {
        Err(LayoutError::Misaligned {
            align_bits: T::ALIGN_BITS,
            offset,
        })
    }
}

/// Converts the byte offset of a `T` into its index in units of `T`.
pub fn word_index<T: Layout>(offset: usize) -> Result<WordIndex, LayoutError> {
    check_alignment::<T>(offset)?;
    u32::try_from(offset / T::SIZE)
        .map(WordIndex)
        .map_err(|_| LayoutError::OffsetTooLarge { offset })
}
