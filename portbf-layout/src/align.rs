use portbf_int::Width;
use std::convert::TryFrom;

use crate::{LayoutError, WordIndex};

/// The power-of-two boundary a byte offset lies on.
///
/// Classes stop one step past the widest word: anything aligned to 16 bytes or more, including
/// offset zero, is `Max`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AlignClass {
    B1,
    B2,
    B4,
    B8,
    Max,
}

impl AlignClass {
    /// The natural alignment of a word of the given width.
    pub const fn of_width(width: Width) -> AlignClass {
        match width {
            Width::W8 => AlignClass::B1,
            Width::W16 => AlignClass::B2,
            Width::W32 => AlignClass::B4,
            Width::W64 => AlignClass::B8,
        }
    }

    pub const fn bytes(self) -> usize {
        1 << self.align_bits()
    }

    pub const fn align_bits(self) -> u32 {
        match self {
            AlignClass::B1 => 0,
            AlignClass::B2 => 1,
            AlignClass::B4 => 2,
            AlignClass::B8 => 3,
            AlignClass::Max => 4,
        }
    }

    /// Whether a word of `width` may start at an offset of this class.
    pub const fn satisfies(self, width: Width) -> bool {
        self.align_bits() >= AlignClass::of_width(width).align_bits()
    }
}

pub const fn alignment_class(offset: usize) -> AlignClass {
    if offset == 0 {
        return AlignClass::Max;
    }
    match offset.trailing_zeros() {
        0 => AlignClass::B1,
        1 => AlignClass::B2,
        2 => AlignClass::B4,
        3 => AlignClass::B8,
        _ => AlignClass::Max,
    }
}

pub fn check_width_alignment(width: Width, offset: usize) -> Result<(), LayoutError> {
    if alignment_class(offset).satisfies(width) {
        Ok(())
    } else {
        Err(LayoutError::Misaligned {
            align_bits: AlignClass::of_width(width).align_bits(),
            offset,
        })
    }
}

/// Converts the byte offset of a word into its index in units of `width`.
pub fn word_index_at(width: Width, offset: usize) -> Result<WordIndex, LayoutError> {
    check_width_alignment(width, offset)?;
    let index = u32::try_from(offset / width.bytes())
        .map_err(|_| LayoutError::OffsetTooLarge { offset })?;
    Ok(WordIndex(index))
}

#[cfg(test)]
mod tests {
    use portbf_int::Width;

    use super::{alignment_class, check_width_alignment, word_index_at, AlignClass};
    use crate::{LayoutError, WordIndex};

    #[test]
    fn classes() {
        assert_eq!(alignment_class(0), AlignClass::Max);
        assert_eq!(alignment_class(4), AlignClass::B4);
        assert_eq!(alignment_class(6), AlignClass::B2);
        assert_eq!(alignment_class(7), AlignClass::B1);
        assert_eq!(alignment_class(8), AlignClass::B8);
        assert_eq!(alignment_class(24), AlignClass::B8);
        assert_eq!(alignment_class(32), AlignClass::Max);
    }

    #[test]
    fn class_sizes() {
        assert_eq!(AlignClass::B1.bytes(), 1);
        assert_eq!(AlignClass::B8.bytes(), 8);
        assert_eq!(AlignClass::Max.bytes(), 16);
        for width in Width::ALL {
            assert_eq!(AlignClass::of_width(width).bytes(), width.bytes());
            assert!(AlignClass::Max.satisfies(width));
        }
    }

    #[test]
    fn alignment_checks() {
        assert!(check_width_alignment(Width::W8, 7).is_ok());
        assert!(check_width_alignment(Width::W16, 6).is_ok());
        assert!(check_width_alignment(Width::W32, 6).is_err());
        assert!(check_width_alignment(Width::W64, 0).is_ok());
        assert!(matches!(
            check_width_alignment(Width::W64, 12),
            Err(LayoutError::Misaligned {
                align_bits: 3,
                offset: 12
            })
        ));
    }

    #[test]
    fn word_indices() {
        assert_eq!(word_index_at(Width::W32, 0).unwrap(), WordIndex(0));
        assert_eq!(word_index_at(Width::W32, 16).unwrap(), WordIndex(4));
        assert_eq!(word_index_at(Width::W16, 6).unwrap(), WordIndex(3));
        assert!(word_index_at(Width::W32, 2).is_err());
    }
}
