use portbf_int::Width;
use std::fmt::{self, Debug, Formatter};
use std::ops::Range;

/// The position of a storage word within a buffer, counted in words of the field's width.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WordIndex(pub u32);

impl WordIndex {
    /// The offset of the word's first byte, or `None` if it is not addressable.
    pub const fn byte_offset(self, width: Width) -> Option<usize> {
        (self.0 as usize).checked_mul(width.bytes())
    }

    /// The bytes occupied by this word, or `None` if they are not addressable.
    pub const fn byte_range(self, width: Width) -> Option<Range<usize>> {
        let start = match self.byte_offset(width) {
            Some(start) => start,
            None => return None,
        };
        match start.checked_add(width.bytes()) {
            Some(end) => Some(start..end),
            None => None,
        }
    }
}

impl Debug for WordIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WordIndex({})", self.0)
    }
}
