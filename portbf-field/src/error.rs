use portbf_int::Width;
use portbf_layout::{LayoutError, WordIndex};
use thiserror::Error;

/// A malformed field or table definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("bits {offset}..{end} do not fit in a {width} word")]
    RangeOutsideWord { width: Width, offset: u32, end: u32 },

    #[error("fields {first:?} and {second:?} share bytes but not a word width")]
    MixedWidths {
        first: &'static str,
        second: &'static str,
    },

    #[error("field {field:?} is stored in a {actual} word, not {expected}")]
    WidthMismatch {
        field: &'static str,
        expected: Width,
        actual: Width,
    },

    #[error("duplicate field name {0:?}")]
    DuplicateName(&'static str),

    #[error("{0}")]
    LayoutError(#[from] LayoutError),
}

/// A failed access to a buffer through a field descriptor.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("word access out of range: {index:?} of {width}, buffer size 0x{buffer_len:x}")]
    OutOfRange {
        index: WordIndex,
        width: Width,
        buffer_len: usize,
    },

    #[error("value 0x{value:x} does not fit in the {bits} bits of field {field:?}")]
    ValueTooWide {
        field: &'static str,
        value: u64,
        bits: u32,
    },
}
