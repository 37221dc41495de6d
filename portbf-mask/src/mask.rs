use portbf_int::{Width, Word};

/// Selects every bit below `position` in a `width`-wide word.
///
/// A position at or beyond the width selects the whole word. This is what lets a field cover an
/// entire word without shifting by the full word width.
pub const fn mask_below(width: Width, position: u32) -> u64 {
    if position >= width.bits() {
        width.max_value()
    } else {
        (1 << position) - 1
    }
}

/// Selects bits `[bit_offset, bit_offset + bit_width)` in a `width`-wide word.
///
/// A zero `bit_width` gives an empty mask.
pub const fn range_mask(width: Width, bit_offset: u32, bit_width: u32) -> u64 {
    mask_below(width, bit_offset.saturating_add(bit_width)) - mask_below(width, bit_offset)
}

/// Typed counterpart of [`range_mask`].
pub fn word_range_mask<W: Word>(bit_offset: u32, bit_width: u32) -> W {
    W::from_u64_truncated(range_mask(W::WIDTH, bit_offset, bit_width))
}

/// Shifts a field out of a host-order word: `(word & mask) >> shift`.
pub const fn extract(word: u64, mask: u64, shift: u32) -> u64 {
    match (word & mask).checked_shr(shift) {
        Some(value) => value,
        None => 0,
    }
}

/// Shifts a value into field position: `(value << shift) & mask`.
///
/// Bits of `value` that land outside `mask` are dropped, so the result can be OR-ed into a word
/// whose field bits were cleared without touching neighbouring fields.
pub const fn insert(value: u64, mask: u64, shift: u32) -> u64 {
    match value.checked_shl(shift) {
        Some(shifted) => shifted & mask,
        None => 0,
    }
}
