use portbf_int::Width;

use crate::ByteOrder;

/// Reverses the byte order of a `width`-wide word held in the low bits of `value`.
///
/// Byte `i` moves to byte `width.bytes() - 1 - i`; a one-byte word is returned unchanged. Bits
/// above `width` are discarded first, so the result always fits the width.
pub const fn swap(width: Width, value: u64) -> u64 {
    let value = width.literal(value);
    let bytes = width.bytes() as u32;
    let mut swapped = 0;
    let mut i = 0;
    while i < bytes {
        let byte = (value >> (8 * i)) & 0xff;
        swapped |= byte << (8 * (bytes - 1 - i));
        i += 1;
    }
    swapped
}

/// Converts a word stored in `order` to host order.
pub const fn to_host(width: Width, order: ByteOrder, raw: u64) -> u64 {
    if order.is_host() {
        width.literal(raw)
    } else {
        swap(width, raw)
    }
}

/// Converts a host-order word to `order`. The inverse of [`to_host`].
pub const fn from_host(width: Width, order: ByteOrder, value: u64) -> u64 {
    // A swap is its own inverse, so this is the same permutation.
    to_host(width, order, value)
}
