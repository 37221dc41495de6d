mod bit_range;
mod mask;

pub use bit_range::BitRange;
pub use mask::{extract, insert, mask_below, range_mask, word_range_mask};
