use portbf_int::Width;

use crate::{insert, range_mask};

/// A contiguous run of bits within a host-order word, counted from the least significant bit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BitRange {
    pub offset: u32,
    pub width: u32,
}

impl BitRange {
    pub const fn new(offset: u32, width: u32) -> BitRange {
        BitRange { offset, width }
    }

    /// One past the most significant bit.
    pub const fn end(self) -> u32 {
        self.offset.saturating_add(self.width)
    }

    pub const fn fits(self, width: Width) -> bool {
        self.end() <= width.bits()
    }

    pub const fn mask(self, width: Width) -> u64 {
        range_mask(width, self.offset, self.width)
    }

    /// The largest value the range can hold, right-justified.
    pub const fn max_value(self) -> u64 {
        range_mask(Width::W64, 0, self.width)
    }

    pub const fn insert(self, width: Width, value: u64) -> u64 {
        insert(value, self.mask(width), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use portbf_int::Width;

    use super::BitRange;

    #[test]
    fn whole_word() {
        let range = BitRange::new(0, 32);
        assert!(range.fits(Width::W32));
        assert!(!range.fits(Width::W16));
        assert_eq!(range.mask(Width::W32), 0xffff_ffff);
        assert_eq!(range.insert(Width::W32, 0xc0a8_0001), 0xc0a8_0001);
    }

    #[test]
    fn insert_truncates() {
        let ihl = BitRange::new(24, 4);
        assert_eq!(ihl.insert(Width::W32, 0x1f), 0x0f00_0000);
        assert_eq!(ihl.insert(Width::W32, 5), 0x0500_0000);
    }

    #[test]
    fn max_value() {
        assert_eq!(BitRange::new(28, 4).max_value(), 0xf);
        assert_eq!(BitRange::new(0, 64).max_value(), u64::MAX);
        assert_eq!(BitRange::new(7, 0).max_value(), 0);
    }
}
