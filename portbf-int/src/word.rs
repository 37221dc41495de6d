use num_traits::{PrimInt, Unsigned};
use std::fmt::{Debug, LowerHex};

use crate::Width;

/// Unsigned primitive integers that can serve as a storage word.
///
/// Every implementor has a fixed [`Width`], so generic code can move between the typed word and
/// the width-tagged `u64` representation used by the descriptor tables without losing bits.
pub trait Word: PrimInt + Unsigned + Debug + LowerHex + Send + Sync + 'static {
    const WIDTH: Width;

    /// Converts from the widest word, discarding bits above `Self::WIDTH`.
    fn from_u64_truncated(value: u64) -> Self;

    fn into_u64(self) -> u64;
}

macro_rules! impl_word {
    ($t:ty, $width:ident) => {
        impl Word for $t {
            const WIDTH: Width = Width::$width;

            fn from_u64_truncated(value: u64) -> Self {
                value as $t
            }

            fn into_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_word!(u8, W8);
impl_word!(u16, W16);
impl_word!(u32, W32);
impl_word!(u64, W64);
