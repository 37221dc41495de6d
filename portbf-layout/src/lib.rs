mod align;
mod error;
mod index;
mod layout;

pub use align::{alignment_class, check_width_alignment, word_index_at, AlignClass};
pub use error::LayoutError;
pub use index::WordIndex;
pub use layout::{check_alignment, word_index, Layout};
