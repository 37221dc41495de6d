//! Exact-width unsigned integers used as bit-field storage words.

mod width;
mod word;

pub use width::Width;
pub use word::Word;
