mod order;
mod raw;
mod swap;

pub use order::{ByteOrder, HOST};
pub use raw::{load_raw, store_raw};
pub use swap::{from_host, swap, to_host};
