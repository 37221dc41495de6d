use byteorder::{BigEndian, LittleEndian};
use portbf_int::Width;

use crate::{ByteOrder, HOST};

/// Loads a `width`-wide word from the start of `bytes`, interpreting it in host order.
///
/// The result is the word exactly as stored; pass it through [`to_host`](crate::to_host) to
/// account for the word's wire order.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `width.bytes()`.
pub fn load_raw(width: Width, bytes: &[u8]) -> u64 {
    match HOST {
        ByteOrder::Little => load_with::<LittleEndian>(width, bytes),
        ByteOrder::Big => load_with::<BigEndian>(width, bytes),
    }
}

/// Stores the low `width` bits of `raw` at the start of `bytes` in host order.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `width.bytes()`.
pub fn store_raw(width: Width, bytes: &mut [u8], raw: u64) {
    match HOST {
        ByteOrder::Little => store_with::<LittleEndian>(width, bytes, raw),
        ByteOrder::Big => store_with::<BigEndian>(width, bytes, raw),
    }
}

fn load_with<O: byteorder::ByteOrder>(width: Width, bytes: &[u8]) -> u64 {
    match width {
        Width::W8 => bytes[0] as u64,
        Width::W16 => O::read_u16(bytes) as u64,
        Width::W32 => O::read_u32(bytes) as u64,
        Width::W64 => O::read_u64(bytes),
    }
}

fn store_with<O: byteorder::ByteOrder>(width: Width, bytes: &mut [u8], raw: u64) {
    match width {
        Width::W8 => bytes[0] = raw as u8,
        Width::W16 => O::write_u16(bytes, raw as u16),
        Width::W32 => O::write_u32(bytes, raw as u32),
        Width::W64 => O::write_u64(bytes, raw),
    }
}

#[cfg(test)]
mod tests {
    use portbf_int::Width;

    use super::{load_raw, store_raw};
    use crate::{from_host, to_host, ByteOrder};

    #[test]
    fn big_endian_word_reads_the_same_on_any_host() {
        let bytes = [0x45, 0x00, 0x00, 0x3c];
        let raw = load_raw(Width::W32, &bytes);
        assert_eq!(to_host(Width::W32, ByteOrder::Big, raw), 0x4500_003c);
        assert_eq!(to_host(Width::W32, ByteOrder::Little, raw), 0x3c00_0045);
    }

    #[test]
    fn store_then_load() {
        let mut bytes = [0u8; 8];
        let raw = from_host(Width::W16, ByteOrder::Big, 0xbeef);
        store_raw(Width::W16, &mut bytes[2..], raw);
        assert_eq!(bytes, [0, 0, 0xbe, 0xef, 0, 0, 0, 0]);
        assert_eq!(load_raw(Width::W16, &bytes[2..]), raw);
    }

    #[test]
    fn little_endian_64() {
        let mut bytes = [0u8; 8];
        let raw = from_host(Width::W64, ByteOrder::Little, 0x0102_0304_0506_0708);
        store_raw(Width::W64, &mut bytes, raw);
        assert_eq!(bytes, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn single_byte() {
        let mut bytes = [0u8; 1];
        store_raw(Width::W8, &mut bytes, 0x1ab);
        assert_eq!(bytes, [0xab]);
        assert_eq!(load_raw(Width::W8, &bytes), 0xab);
    }

    #[test]
    #[should_panic]
    fn short_buffer_panics() {
        let _ = load_raw(Width::W32, &[0u8; 3]);
    }
}
