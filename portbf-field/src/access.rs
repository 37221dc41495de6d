//! The accessor protocol: every operation loads the addressed word, converts between wire and
//! host order, and stores it back where it mutates.

use portbf_mask::{extract, insert};
use portbf_swap::{from_host, load_raw, store_raw, to_host};

use crate::{AccessError, FieldDescriptor};

impl FieldDescriptor {
    fn out_of_range(&self, buffer_len: usize) -> AccessError {
        AccessError::OutOfRange {
            index: self.index(),
            width: self.width(),
            buffer_len,
        }
    }

    fn slot<'a>(&self, buf: &'a [u8]) -> Result<&'a [u8], AccessError> {
        self.index()
            .byte_range(self.width())
            .and_then(|range| buf.get(range))
            .ok_or_else(|| self.out_of_range(buf.len()))
    }

    fn slot_mut<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], AccessError> {
        let buffer_len = buf.len();
        self.index()
            .byte_range(self.width())
            .and_then(move |range| buf.get_mut(range))
            .ok_or_else(|| self.out_of_range(buffer_len))
    }

    /// Loads the storage word exactly as stored, without byte order conversion.
    pub fn load_raw(&self, buf: &[u8]) -> Result<u64, AccessError> {
        Ok(load_raw(self.width(), self.slot(buf)?))
    }

    /// Stores a word that is already in wire order.
    pub fn store_raw(&self, buf: &mut [u8], raw: u64) -> Result<(), AccessError> {
        store_raw(self.width(), self.slot_mut(buf)?, raw);
        Ok(())
    }

    /// Loads the whole storage word, converted to host order.
    pub fn load(&self, buf: &[u8]) -> Result<u64, AccessError> {
        Ok(to_host(self.width(), self.byte_order(), self.load_raw(buf)?))
    }

    /// Stores a host-order value over the whole storage word.
    pub fn store(&self, buf: &mut [u8], value: u64) -> Result<(), AccessError> {
        self.store_raw(buf, from_host(self.width(), self.byte_order(), value))
    }

    /// Reads the field's value, right-justified.
    pub fn read(&self, buf: &[u8]) -> Result<u64, AccessError> {
        Ok(extract(self.load(buf)?, self.mask(), self.bit_offset()))
    }

    /// Whether any bit of the field is set. A multi-bit field need not be all ones.
    pub fn is_set(&self, buf: &[u8]) -> Result<bool, AccessError> {
        Ok((self.load(buf)? & self.mask()) != 0)
    }

    /// Sets every bit of the field.
    pub fn set(&self, buf: &mut [u8]) -> Result<(), AccessError> {
        self.or_in_place(buf, self.mask())
    }

    /// Clears every bit of the field.
    pub fn clear(&self, buf: &mut [u8]) -> Result<(), AccessError> {
        self.and_in_place(buf, !self.mask())
    }

    /// Replaces the field's value, leaving the rest of the word untouched.
    ///
    /// Bits of `value` above the field's width are silently dropped. Use
    /// [`write_checked`](Self::write_checked) to reject such values instead.
    pub fn write(&self, buf: &mut [u8], value: u64) -> Result<(), AccessError> {
        let width = self.width();
        let order = self.byte_order();
        let slot = self.slot_mut(buf)?;
        let word = to_host(width, order, load_raw(width, slot));
        let merged = (word & !self.mask()) | insert(value, self.mask(), self.bit_offset());
        store_raw(width, slot, from_host(width, order, merged));
        Ok(())
    }

    pub fn write_checked(&self, buf: &mut [u8], value: u64) -> Result<(), AccessError> {
        if value > self.max_value() {
            return Err(AccessError::ValueTooWide {
                field: self.name(),
                value,
                bits: self.bit_width(),
            });
        }
        self.write(buf, value)
    }

    /// ANDs `value` into the whole storage word.
    ///
    /// Unlike [`write`](Self::write), this is not limited to the field's bits: every bit of the
    /// word is combined with the matching bit of `value`.
    pub fn and_in_place(&self, buf: &mut [u8], value: u64) -> Result<(), AccessError> {
        self.update_raw(buf, value, |raw, wire| raw & wire)
    }

    /// ORs `value` into the whole storage word. Not limited to the field's bits.
    pub fn or_in_place(&self, buf: &mut [u8], value: u64) -> Result<(), AccessError> {
        self.update_raw(buf, value, |raw, wire| raw | wire)
    }

    /// XORs `value` into the whole storage word. Not limited to the field's bits.
    pub fn xor_in_place(&self, buf: &mut [u8], value: u64) -> Result<(), AccessError> {
        self.update_raw(buf, value, |raw, wire| raw ^ wire)
    }

    // Byte swapping permutes whole bytes, so bitwise operations can be applied directly to the
    // stored word once `value` is in wire order.
    fn update_raw<F>(&self, buf: &mut [u8], value: u64, op: F) -> Result<(), AccessError>
    where
        F: FnOnce(u64, u64) -> u64,
    {
        let width = self.width();
        let slot = self.slot_mut(buf)?;
        let raw = load_raw(width, slot);
        store_raw(width, slot, op(raw, from_host(width, self.byte_order(), value)));
        Ok(())
    }
}
