use portbf_int::Word;
use portbf_layout::word_index;
use portbf_mask::word_range_mask;
use portbf_swap::ByteOrder;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::{AccessError, DefinitionError, FieldDescriptor, SymbolicValue};

/// A field descriptor whose storage word type is known statically.
///
/// Values are read and written as `W` rather than as width-tagged `u64`s. Dereferences to the
/// underlying [`FieldDescriptor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field<W: Word> {
    desc: FieldDescriptor,
    phantom_w_: PhantomData<fn() -> W>,
}

impl<W: Word> Field<W> {
    /// # Panics
    ///
    /// Panics if `bit_offset + bit_width` exceeds the bits of `W`.
    pub const fn new(
        name: &'static str,
        index: u32,
        order: ByteOrder,
        bit_offset: u32,
        bit_width: u32,
    ) -> Field<W> {
        Field {
            desc: FieldDescriptor::new(name, index, W::WIDTH, order, bit_offset, bit_width),
            phantom_w_: PhantomData,
        }
    }

    pub const fn whole_word(name: &'static str, index: u32, order: ByteOrder) -> Field<W> {
        Field {
            desc: FieldDescriptor::whole_word(name, index, W::WIDTH, order),
            phantom_w_: PhantomData,
        }
    }

    /// Like [`new`](Self::new), but fallible and locating the word by a byte offset aligned to
    /// `W`.
    pub fn at_byte_offset(
        name: &'static str,
        byte_offset: usize,
        order: ByteOrder,
        bit_offset: u32,
        bit_width: u32,
    ) -> Result<Field<W>, DefinitionError> {
        let index = word_index::<W>(byte_offset)?;
        Ok(Field {
            desc: FieldDescriptor::try_new(name, index.0, W::WIDTH, order, bit_offset, bit_width)?,
            phantom_w_: PhantomData,
        })
    }

    /// Wraps an untyped descriptor, checking that its width matches `W`.
    pub fn from_descriptor(desc: FieldDescriptor) -> Result<Field<W>, DefinitionError> {
        if desc.width() != W::WIDTH {
            return Err(DefinitionError::WidthMismatch {
                field: desc.name(),
                expected: W::WIDTH,
                actual: desc.width(),
            });
        }
        Ok(Field {
            desc,
            phantom_w_: PhantomData,
        })
    }

    pub const fn with_symbols(&self, symbols: &'static [SymbolicValue]) -> Field<W> {
        Field {
            desc: self.desc.with_symbols(symbols),
            phantom_w_: PhantomData,
        }
    }

    pub const fn descriptor(&self) -> FieldDescriptor {
        self.desc
    }

    pub fn read(&self, buf: &[u8]) -> Result<W, AccessError> {
        Ok(W::from_u64_truncated(self.desc.read(buf)?))
    }

    pub fn write(&self, buf: &mut [u8], value: W) -> Result<(), AccessError> {
        self.desc.write(buf, value.into_u64())
    }

    pub fn write_checked(&self, buf: &mut [u8], value: W) -> Result<(), AccessError> {
        self.desc.write_checked(buf, value.into_u64())
    }

    pub fn load(&self, buf: &[u8]) -> Result<W, AccessError> {
        Ok(W::from_u64_truncated(self.desc.load(buf)?))
    }

    pub fn store(&self, buf: &mut [u8], value: W) -> Result<(), AccessError> {
        self.desc.store(buf, value.into_u64())
    }

    pub fn load_raw(&self, buf: &[u8]) -> Result<W, AccessError> {
        Ok(W::from_u64_truncated(self.desc.load_raw(buf)?))
    }

    pub fn store_raw(&self, buf: &mut [u8], raw: W) -> Result<(), AccessError> {
        self.desc.store_raw(buf, raw.into_u64())
    }

    pub fn and_in_place(&self, buf: &mut [u8], value: W) -> Result<(), AccessError> {
        self.desc.and_in_place(buf, value.into_u64())
    }

    pub fn or_in_place(&self, buf: &mut [u8], value: W) -> Result<(), AccessError> {
        self.desc.or_in_place(buf, value.into_u64())
    }

    pub fn xor_in_place(&self, buf: &mut [u8], value: W) -> Result<(), AccessError> {
        self.desc.xor_in_place(buf, value.into_u64())
    }

    pub fn mask(&self) -> W {
        word_range_mask(self.desc.bit_offset(), self.desc.bit_width())
    }

    pub fn symbol(&self, value: W) -> Option<&'static str> {
        self.desc.symbol(value.into_u64())
    }
}

impl<W: Word> Deref for Field<W> {
    type Target = FieldDescriptor;

    fn deref(&self) -> &FieldDescriptor {
        &self.desc
    }
}
