use portbf_int::Width;
use portbf_layout::{word_index_at, WordIndex};
use portbf_mask::BitRange;
use portbf_swap::ByteOrder;
use std::fmt::{self, Display, Formatter};

use crate::DefinitionError;

/// A named value a field may hold. Informational only; accessors never check against these.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SymbolicValue {
    pub name: &'static str,
    /// The field value, right-justified.
    pub value: u64,
}

impl SymbolicValue {
    /// The value as it appears in the host-order storage word of `field`.
    pub const fn word_bits(&self, field: &FieldDescriptor) -> u64 {
        field.range.insert(field.width, self.value)
    }
}

/// The location and encoding of one bit-field within a buffer of words.
///
/// Descriptors are immutable. The mask is derived from the bit range when the descriptor is
/// built and cannot be set independently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    name: &'static str,
    index: WordIndex,
    width: Width,
    order: ByteOrder,
    range: BitRange,
    mask: u64,
    symbols: &'static [SymbolicValue],
}

impl FieldDescriptor {
    /// Describes bits `[bit_offset, bit_offset + bit_width)` of word `index`.
    ///
    /// # Panics
    ///
    /// Panics if the bit range does not fit in a `width` word. In a `const` item this is a
    /// compile-time error.
    pub const fn new(
        name: &'static str,
        index: u32,
        width: Width,
        order: ByteOrder,
        bit_offset: u32,
        bit_width: u32,
    ) -> FieldDescriptor {
        match FieldDescriptor::try_new(name, index, width, order, bit_offset, bit_width) {
            Ok(desc) => desc,
            Err(_) => panic!("field bit range does not fit in its storage word"),
        }
    }

    pub const fn try_new(
        name: &'static str,
        index: u32,
        width: Width,
        order: ByteOrder,
        bit_offset: u32,
        bit_width: u32,
    ) -> Result<FieldDescriptor, DefinitionError> {
        let range = BitRange::new(bit_offset, bit_width);
        if !range.fits(width) {
            return Err(DefinitionError::RangeOutsideWord {
                width,
                offset: bit_offset,
                end: range.end(),
            });
        }
        Ok(FieldDescriptor {
            name,
            index: WordIndex(index),
            width,
            order,
            range,
            mask: range.mask(width),
            symbols: &[],
        })
    }

    /// Describes a field that occupies all of word `index`.
    pub const fn whole_word(
        name: &'static str,
        index: u32,
        width: Width,
        order: ByteOrder,
    ) -> FieldDescriptor {
        FieldDescriptor::new(name, index, width, order, 0, width.bits())
    }

    /// Like [`try_new`](Self::try_new), but locates the word by its byte offset, which must be
    /// aligned to the word width.
    pub fn at_byte_offset(
        name: &'static str,
        byte_offset: usize,
        width: Width,
        order: ByteOrder,
        bit_offset: u32,
        bit_width: u32,
    ) -> Result<FieldDescriptor, DefinitionError> {
        let index = word_index_at(width, byte_offset)?;
        FieldDescriptor::try_new(name, index.0, width, order, bit_offset, bit_width)
    }

    pub const fn with_symbols(mut self, symbols: &'static [SymbolicValue]) -> FieldDescriptor {
        self.symbols = symbols;
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn index(&self) -> WordIndex {
        self.index
    }

    pub const fn width(&self) -> Width {
        self.width
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub const fn bit_range(&self) -> BitRange {
        self.range
    }

    pub const fn bit_offset(&self) -> u32 {
        self.range.offset
    }

    pub const fn bit_width(&self) -> u32 {
        self.range.width
    }

    pub const fn mask(&self) -> u64 {
        self.mask
    }

    pub const fn symbols(&self) -> &'static [SymbolicValue] {
        self.symbols
    }

    /// The largest value [`write`](Self::write) stores without truncation.
    pub const fn max_value(&self) -> u64 {
        self.range.max_value()
    }

    /// The smallest buffer, in bytes, that holds this field's word. Saturates at `usize::MAX`
    /// for a word beyond the address space.
    pub const fn required_len(&self) -> usize {
        match self.index.byte_offset(self.width) {
            Some(start) => start.saturating_add(self.width.bytes()),
            None => usize::MAX,
        }
    }

    pub fn symbol(&self, value: u64) -> Option<&'static str> {
        self.symbols
            .iter()
            .find(|symbol| symbol.value == value)
            .map(|symbol| symbol.name)
    }

    pub fn symbolic_value(&self, name: &str) -> Option<u64> {
        self.symbols
            .iter()
            .find(|symbol| symbol.name == name)
            .map(|symbol| symbol.value)
    }
}

impl Display for FieldDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{}[{}] bits {}..{}",
            self.name,
            self.width,
            self.order,
            self.index.0,
            self.range.offset,
            self.range.end(),
        )
    }
}
