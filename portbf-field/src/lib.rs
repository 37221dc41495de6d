//! Named bit-fields packed into fixed-width words of a byte buffer.
//!
//! A [`FieldDescriptor`] says which word of the buffer a field lives in, how wide that word is,
//! which byte order it is stored in, and which bits of the host-order word belong to the field.
//! Descriptors are plain `const` data; the accessors read and modify a caller-supplied buffer in
//! place and never retain it.
//!
//! ```
//! use portbf_field::{ByteOrder, Field};
//!
//! const VERSION: Field<u32> = Field::new("VERSION", 0, ByteOrder::Big, 28, 4);
//! const IHL: Field<u32> = Field::new("IHL", 0, ByteOrder::Big, 24, 4);
//!
//! let mut header = [0x45u8, 0x00, 0x00, 0x3c];
//! assert_eq!(VERSION.read(&header).unwrap(), 4);
//! VERSION.write(&mut header, 6).unwrap();
//! assert_eq!(header, [0x65, 0x00, 0x00, 0x3c]);
//! assert_eq!(IHL.read(&header).unwrap(), 5);
//! ```

mod access;
mod descriptor;
mod error;
mod field;
mod macros;
mod table;

pub use descriptor::{FieldDescriptor, SymbolicValue};
pub use error::{AccessError, DefinitionError};
pub use field::Field;
pub use table::BitfieldDescriptor;

pub use portbf_int::{Width, Word};
pub use portbf_layout::WordIndex;
pub use portbf_mask::BitRange;
pub use portbf_swap::{ByteOrder, HOST};

#[doc(hidden)]
pub use paste as __paste;
