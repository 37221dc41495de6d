/// Declares typed field constants for one structure, plus a [`BitfieldDescriptor`] listing them.
///
/// Each field is written `NAME @ word_index [bit_offset; bit_width]`, optionally followed by
/// symbolic values in braces. Field constants are named `<TABLE>_<NAME>`.
///
/// ```
/// portbf_field::bitfield! {
///     pub struct IP: u32, Big {
///         VERSION @ 0 [28; 4] { V4 = 4, V6 = 6 },
///         IHL @ 0 [24; 4],
///         LEN @ 0 [0; 16],
///     }
/// }
///
/// let buf = [0x45u8, 0x00, 0x00, 0x3c];
/// assert_eq!(IP_VERSION.read(&buf).unwrap(), 4);
/// assert_eq!(IP_LEN.read(&buf).unwrap(), 60);
/// assert_eq!(IP.field("IHL").unwrap().read(&buf).unwrap(), 5);
/// ```
///
/// [`BitfieldDescriptor`]: crate::BitfieldDescriptor
#[macro_export]
macro_rules! bitfield {
    (
        $(#[$meta:meta])*
        $vis:vis struct $table:ident : $word:ty, $order:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident @ $index:literal [$offset:literal; $bits:literal]
                $({ $($symbol:ident = $symbol_value:literal),* $(,)? })?
            ),* $(,)?
        }
    ) => {
        $crate::__paste::paste! {
            $(
                $(#[$field_meta])*
                $vis const [<$table _ $field>]: $crate::Field<$word> = $crate::Field::new(
                    stringify!($field),
                    $index,
                    $crate::ByteOrder::$order,
                    $offset,
                    $bits,
                )
                $(.with_symbols(&[
                    $($crate::SymbolicValue {
                        name: stringify!($symbol),
                        value: $symbol_value,
                    }),*
                ]))?;
            )*

            $(#[$meta])*
            $vis const $table: $crate::BitfieldDescriptor = $crate::BitfieldDescriptor {
                name: stringify!($table),
                fields: &[$([<$table _ $field>].descriptor()),*],
            };
        }
    };
}
