use crate::{AccessError, DefinitionError, FieldDescriptor};

/// The fields of one structure, e.g. a packet header.
#[derive(Clone, Copy, Debug)]
pub struct BitfieldDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl BitfieldDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// The smallest buffer, in bytes, that holds every field.
    pub fn required_len(&self) -> usize {
        self.fields
            .iter()
            .map(FieldDescriptor::required_len)
            .max()
            .unwrap_or(0)
    }

    /// Checks that a buffer of `buffer_len` bytes holds every field.
    pub fn check_buffer(&self, buffer_len: usize) -> Result<(), AccessError> {
        match self
            .fields
            .iter()
            .find(|field| field.required_len() > buffer_len)
        {
            Some(field) => Err(AccessError::OutOfRange {
                index: field.index(),
                width: field.width(),
                buffer_len,
            }),
            None => Ok(()),
        }
    }

    /// Checks that field names are unique and that fields sharing bytes agree on the word width.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        for (i, first) in self.fields.iter().enumerate() {
            for second in &self.fields[i + 1..] {
                if first.name() == second.name() {
                    return Err(DefinitionError::DuplicateName(first.name()));
                }
                if first.width() != second.width() && share_bytes(first, second) {
                    return Err(DefinitionError::MixedWidths {
                        first: first.name(),
                        second: second.name(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn share_bytes(first: &FieldDescriptor, second: &FieldDescriptor) -> bool {
    match (
        first.index().byte_range(first.width()),
        second.index().byte_range(second.width()),
    ) {
        (Some(a), Some(b)) => a.start < b.end && b.start < a.end,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use portbf_int::Width;
    use portbf_swap::ByteOrder;

    use super::BitfieldDescriptor;
    use crate::{AccessError, DefinitionError, FieldDescriptor};

    const HEADER: BitfieldDescriptor = BitfieldDescriptor {
        name: "HEADER",
        fields: &[
            FieldDescriptor::new("KIND", 0, Width::W16, ByteOrder::Big, 12, 4),
            FieldDescriptor::new("LEN", 0, Width::W16, ByteOrder::Big, 0, 12),
            FieldDescriptor::whole_word("TAG", 1, Width::W32, ByteOrder::Little),
        ],
    };

    #[test]
    fn lookup() {
        assert_eq!(HEADER.field("LEN").map(|f| f.mask()), Some(0x0fff));
        assert!(HEADER.field("len").is_none());
    }

    #[test]
    fn required_len() {
        assert_eq!(HEADER.required_len(), 8);
        let empty = BitfieldDescriptor {
            name: "EMPTY",
            fields: &[],
        };
        assert_eq!(empty.required_len(), 0);
    }

    #[test]
    fn buffer_checks() {
        assert!(HEADER.check_buffer(8).is_ok());
        assert!(matches!(
            HEADER.check_buffer(6),
            Err(AccessError::OutOfRange {
                width: Width::W32,
                buffer_len: 6,
                ..
            })
        ));
    }

    #[test]
    fn far_fields_need_the_whole_address_space() {
        const FAR: BitfieldDescriptor = BitfieldDescriptor {
            name: "FAR",
            fields: &[FieldDescriptor::whole_word("FAR", u32::MAX, Width::W64, ByteOrder::Big)],
        };
        assert!(FAR.required_len() >= u32::MAX as usize);
        assert!(FAR.check_buffer(4096).is_err());
        assert!(FAR.validate().is_ok());
    }

    #[test]
    fn valid_table() {
        assert!(HEADER.validate().is_ok());
    }

    #[test]
    fn mixed_widths_are_rejected() {
        const MIXED: BitfieldDescriptor = BitfieldDescriptor {
            name: "MIXED",
            fields: &[
                FieldDescriptor::new("A", 0, Width::W32, ByteOrder::Big, 0, 8),
                FieldDescriptor::new("B", 1, Width::W16, ByteOrder::Big, 0, 8),
            ],
        };
        assert!(matches!(
            MIXED.validate(),
            Err(DefinitionError::MixedWidths {
                first: "A",
                second: "B"
            })
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        const DUPLICATE: BitfieldDescriptor = BitfieldDescriptor {
            name: "DUPLICATE",
            fields: &[
                FieldDescriptor::new("A", 0, Width::W8, ByteOrder::Big, 0, 4),
                FieldDescriptor::new("A", 0, Width::W8, ByteOrder::Big, 4, 4),
            ],
        };
        assert!(matches!(
            DUPLICATE.validate(),
            Err(DefinitionError::DuplicateName("A"))
        ));
    }
}
