use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("misaligned offset: need {align_bits} trailing zero bits in 0x{offset:x}")]
    Misaligned { align_bits: u32, offset: usize },

    #[error("byte offset 0x{offset:x} is beyond any addressable word")]
    OffsetTooLarge { offset: usize },
}
