portbf_field::bitfield! {
    /// The fixed part of an IPv4 header.
    pub struct IP: u32, Big {
        VERSION @ 0 [28; 4] { V4 = 4, V6 = 6 },
        IHL @ 0 [24; 4],
        TYPE @ 0 [16; 8],
        LEN @ 0 [0; 16],
        ID @ 1 [16; 16],
        FLAGS_DF @ 1 [14; 1],
        FLAGS_MF @ 1 [13; 1],
        FRAGOFF @ 1 [0; 13],
        TTL @ 2 [24; 8],
        PROTO @ 2 [16; 8] { ICMP = 1, TCP = 6, UDP = 17 },
        CKSUM @ 2 [0; 16],
        SRC @ 3 [0; 32],
        DST @ 4 [0; 32],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [u8; 20] = [
        0x45, 0x00, 0x00, 0x3c, 0x1c, 0x46, 0x40, 0x00, 0x40, 0x06, 0xb1, 0xe6, 0xac, 0x10, 0x0a,
        0x63, 0xac, 0x10, 0x0a, 0x0c,
    ];

    #[test]
    fn table_is_valid() {
        assert!(IP.validate().is_ok());
        assert_eq!(IP.required_len(), 20);
        assert!(IP.check_buffer(HEADER.len()).is_ok());
    }

    #[test]
    fn masks_match_the_wire_layout() {
        assert_eq!(IP_VERSION.mask(), 0xf000_0000);
        assert_eq!(IP_IHL.mask(), 0x0f00_0000);
        assert_eq!(IP_FLAGS_DF.mask(), 0x0000_4000);
        assert_eq!(IP_FLAGS_MF.mask(), 0x0000_2000);
        assert_eq!(IP_FRAGOFF.mask(), 0x0000_1fff);
        assert_eq!(IP_SRC.mask(), 0xffff_ffff);
    }

    #[test]
    fn reads_sample_header() {
        assert_eq!(IP_VERSION.read(&HEADER).unwrap(), 4);
        assert_eq!(IP_IHL.read(&HEADER).unwrap(), 5);
        assert_eq!(IP_LEN.read(&HEADER).unwrap(), 60);
        assert_eq!(IP_ID.read(&HEADER).unwrap(), 0x1c46);
        assert!(IP_FLAGS_DF.is_set(&HEADER).unwrap());
        assert!(!IP_FLAGS_MF.is_set(&HEADER).unwrap());
        assert_eq!(IP_TTL.read(&HEADER).unwrap(), 64);
        assert_eq!(IP_PROTO.symbol(IP_PROTO.read(&HEADER).unwrap()), Some("TCP"));
        assert_eq!(IP_CKSUM.read(&HEADER).unwrap(), 0xb1e6);
        assert_eq!(IP_SRC.read(&HEADER).unwrap(), 0xac10_0a63);
        assert_eq!(IP_DST.read(&HEADER).unwrap(), 0xac10_0a0c);
    }

    #[test]
    fn version_enum_word_bits() {
        let symbols = IP_VERSION.symbols();
        assert_eq!(symbols[0].word_bits(&IP_VERSION), 0x4000_0000);
        assert_eq!(symbols[1].word_bits(&IP_VERSION), 0x6000_0000);
    }
}
