use std::fmt::{self, Display, Formatter};

/// The byte order of a stored word.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ByteOrder {
    Little,
    Big,
}

#[cfg(all(feature = "host-little-endian", feature = "host-big-endian"))]
compile_error!("features `host-little-endian` and `host-big-endian` are mutually exclusive");

/// The byte order words are loaded and stored in. Fixed when this crate is built.
#[cfg(feature = "host-little-endian")]
pub const HOST: ByteOrder = ByteOrder::Little;

/// The byte order words are loaded and stored in. Fixed when this crate is built.
#[cfg(feature = "host-big-endian")]
pub const HOST: ByteOrder = ByteOrder::Big;

/// The byte order words are loaded and stored in. Fixed when this crate is built.
#[cfg(not(any(feature = "host-little-endian", feature = "host-big-endian")))]
pub const HOST: ByteOrder = if cfg!(target_endian = "big") {
    ByteOrder::Big
} else {
    ByteOrder::Little
};

impl ByteOrder {
    pub const fn is_host(self) -> bool {
        matches!(
            (self, HOST),
            (ByteOrder::Little, ByteOrder::Little) | (ByteOrder::Big, ByteOrder::Big)
        )
    }

    pub const fn opposite(self) -> ByteOrder {
        match self {
            ByteOrder::Little => ByteOrder::Big,
            ByteOrder::Big => ByteOrder::Little,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ByteOrder::Little => "le",
            ByteOrder::Big => "be",
        }
    }
}

impl Display for ByteOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
