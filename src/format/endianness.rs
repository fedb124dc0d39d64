use std::fmt;

/// Byte order requested by a descriptor. `Native` is resolved against the host only when a
/// layout is derived, so descriptors stay portable.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Endianness {
    Big,
    Little,
    Native,
}

/// Concrete byte order after `Native` has been resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl Endianness {
    pub const ALL: [Endianness; 3] = [Endianness::Big, Endianness::Little, Endianness::Native];

    /// Single character tag used by the format table (`>`, `<`, `=`).
    pub const fn tag(self) -> char {
        match self {
            Endianness::Big => '>',
            Endianness::Little => '<',
            Endianness::Native => '=',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '>' | '!' => Some(Endianness::Big),
            '<' => Some(Endianness::Little),
            '=' | '@' => Some(Endianness::Native),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn resolve(self) -> ByteOrder {
        match self {
            Endianness::Big => ByteOrder::Big,
            Endianness::Little => ByteOrder::Little,
            Endianness::Native => ByteOrder::native(),
        }
    }
}

impl ByteOrder {
    #[inline(always)]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    pub const fn tag(self) -> char {
        match self {
            ByteOrder::Little => '<',
            ByteOrder::Big => '>',
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
            Endianness::Native => "native",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    //! Endianness resolution stays stable regardless of the host it runs on.
    use super::*;

    #[test]
    fn tags_round_trip() {
        // every endianness tag should parse back to the same variant
        for endianness in Endianness::ALL {
            assert_eq!(
                Endianness::from_tag(endianness.tag()),
                Some(endianness),
                "tag {} should map back to {endianness}",
                endianness.tag()
            );
        }
        assert_eq!(Endianness::from_tag('x'), None, "unknown tags must be rejected");
    }

    #[test]
    fn native_resolves_to_host_order() {
        // native endianness must follow the compilation target
        let expected = if cfg!(target_endian = "little") { ByteOrder::Little } else { ByteOrder::Big };
        assert_eq!(Endianness::Native.resolve(), expected, "native should resolve to host order");
        assert_eq!(Endianness::Big.resolve(), ByteOrder::Big, "explicit big stays big");
        assert_eq!(Endianness::Little.resolve(), ByteOrder::Little, "explicit little stays little");
    }
}
