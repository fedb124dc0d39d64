//! One-letter scalar format codes.

use std::fmt;

/// A format code as it appears in a `Field` descriptor. Any ASCII byte is representable so
/// descriptors can name codes a particular table does not know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormatCode(u8);

impl FormatCode {
    pub const U8: Self = Self(b'B');
    pub const U16: Self = Self(b'H');
    pub const U32: Self = Self(b'L');
    pub const U64: Self = Self(b'Q');
    pub const I8: Self = Self(b'b');
    pub const I16: Self = Self(b'h');
    pub const I32: Self = Self(b'l');
    pub const I64: Self = Self(b'q');
    pub const F32: Self = Self(b'f');
    pub const F64: Self = Self(b'd');
    pub const BOOL: Self = Self(b'?');

    pub const STANDARD: [FormatCode; 11] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::BOOL,
    ];

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub const fn as_byte(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl From<char> for FormatCode {
    fn from(value: char) -> Self {
        // non-ASCII input collapses to NUL, which no table maps
        if value.is_ascii() { Self(value as u8) } else { Self(0) }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
