//! Lookup from `(endianness, format code)` to the scalar representation a layout needs.

use ahash::AHashMap;

use super::code::FormatCode;
use super::endianness::Endianness;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Unsigned,
    Signed,
    Floating,
    Boolean,
}

impl NumericKind {
    /// Kind character used by array-interface type strings.
    pub const fn type_char(self) -> char {
        match self {
            NumericKind::Unsigned => 'u',
            NumericKind::Signed => 'i',
            NumericKind::Floating => 'f',
            NumericKind::Boolean => 'b',
        }
    }
}

/// Width and numeric kind of one scalar cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScalarRepr {
    pub byte_width: u32,
    pub kind: NumericKind,
}

impl ScalarRepr {
    pub const fn new(byte_width: u32, kind: NumericKind) -> Self {
        Self { byte_width, kind }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self.kind, NumericKind::Signed)
    }
}

/// Immutable table consumed by the layout compiler. Callers inject it through
/// [`LayoutTarget`](crate::layout::LayoutTarget) instead of relying on a global.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormatTable {
    entries: AHashMap<(Endianness, FormatCode), ScalarRepr>,
}

impl FormatTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every standard code in all three endiannesses with standard (not platform) sizes.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for endianness in Endianness::ALL {
            for code in FormatCode::STANDARD {
                if let Some(repr) = standard_repr(code) {
                    table.entries.insert((endianness, code), repr);
                }
            }
        }
        table
    }

    pub fn with_entry(mut self, endianness: Endianness, code: FormatCode, repr: ScalarRepr) -> Self {
        self.entries.insert((endianness, code), repr);
        self
    }

    /// Drops `code` for every endianness.
    pub fn without_code(mut self, code: FormatCode) -> Self {
        self.entries.retain(|(_, entry), _| *entry != code);
        self
    }

    pub fn scalar_repr(&self, endianness: Endianness, code: FormatCode) -> Option<ScalarRepr> {
        self.entries.get(&(endianness, code)).copied()
    }

    pub fn contains(&self, endianness: Endianness, code: FormatCode) -> bool {
        self.entries.contains_key(&(endianness, code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn standard_repr(code: FormatCode) -> Option<ScalarRepr> {
    let repr = match code {
        FormatCode::U8 => ScalarRepr::new(1, NumericKind::Unsigned),
        FormatCode::U16 => ScalarRepr::new(2, NumericKind::Unsigned),
        FormatCode::U32 => ScalarRepr::new(4, NumericKind::Unsigned),
        FormatCode::U64 => ScalarRepr::new(8, NumericKind::Unsigned),
        FormatCode::I8 => ScalarRepr::new(1, NumericKind::Signed),
        FormatCode::I16 => ScalarRepr::new(2, NumericKind::Signed),
        FormatCode::I32 => ScalarRepr::new(4, NumericKind::Signed),
        FormatCode::I64 => ScalarRepr::new(8, NumericKind::Signed),
        FormatCode::F32 => ScalarRepr::new(4, NumericKind::Floating),
        FormatCode::F64 => ScalarRepr::new(8, NumericKind::Floating),
        FormatCode::BOOL => ScalarRepr::new(1, NumericKind::Boolean),
        _ => return None,
    };
    Some(repr)
}
