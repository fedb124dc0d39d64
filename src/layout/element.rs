//! Bulk-buffer element descriptors.

use crate::format::{ByteOrder, FormatTable, NumericKind, ScalarRepr};
use crate::types::Field;

/// One repeating scalar unit of a numeric buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub byte_order: ByteOrder,
    pub repr: ScalarRepr,
}

impl ElementDescriptor {
    pub fn for_field(field: &Field, formats: &FormatTable) -> Option<Self> {
        let repr = field.repr(formats)?;
        Some(Self {
            byte_order: field.endianness.resolve(),
            repr,
        })
    }

    pub fn item_size(&self) -> u32 {
        self.repr.byte_width
    }

    pub fn kind(&self) -> NumericKind {
        self.repr.kind
    }

    /// Array-interface type string such as `<u4` or `|b1`. Single-byte items carry no byte order.
    pub fn type_str(&self) -> String {
        let order = if self.repr.byte_width <= 1 { '|' } else { self.byte_order.tag() };
        format!("{order}{}{}", self.repr.kind.type_char(), self.repr.byte_width)
    }
}
