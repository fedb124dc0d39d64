//! Fixed-width scalar descriptor.

use crate::format::{Endianness, FormatCode, FormatTable, ScalarRepr};

use super::Type;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub endianness: Endianness,
    pub format: FormatCode,
}

impl Field {
    pub fn new(name: impl Into<String>, endianness: Endianness, format: FormatCode) -> Self {
        Self {
            name: name.into(),
            endianness,
            format,
        }
    }

    pub fn repr(&self, table: &FormatTable) -> Option<ScalarRepr> {
        table.scalar_repr(self.endianness, self.format)
    }
}

impl From<Field> for Type {
    fn from(value: Field) -> Self {
        Type::Field(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repr_consults_the_given_table() {
        // the same descriptor resolves differently against different tables
        let field = Field::new("count", Endianness::Big, FormatCode::U16);
        assert_eq!(field.repr(&FormatTable::standard()).map(|r| r.byte_width), Some(2));
        assert_eq!(field.repr(&FormatTable::empty()), None, "empty table resolves nothing");
    }
}
