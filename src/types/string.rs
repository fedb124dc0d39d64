//! String descriptors whose extent is not a literal count.

use super::Type;

/// String located through `ptr` whose length is read from the typed `length` field.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableString {
    pub name: String,
    pub ptr: Box<Type>,
    pub length: Box<Type>,
}

impl VariableString {
    pub fn new(name: impl Into<String>, ptr: Type, length: Type) -> Self {
        Self {
            name: name.into(),
            ptr: Box::new(ptr),
            length: Box::new(length),
        }
    }
}

impl From<VariableString> for Type {
    fn from(value: VariableString) -> Self {
        Type::VariableString(value)
    }
}

/// Sentinel-terminated string with no upper bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminatedString {
    pub name: String,
    pub terminator: u8,
}

impl TerminatedString {
    pub fn new(name: impl Into<String>, terminator: u8) -> Self {
        Self {
            name: name.into(),
            terminator,
        }
    }
}

impl From<TerminatedString> for Type {
    fn from(value: TerminatedString) -> Self {
        Type::TerminatedString(value)
    }
}
