//! One-byte enumeration descriptor and its builder.

use smallvec::SmallVec;

use crate::format::{Endianness, FormatCode};

use super::Type;
use super::field::Field;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumVariant {
    pub label: String,
    pub value: u8,
}

/// Enumeration whose discriminant is always one unsigned big-endian byte named after the enum.
#[derive(Clone, Debug, PartialEq)]
pub struct Enum {
    pub name: String,
    pub idx: Field,
    pub variants: SmallVec<[EnumVariant; 4]>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            idx: Field::new(name.clone(), Endianness::Big, FormatCode::U8),
            name,
            variants: SmallVec::new(),
        }
    }

    pub fn builder(name: impl Into<String>) -> EnumBuilder {
        EnumBuilder { ty: Self::new(name) }
    }

    pub fn push_variant(&mut self, variant: EnumVariant) {
        self.variants.push(variant);
    }

    pub fn label_for(&self, value: u8) -> Option<&str> {
        self.variants
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label.as_str())
    }

    pub fn value_of(&self, label: &str) -> Option<u8> {
        self.variants
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
    }
}

impl From<Enum> for Type {
    fn from(value: Enum) -> Self {
        Type::Enum(value)
    }
}

pub struct EnumBuilder {
    ty: Enum,
}

impl EnumBuilder {
    pub fn variant(mut self, label: impl Into<String>, value: u8) -> Self {
        self.ty.push_variant(EnumVariant {
            label: label.into(),
            value,
        });
        self
    }

    pub fn finish(self) -> Enum {
        self.ty
    }
}
