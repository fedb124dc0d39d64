//! Fixed repetitions: sequences with a literal length and SIMD-style vectors.

use super::Type;

#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    pub name: String,
    pub ty: Box<Type>,
    pub length: u32,
}

impl Sequence {
    pub fn new(name: impl Into<String>, ty: Type, length: u32) -> Self {
        Self {
            name: name.into(),
            ty: Box::new(ty),
            length,
        }
    }

    pub fn element(&self) -> &Type {
        &self.ty
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl From<Sequence> for Type {
    fn from(value: Sequence) -> Self {
        Type::Sequence(value)
    }
}

/// Homogeneous lane group. It carries no declared name, so one is derived from the width.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    name: String,
    pub width: u32,
    pub options: Vec<Type>,
}

impl Vector {
    pub fn new(width: u32, options: impl IntoIterator<Item = Type>) -> Self {
        Self {
            name: format!("vector{width}"),
            width,
            options: options.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the declared width matches the number of lanes supplied.
    pub fn is_consistent(&self) -> bool {
        self.options.len() == self.width as usize
    }
}

impl From<Vector> for Type {
    fn from(value: Vector) -> Self {
        Type::Vector(value)
    }
}

#[cfg(test)]
mod tests {
    //! Repetition descriptors keep their literal counts.
    use super::*;
    use crate::fields::{n_float32, ub_int8};

    #[test]
    fn zero_length_sequences_are_legal() {
        // construction never rejects an empty repetition
        let empty = Sequence::new("pad", ub_int8(""), 0);
        assert!(empty.is_empty(), "length zero should report empty");
        assert_eq!(empty.element().name(), "");
    }

    #[test]
    fn vector_derives_name_and_checks_width() {
        // a vector without a name still has a stable label
        let lanes = Vector::new(4, (0..4).map(|_| n_float32("lane")));
        assert_eq!(lanes.name(), "vector4");
        assert!(lanes.is_consistent(), "four lanes match width four");
        let short = Vector::new(4, [n_float32("lane")]);
        assert!(!short.is_consistent(), "one lane cannot satisfy width four");
    }
}
