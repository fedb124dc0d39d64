//! Struct and tagged-union descriptors.

use ahash::AHashMap;

use super::Type;

/// Ordered aggregate. Declared order is authoritative for every derived layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<Type>,
}

impl Struct {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = Type>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(Type::name)
    }

    /// Names declared more than once, in order of first appearance. Duplicates are legal in a
    /// descriptor but break named-member access on the derived layout.
    pub fn duplicate_field_names(&self) -> Vec<&str> {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        let mut order = Vec::new();
        for name in self.field_names() {
            let count = counts.entry(name).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(name);
            }
        }
        order
    }
}

impl From<Struct> for Type {
    fn from(value: Struct) -> Self {
        Type::Struct(value)
    }
}

/// Tagged choice between alternatives sharing the same storage. The tag is descriptive only;
/// nothing here checks it against the options.
#[derive(Clone, Debug, PartialEq)]
pub struct Union {
    pub name: String,
    pub tag: Box<Type>,
    pub options: Vec<Type>,
}

impl Union {
    pub fn new(name: impl Into<String>, tag: Type, options: impl IntoIterator<Item = Type>) -> Self {
        Self {
            name: name.into(),
            tag: Box::new(tag),
            options: options.into_iter().collect(),
        }
    }
}

impl From<Union> for Type {
    fn from(value: Union) -> Self {
        Type::Union(value)
    }
}
