//! Reference to another descriptor. A pointer never owns the pointee's storage and has no name
//! of its own.

use super::Type;

#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
    pub ty: Box<Type>,
}

impl Pointer {
    pub fn new(ty: Type) -> Self {
        Self { ty: Box::new(ty) }
    }

    pub fn pointee(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &str {
        self.ty.name()
    }
}

impl From<Pointer> for Type {
    fn from(value: Pointer) -> Self {
        Type::Pointer(value)
    }
}
