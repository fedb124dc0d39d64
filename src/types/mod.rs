//! The closed set of descriptor nodes a caller assembles into a tree.

pub mod aggregate;
pub mod digest;
pub mod enumeration;
pub mod field;
pub mod pointer;
pub mod sequence;
pub mod string;

use std::fmt;

use bitflags::bitflags;

pub use aggregate::{Struct, Union};
pub use digest::Fingerprint;
pub use enumeration::{Enum, EnumBuilder, EnumVariant};
pub use field::Field;
pub use pointer::Pointer;
pub use sequence::{Sequence, Vector};
pub use string::{TerminatedString, VariableString};

use crate::error::{MappingError, MappingResult, MissingMapping, NodePath};
use crate::format::FormatTable;
use crate::layout::{
    CodegenBackend, CompiledTypeHandle, ElementDescriptor, LayoutTarget, NativeCompiler, NativeLayout,
    Unlowered,
};

bitflags! {
    /// Translations a node variant defines. A set flag only means the rule exists; children
    /// can still fail.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const NATIVE = 0b001;
        const ELEMENT = 0b010;
        const COMPILED = 0b100;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Field,
    Struct,
    Enum,
    Union,
    Vector,
    Pointer,
    Sequence,
    VariableString,
    TerminatedString,
}

impl TypeKind {
    pub const ALL: [TypeKind; 9] = [
        TypeKind::Field,
        TypeKind::Struct,
        TypeKind::Enum,
        TypeKind::Union,
        TypeKind::Vector,
        TypeKind::Pointer,
        TypeKind::Sequence,
        TypeKind::VariableString,
        TypeKind::TerminatedString,
    ];

    pub fn capabilities(self) -> Capabilities {
        match self {
            TypeKind::Field => Capabilities::NATIVE | Capabilities::ELEMENT,
            TypeKind::Struct | TypeKind::Sequence | TypeKind::Pointer => Capabilities::NATIVE,
            TypeKind::Enum
            | TypeKind::Union
            | TypeKind::Vector
            | TypeKind::VariableString
            | TypeKind::TerminatedString => Capabilities::empty(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TypeKind::Field => "Field",
            TypeKind::Struct => "Struct",
            TypeKind::Enum => "Enum",
            TypeKind::Union => "Union",
            TypeKind::Vector => "Vector",
            TypeKind::Pointer => "Pointer",
            TypeKind::Sequence => "Sequence",
            TypeKind::VariableString => "VariableString",
            TypeKind::TerminatedString => "TerminatedString",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A descriptor node. Trees are immutable once built and own their children.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Field(Field),
    Struct(Struct),
    Enum(Enum),
    Union(Union),
    Vector(Vector),
    Pointer(Pointer),
    Sequence(Sequence),
    VariableString(VariableString),
    TerminatedString(TerminatedString),
}

impl Type {
    pub fn name(&self) -> &str {
        match self {
            Type::Field(field) => &field.name,
            Type::Struct(aggregate) => &aggregate.name,
            Type::Enum(enumeration) => &enumeration.name,
            Type::Union(union) => &union.name,
            Type::Vector(vector) => vector.name(),
            Type::Pointer(pointer) => pointer.name(),
            Type::Sequence(sequence) => &sequence.name,
            Type::VariableString(string) => &string.name,
            Type::TerminatedString(string) => &string.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Field(_) => TypeKind::Field,
            Type::Struct(_) => TypeKind::Struct,
            Type::Enum(_) => TypeKind::Enum,
            Type::Union(_) => TypeKind::Union,
            Type::Vector(_) => TypeKind::Vector,
            Type::Pointer(_) => TypeKind::Pointer,
            Type::Sequence(_) => TypeKind::Sequence,
            Type::VariableString(_) => TypeKind::VariableString,
            Type::TerminatedString(_) => TypeKind::TerminatedString,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind().capabilities()
    }

    /// Direct sub-nodes in declaration order. A union lists its tag before its options.
    pub fn children(&self) -> Vec<&Type> {
        match self {
            Type::Field(_) | Type::Enum(_) | Type::TerminatedString(_) => Vec::new(),
            Type::Struct(aggregate) => aggregate.fields.iter().collect(),
            Type::Union(union) => std::iter::once(union.tag.as_ref())
                .chain(union.options.iter())
                .collect(),
            Type::Vector(vector) => vector.options.iter().collect(),
            Type::Pointer(pointer) => vec![pointer.pointee()],
            Type::Sequence(sequence) => vec![sequence.element()],
            Type::VariableString(string) => vec![string.ptr.as_ref(), string.length.as_ref()],
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        if let Type::Field(field) = self { Some(field) } else { None }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        if let Type::Struct(aggregate) = self { Some(aggregate) } else { None }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        if let Type::Sequence(sequence) = self { Some(sequence) } else { None }
    }

    pub fn as_pointer(&self) -> Option<&Pointer> {
        if let Type::Pointer(pointer) = self { Some(pointer) } else { None }
    }

    pub fn to_native_layout(&self, target: &LayoutTarget) -> MappingResult<NativeLayout> {
        NativeCompiler::new(target).compile(self)
    }

    /// Only scalar fields describe a bulk-buffer element on their own.
    pub fn to_element_descriptor(&self, formats: &FormatTable) -> MappingResult<ElementDescriptor> {
        let path = NodePath::root(self.name());
        match self {
            Type::Field(field) => ElementDescriptor::for_field(field, formats)
                .ok_or_else(|| {
                    MappingError::NoElementMapping(
                        MissingMapping::new(path, TypeKind::Field)
                            .with_unknown_format(field.endianness, field.format),
                    )
                }),
            other => Err(MappingError::NoElementMapping(MissingMapping::new(path, other.kind()))),
        }
    }

    pub fn to_compiled_handle(&self) -> MappingResult<CompiledTypeHandle> {
        self.to_compiled_handle_with(&Unlowered)
    }

    pub fn to_compiled_handle_with<B>(&self, backend: &B) -> MappingResult<B::Handle>
    where
        B: CodegenBackend + ?Sized,
    {
        backend.lower(self, &mut NodePath::root(self.name()))
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.name())
    }
}

#[cfg(test)]
mod tests {
    //! Node-level queries that every translation relies on.
    use super::*;
    use crate::fields::{cstring, fixed_string, sl_int8, ub_int8, ul_int32};

    fn every_variant() -> Vec<Type> {
        vec![
            ul_int32("f"),
            Struct::new("s", [ub_int8("a")]).into(),
            Enum::new("e").into(),
            Union::new("u", ub_int8("tag"), [ul_int32("x")]).into(),
            Vector::new(2, [ub_int8("l0"), ub_int8("l1")]).into(),
            Pointer::new(ul_int32("p")).into(),
            fixed_string("seq", 4),
            VariableString::new("vs", Pointer::new(sl_int8("chars")).into(), ul_int32("len")).into(),
            cstring("cs"),
        ]
    }

    #[test]
    fn kinds_cover_every_variant_once() {
        // the sample list above must stay in sync with TypeKind::ALL
        let kinds: Vec<_> = every_variant().iter().map(Type::kind).collect();
        assert_eq!(kinds, TypeKind::ALL, "one sample per variant in declaration order");
    }

    #[test]
    fn capability_flags_match_translation_rules() {
        // only field maps to elements; only field, struct, sequence and pointer map natively
        for ty in every_variant() {
            let caps = ty.capabilities();
            let native = matches!(ty.kind(), TypeKind::Field | TypeKind::Struct | TypeKind::Sequence | TypeKind::Pointer);
            assert_eq!(caps.contains(Capabilities::NATIVE), native, "native flag for {ty}");
            assert_eq!(caps.contains(Capabilities::ELEMENT), ty.kind() == TypeKind::Field, "element flag for {ty}");
            assert!(!caps.contains(Capabilities::COMPILED), "no variant is compiled by default");
        }
    }

    #[test]
    fn display_renders_kind_and_name() {
        assert_eq!(ul_int32("len").to_string(), "Field(\"len\")");
        assert_eq!(Type::from(Pointer::new(ub_int8("data"))).to_string(), "Pointer(\"data\")");
    }

    #[test]
    fn children_follow_declaration_order() {
        // union tag comes first, then options in order
        let choice: Type = Union::new("u", ub_int8("tag"), [ul_int32("x"), ub_int8("y")]).into();
        let names: Vec<_> = choice.children().into_iter().map(Type::name).collect();
        assert_eq!(names, ["tag", "x", "y"]);
        assert!(ul_int32("leaf").children().is_empty(), "fields are leaves");
    }

    #[test]
    fn element_descriptor_rejects_non_fields() {
        // every non-field variant reports NoElementMapping with its own kind
        let formats = FormatTable::standard();
        for ty in every_variant().into_iter().skip(1) {
            let err = ty.to_element_descriptor(&formats).expect_err("only fields map");
            assert!(matches!(err, MappingError::NoElementMapping(_)), "wrong error for {ty}");
            assert_eq!(err.kind(), ty.kind(), "error should name the failing variant");
        }
    }

    #[test]
    fn compiled_handles_are_reserved() {
        // the base design lowers nothing
        for ty in every_variant() {
            let err = ty.to_compiled_handle().expect_err("no backend");
            assert!(matches!(err, MappingError::NoCompiledMapping(_)), "wrong error for {ty}");
            assert_eq!(err.path().leaf(), Some(ty.name()));
        }
    }
}
