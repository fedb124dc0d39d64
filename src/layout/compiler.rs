//! Translates descriptor trees into native layouts.

use log::{debug, trace};

use crate::error::{MappingError, MappingResult, MissingMapping, NodePath};
use crate::types::{Capabilities, Field, Pointer, Sequence, Struct, Type, TypeKind};

use super::native::{AddressLayout, AggregateLayout, MemberLayout, NativeLayout, RepeatedLayout, ScalarLayout};
use super::target::LayoutTarget;

pub struct NativeCompiler<'t> {
    target: &'t LayoutTarget,
}

impl<'t> NativeCompiler<'t> {
    pub fn new(target: &'t LayoutTarget) -> Self {
        Self { target }
    }

    pub fn compile(&self, ty: &Type) -> MappingResult<NativeLayout> {
        let mut path = NodePath::root(ty.name());
        let result = self.compile_node(ty, &mut path);
        if let Err(err) = &result {
            debug!("native layout for {} failed: {err}", ty.name());
        }
        result
    }

    fn compile_node(&self, ty: &Type, path: &mut NodePath) -> MappingResult<NativeLayout> {
        trace!("compiling {} at {path}", ty.kind());
        if !ty.capabilities().contains(Capabilities::NATIVE) {
            return Err(MappingError::NoNativeMapping(MissingMapping::new(path.clone(), ty.kind())));
        }
        match ty {
            Type::Field(field) => self.compile_field(field, path),
            Type::Struct(aggregate) => self.compile_struct(aggregate, path),
            Type::Sequence(sequence) => self.compile_sequence(sequence, path),
            Type::Pointer(pointer) => self.compile_pointer(pointer, path),
            other => Err(MappingError::NoNativeMapping(MissingMapping::new(path.clone(), other.kind()))),
        }
    }

    fn compile_child(&self, child: &Type, path: &mut NodePath) -> MappingResult<NativeLayout> {
        path.push(child.name());
        let result = self.compile_node(child, path);
        path.pop();
        result
    }

    fn compile_field(&self, field: &Field, path: &NodePath) -> MappingResult<NativeLayout> {
        let Some(repr) = field.repr(self.target.formats()) else {
            let missing = MissingMapping::new(path.clone(), TypeKind::Field)
                .with_unknown_format(field.endianness, field.format);
            return Err(MappingError::NoNativeMapping(missing));
        };
        Ok(NativeLayout::Scalar(ScalarLayout {
            repr,
            byte_order: field.endianness.resolve(),
        }))
    }

    fn compile_struct(&self, aggregate: &Struct, path: &mut NodePath) -> MappingResult<NativeLayout> {
        let mut members = Vec::with_capacity(aggregate.fields.len());
        let mut cursor = 0u64;
        let mut align = 1u32;
        for field in &aggregate.fields {
            let layout = self.compile_child(field, path)?;
            let member_align = self.target.member_align(layout.align());
            let offset = align_up(cursor, member_align)
                .and_then(|offset| offset.checked_add(layout.size()).map(|end| (offset, end)));
            let Some((offset, end)) = offset else {
                path.push(field.name());
                let err = overflow(path, field.kind());
                path.pop();
                return Err(err);
            };
            cursor = end;
            align = align.max(member_align);
            members.push(MemberLayout {
                name: field.name().to_owned(),
                offset,
                layout,
            });
        }
        let size = align_up(cursor, align).ok_or_else(|| overflow(path, TypeKind::Struct))?;
        Ok(NativeLayout::Aggregate(AggregateLayout {
            name: aggregate.name.clone(),
            members,
            size,
            align,
        }))
    }

    fn compile_sequence(&self, sequence: &Sequence, path: &mut NodePath) -> MappingResult<NativeLayout> {
        let element = self.compile_child(sequence.element(), path)?;
        let stride = align_up(element.size(), self.target.member_align(element.align()))
            .filter(|stride| stride.checked_mul(sequence.length as u64).is_some())
            .ok_or_else(|| overflow(path, TypeKind::Sequence))?;
        Ok(NativeLayout::Repeated(RepeatedLayout {
            element: Box::new(element),
            count: sequence.length,
            stride,
        }))
    }

    fn compile_pointer(&self, pointer: &Pointer, path: &mut NodePath) -> MappingResult<NativeLayout> {
        // the pointer shares its pointee's name, so the path is not extended
        let pointee = self.compile_node(pointer.pointee(), path)?;
        Ok(NativeLayout::Address(AddressLayout {
            pointee: Box::new(pointee),
            width: self.target.pointer_width(),
        }))
    }
}

fn align_up(value: u64, align: u32) -> Option<u64> {
    let align = align.max(1) as u64;
    value.div_ceil(align).checked_mul(align)
}

fn overflow(path: &NodePath, kind: TypeKind) -> MappingError {
    MappingError::NoNativeMapping(MissingMapping::new(path.clone(), kind).with_size_overflow())
}
