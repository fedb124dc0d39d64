//! Descriptor templates for n-dimensional array views: a data pointer followed by per-dimension
//! shape (and optionally stride) cells.
//!
//! The free functions keep one unsigned native byte per shape/stride cell, which caps each
//! extent at 255. Use [`ArrayBuilder::cell`] with a wider [`ShapeCell`] for real array extents.

use crate::fields::{un_int8, un_int16, un_int32, un_int64};
use crate::types::{Pointer, Sequence, Struct, Type};

/// Iteration order a consumer should apply. Row- and column-major views share a field layout;
/// only strided views add a stride sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrayOrder {
    RowMajor,
    ColumnMajor,
    Strided,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeCell {
    #[default]
    U8,
    U16,
    U32,
    U64,
}

impl ShapeCell {
    fn field(self) -> Type {
        match self {
            ShapeCell::U8 => un_int8(""),
            ShapeCell::U16 => un_int16(""),
            ShapeCell::U32 => un_int32(""),
            ShapeCell::U64 => un_int64(""),
        }
    }

    pub const fn bytes(self) -> u32 {
        match self {
            ShapeCell::U8 => 1,
            ShapeCell::U16 => 2,
            ShapeCell::U32 => 4,
            ShapeCell::U64 => 8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayBuilder {
    order: ArrayOrder,
    cell: ShapeCell,
}

impl ArrayBuilder {
    pub fn new(order: ArrayOrder) -> Self {
        Self {
            order,
            cell: ShapeCell::default(),
        }
    }

    pub fn cell(mut self, cell: ShapeCell) -> Self {
        self.cell = cell;
        self
    }

    pub fn order(&self) -> ArrayOrder {
        self.order
    }

    pub fn shape_cell(&self) -> ShapeCell {
        self.cell
    }

    pub fn build<F>(&self, name: &str, element: F, ndim: u32) -> Struct
    where
        F: FnOnce(&str) -> Type,
    {
        let mut fields = vec![
            Type::Pointer(Pointer::new(element("data"))),
            Type::Sequence(Sequence::new("shape", self.cell.field(), ndim)),
        ];
        if self.order == ArrayOrder::Strided {
            fields.push(Type::Sequence(Sequence::new("stride", self.cell.field(), ndim)));
        }
        Struct::new(name, fields)
    }
}

pub fn array_c<F>(name: &str, element: F, ndim: u32) -> Struct
where
    F: FnOnce(&str) -> Type,
{
    ArrayBuilder::new(ArrayOrder::RowMajor).build(name, element, ndim)
}

pub fn array_f<F>(name: &str, element: F, ndim: u32) -> Struct
where
    F: FnOnce(&str) -> Type,
{
    ArrayBuilder::new(ArrayOrder::ColumnMajor).build(name, element, ndim)
}

pub fn array_s<F>(name: &str, element: F, ndim: u32) -> Struct
where
    F: FnOnce(&str) -> Type,
{
    ArrayBuilder::new(ArrayOrder::Strided).build(name, element, ndim)
}
