//! Named constructors for every fixed-width scalar field, plus the string helpers built on them.
//!
//! The integer constructors follow `<signedness><endianness>_int<bits>`: `u`/`s` for unsigned or
//! signed, then `b`/`l`/`n` for big, little or native byte order.

use crate::format::{Endianness, FormatCode};
use crate::types::{Field, Sequence, TerminatedString, Type};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Unsigned,
    Signed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub const fn bytes(self) -> u32 {
        match self {
            IntWidth::W8 => 1,
            IntWidth::W16 => 2,
            IntWidth::W32 => 4,
            IntWidth::W64 => 8,
        }
    }
}

pub type FieldCtor = fn(&str) -> Type;

pub struct IntegerFieldEntry {
    pub signedness: Signedness,
    pub width: IntWidth,
    pub endianness: Endianness,
    pub ctor: FieldCtor,
}

fn field(name: &str, endianness: Endianness, format: FormatCode) -> Type {
    Type::Field(Field::new(name, endianness, format))
}

macro_rules! field_ctors {
    ($($ctor:ident => $endianness:ident, $code:ident;)*) => {
        $(
            pub fn $ctor(name: &str) -> Type {
                field(name, Endianness::$endianness, FormatCode::$code)
            }
        )*
    };
}

field_ctors! {
    ub_int8 => Big, U8;
    ub_int16 => Big, U16;
    ub_int32 => Big, U32;
    ub_int64 => Big, U64;
    sb_int8 => Big, I8;
    sb_int16 => Big, I16;
    sb_int32 => Big, I32;
    sb_int64 => Big, I64;

    ul_int8 => Little, U8;
    ul_int16 => Little, U16;
    ul_int32 => Little, U32;
    ul_int64 => Little, U64;
    sl_int8 => Little, I8;
    sl_int16 => Little, I16;
    sl_int32 => Little, I32;
    sl_int64 => Little, I64;

    un_int8 => Native, U8;
    un_int16 => Native, U16;
    un_int32 => Native, U32;
    un_int64 => Native, U64;
    sn_int8 => Native, I8;
    sn_int16 => Native, I16;
    sn_int32 => Native, I32;
    sn_int64 => Native, I64;

    b_float32 => Big, F32;
    l_float32 => Little, F32;
    n_float32 => Native, F32;
    b_float64 => Big, F64;
    l_float64 => Little, F64;
    n_float64 => Native, F64;

    boolean => Native, BOOL;
}

pub fn byte(name: &str) -> Type {
    ub_int8(name)
}

pub fn schar(name: &str) -> Type {
    sl_int8(name)
}

pub fn char(name: &str) -> Type {
    schar(name)
}

pub fn uchar(name: &str) -> Type {
    ul_int8(name)
}

/// `length` one-byte character cells.
pub fn fixed_string(name: &str, length: u32) -> Type {
    Type::Sequence(Sequence::new(name, char(""), length))
}

/// NUL-terminated string.
pub fn cstring(name: &str) -> Type {
    Type::TerminatedString(TerminatedString::new(name, 0x00))
}

macro_rules! integer_table {
    ($($sign:ident $width:ident $endianness:ident => $ctor:ident,)*) => {
        /// One entry per (signedness, width, endianness) triple.
        pub static INTEGER_FIELDS: &[IntegerFieldEntry] = &[
            $(IntegerFieldEntry {
                signedness: Signedness::$sign,
                width: IntWidth::$width,
                endianness: Endianness::$endianness,
                ctor: $ctor,
            },)*
        ];
    };
}

integer_table! {
    Unsigned W8 Big => ub_int8,
    Unsigned W16 Big => ub_int16,
    Unsigned W32 Big => ub_int32,
    Unsigned W64 Big => ub_int64,
    Signed W8 Big => sb_int8,
    Signed W16 Big => sb_int16,
    Signed W32 Big => sb_int32,
    Signed W64 Big => sb_int64,
    Unsigned W8 Little => ul_int8,
    Unsigned W16 Little => ul_int16,
    Unsigned W32 Little => ul_int32,
    Unsigned W64 Little => ul_int64,
    Signed W8 Little => sl_int8,
    Signed W16 Little => sl_int16,
    Signed W32 Little => sl_int32,
    Signed W64 Little => sl_int64,
    Unsigned W8 Native => un_int8,
    Unsigned W16 Native => un_int16,
    Unsigned W32 Native => un_int32,
    Unsigned W64 Native => un_int64,
    Signed W8 Native => sn_int8,
    Signed W16 Native => sn_int16,
    Signed W32 Native => sn_int32,
    Signed W64 Native => sn_int64,
}

pub fn integer_ctor(signedness: Signedness, width: IntWidth, endianness: Endianness) -> Option<FieldCtor> {
    INTEGER_FIELDS
        .iter()
        .find(|entry| entry.signedness == signedness && entry.width == width && entry.endianness == endianness)
        .map(|entry| entry.ctor)
}

pub fn integer_field(
    name: &str,
    signedness: Signedness,
    width: IntWidth,
    endianness: Endianness,
) -> Option<Type> {
    integer_ctor(signedness, width, endianness).map(|ctor| ctor(name))
}
