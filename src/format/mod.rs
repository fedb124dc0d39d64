//! Scalar format vocabulary: endianness tags, one-letter format codes, and the table that
//! resolves them to concrete widths.

pub mod code;
pub mod endianness;
pub mod table;

pub use code::FormatCode;
pub use endianness::{ByteOrder, Endianness};
pub use table::{FormatTable, NumericKind, ScalarRepr};
