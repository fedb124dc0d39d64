//! Abstract binary type descriptors and the rules that translate them into native memory
//! layouts, bulk-buffer element descriptors, and (reserved) code generator handles.

pub mod array;
pub mod error;
pub mod fields;
pub mod format;
pub mod layout;
pub mod types;

pub use array::{ArrayBuilder, ArrayOrder, ShapeCell, array_c, array_f, array_s};
pub use error::{ConfigError, MappingError, MappingResult, MemberLookupError, MissingMapping, NodePath};
pub use format::{ByteOrder, Endianness, FormatCode, FormatTable, NumericKind, ScalarRepr};
pub use layout::{ElementDescriptor, LayoutTarget, NativeLayout, Packing};
pub use types::{Capabilities, Type, TypeKind};
