//! Seam for a code generator backend. Nothing is lowered by default.

use crate::error::{MappingError, MappingResult, MissingMapping, NodePath};
use crate::types::Type;

/// Placeholder handle produced by a backend that lowers nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompiledTypeHandle {
    _reserved: (),
}

/// Lowers descriptors to backend-specific type handles. The default method refuses every node,
/// so a backend only overrides what it actually supports.
pub trait CodegenBackend {
    type Handle;

    fn lower(&self, ty: &Type, path: &mut NodePath) -> MappingResult<Self::Handle> {
        Err(unlowered(ty, path))
    }
}

pub fn unlowered(ty: &Type, path: &NodePath) -> MappingError {
    MappingError::NoCompiledMapping(MissingMapping::new(path.clone(), ty.kind()))
}

/// Backend used by [`Type::to_compiled_handle`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlowered;

impl CodegenBackend for Unlowered {
    type Handle = CompiledTypeHandle;
}

#[cfg(test)]
mod tests {
    //! The backend seam can be overridden piecemeal.
    use super::*;
    use crate::fields::{ub_int8, ul_int32};
    use crate::format::FormatTable;
    use crate::types::{Struct, TypeKind};

    /// Lowers scalar fields to their bit width and refuses everything else.
    struct BitWidths(FormatTable);

    impl CodegenBackend for BitWidths {
        type Handle = u32;

        fn lower(&self, ty: &Type, path: &mut NodePath) -> MappingResult<u32> {
            match ty.as_field().and_then(|field| field.repr(&self.0)) {
                Some(repr) => Ok(repr.byte_width * 8),
                None => Err(unlowered(ty, path)),
            }
        }
    }

    #[test]
    fn custom_backend_overrides_default() {
        let backend = BitWidths(FormatTable::standard());
        assert_eq!(ul_int32("x").to_compiled_handle_with(&backend), Ok(32));
        let agg: Type = Struct::new("s", [ub_int8("a")]).into();
        let err = agg.to_compiled_handle_with(&backend).expect_err("structs are not lowered");
        assert_eq!(err.kind(), TypeKind::Struct);
        assert_eq!(err.to_string(), "no compiled mapping for s (Struct)");
    }
}
