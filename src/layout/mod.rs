//! Derived representations: native memory layouts, element descriptors, and the compiled-handle
//! seam, plus the target configuration they are derived against.

pub mod compiled;
pub mod compiler;
pub mod element;
pub mod native;
pub mod target;
pub mod walker;

pub use compiled::{CodegenBackend, CompiledTypeHandle, Unlowered};
pub use compiler::NativeCompiler;
pub use element::ElementDescriptor;
pub use native::{AddressLayout, AggregateLayout, MemberLayout, NativeLayout, RepeatedLayout, ScalarLayout};
pub use target::{LayoutTarget, Packing};
pub use walker::{MemberWalker, WalkedMember};
