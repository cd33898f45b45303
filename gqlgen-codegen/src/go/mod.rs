//! Go code generation modules.

pub mod dependencies;
pub mod enums;
pub mod structs;
pub mod types;

pub use dependencies::{ResolvedEntities, resolve_dependencies};
pub use enums::{EnumCatalog, EnumInfo};
pub use structs::StructGenerator;
pub use types::{TypeMapper, map_scalar};
