/*!
# Material Remap

Bulk material substitution for object hierarchies.

Given an object graph, this crate collects every distinct material the
object uses, lets a caller map each one to a material of the project, and
rewrites the object's material slots accordingly. Mappings are keyed by
persistent asset identity and can be saved to and loaded from `.mapping`
files.

## Architecture

- **IdentityResolver**: Material instance to persistent identity
- **SceneGraph / walk**: Object graph and lazy material slot walk
- **UniqueMaterialSet**: Distinct object materials in discovery order
- **Mapping / MappingStore**: Substitution table, binary format, files
- **apply**: Copy-on-write slot rewriting
- **RemapSession**: One editing session (object set, project index, selection)
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod resource;
pub mod scene;
pub mod mapping;

// Main matremap namespace module
pub mod matremap {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine (logger host)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Mapping sub-module
    pub mod mapping {
        pub use crate::mapping::*;
    }
}
