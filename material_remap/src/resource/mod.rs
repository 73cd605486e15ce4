//! Resource module
//!
//! Material instances, their persistent identities, the project asset
//! catalog and the session-scoped project material index.

mod material;
mod identity;
mod asset_database;
mod project_index;

pub use material::{Material, MaterialDesc, MaterialRef};
pub use identity::{MaterialIdentity, IdentityResolver};
pub use asset_database::{AssetDatabase, AssetCatalog};
pub use project_index::ProjectMaterialIndex;
