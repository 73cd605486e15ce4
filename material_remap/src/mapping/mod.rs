//! Mapping module
//!
//! Unique material discovery, source -> destination mappings, their binary
//! format and file storage, slot rewriting, and the editing session tying
//! them together.

mod unique_set;
mod table;
mod codec;
mod store;
mod applicator;
mod session;
mod diagnostics;

pub use unique_set::{UniqueMaterialSet, collect_unique};
pub use table::{Mapping, generate};
pub use codec::{serialize, deserialize, MAPPING_MAGIC, MAPPING_FORMAT_VERSION};
pub use store::{MappingStore, Reconciliation, MAPPING_EXTENSION};
pub use applicator::{apply, apply_to_visits, ApplyReport, SlotChange};
pub use session::{RemapConfig, RemapSession};
pub use diagnostics::RemapWarning;
