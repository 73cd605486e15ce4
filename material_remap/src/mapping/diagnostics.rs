/// Non-fatal remap diagnostics.
///
/// Lookup misses never abort a load or an apply. Each one is logged at WARN
/// through the engine logger and handed back to the caller.

use std::fmt;
use crate::matremap_warn;
use crate::resource::MaterialIdentity;
use crate::scene::NodeKey;

/// A recoverable lookup miss
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemapWarning {
    /// A loaded mapping names a source material the object does not use
    SourceNotOnObject {
        source: MaterialIdentity,
    },

    /// A loaded mapping names a destination the project does not contain
    DestinationNotInProject {
        source: MaterialIdentity,
        destination: MaterialIdentity,
    },

    /// Apply could not find the destination material in the project index
    UnresolvedDestination {
        node: NodeKey,
        slot: usize,
        source: MaterialIdentity,
        destination: MaterialIdentity,
    },
}

impl RemapWarning {
    /// Log this warning through the engine logger
    pub(crate) fn report(&self, log_source: &str) {
        matremap_warn!(log_source, "{}", self);
    }
}

impl fmt::Display for RemapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapWarning::SourceNotOnObject { source } => {
                write!(f, "Material {} not found on object", source)
            }
            RemapWarning::DestinationNotInProject { source, destination } => {
                write!(f, "Material {} (mapped from {}) not found in project", destination, source)
            }
            RemapWarning::UnresolvedDestination { node, slot, source, destination } => {
                write!(f, "Material {} (mapped from {}) for {:?} slot {} not found in project index",
                    destination, source, node, slot)
            }
        }
    }
}
