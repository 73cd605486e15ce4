/// Material identity and resolution.
///
/// A MaterialIdentity names the persisted asset behind a material instance,
/// independent of how many in-memory instances alias it. Identities are what
/// mappings are keyed by; runtime handles are never persisted.

use std::fmt;
use blake3::Hasher;
use super::material::Material;

/// Domain prefix hashed ahead of the asset path
const IDENTITY_DOMAIN: &[u8] = b"material:";

/// Bytes of the digest kept in an identity (128 bits)
const IDENTITY_BYTES: usize = 16;

// ===== MATERIAL IDENTITY =====

/// Stable token naming one material asset.
///
/// The empty identity means "not backed by a persisted asset" and must
/// never match a real mapping key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialIdentity(String);

impl MaterialIdentity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The empty (unresolved) identity
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Derive an identity from an asset path.
    ///
    /// Returns 32 lowercase hex characters: the first 128 bits of
    /// `blake3("material:" || path)`, identical on every build and platform.
    pub fn from_asset_path(path: &str) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(IDENTITY_DOMAIN);
        hasher.update(path.as_bytes());
        let digest = hasher.finalize();

        let hex: String = digest.as_bytes()[..IDENTITY_BYTES]
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect();
        Self(hex)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaterialIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "<unresolved>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for MaterialIdentity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MaterialIdentity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ===== RESOLVER =====

/// Maps a material instance to the identity of its backing asset.
///
/// Implementations must be deterministic and side-effect free: the same
/// backing asset yields the same identity no matter which instance is asked.
/// Materials without a persisted, addressable asset resolve to
/// [`MaterialIdentity::empty`].
pub trait IdentityResolver {
    fn resolve(&self, material: &Material) -> MaterialIdentity;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
