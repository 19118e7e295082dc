//! Physical item identifier
//!
//! Every project and file in the namespace is backed by a physical record
//! named by a short uppercase identifier (e.g. `AAAAAAAB`). The logical path
//! of an item may change through renames and moves, and a shared file is
//! reachable from several logical paths, but its physical identifier stays
//! the same for its whole life.

use crate::artifacts::items::{PHYSICAL_ID_MAX_LENGTH, ROOT_PHYSICAL_ID};

/// Physical identifier of a namespace item
///
/// Stored normalized to uppercase so identifiers compare the same regardless
/// of how they were spelled in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhysicalId(String);

impl PhysicalId {
    /// Parse and validate a physical identifier
    ///
    /// # Arguments
    ///
    /// * `id` - 1 to 8 ASCII alphanumeric characters
    ///
    /// # Returns
    ///
    /// Normalized PhysicalId or error if the length or characters are invalid
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        if id.is_empty() || id.len() > PHYSICAL_ID_MAX_LENGTH {
            return Err(anyhow::anyhow!(
                "Invalid physical id length: {} ({})",
                id.len(),
                id
            ));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow::anyhow!("Invalid physical id characters: {}", id));
        }

        Ok(Self(id.to_ascii_uppercase()))
    }

    /// Identifier of the namespace root project
    pub fn root() -> Self {
        Self(ROOT_PHYSICAL_ID.to_string())
    }
}

impl AsRef<str> for PhysicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhysicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
