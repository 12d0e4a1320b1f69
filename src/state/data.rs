/// Shared data structures for the editor state
///
/// These structs represent the data model that flows between
/// the layer store and the UI layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::edit::ShadowParams;

/// Opaque layer identifier, handed out by the store and never reused
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub(super) u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// Represents a single shadow layer in the editor
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShadowLayer {
    /// Assigned at creation, never mutated
    pub id: LayerId,
    /// Offsets, blur, spread, color and flags
    pub params: ShadowParams,
}
