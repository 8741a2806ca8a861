use serde::{Deserialize, Serialize};

/// A component that represents the "side" or "handedness" that an entity is on
/// Used by components such as `Pointer` to identify which controller they should map to
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}
