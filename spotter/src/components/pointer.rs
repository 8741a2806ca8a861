use hecs::Entity;

use super::hand::Handedness;

/// A component added to the entity that tracks the dominant controller's aim.
///
/// `current_target` is a weak handle: the targeting system sets it while the
/// aim ray rests on a classifiable object and clears it the frame it leaves.
/// `classified` latches after the first classification commit and is reset
/// whenever `current_target` changes, so each acquisition can be classified
/// at most once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Which hand is the pointer in?
    pub handedness: Handedness,
    /// How much has the trigger been pulled down?
    pub trigger_value: f32,
    /// The classifiable object currently under the crosshair, if any
    pub current_target: Option<Entity>,
    /// Has the current acquisition already been classified?
    pub classified: bool,
}

impl Pointer {
    /// Create a new `Pointer` for the given hand
    pub fn new(handedness: Handedness) -> Self {
        Self {
            handedness,
            trigger_value: 0.0,
            current_target: None,
            classified: false,
        }
    }
}
