use serde::{Deserialize, Serialize};

/// The semantic class of a scene object that can sit under the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A threat
    Hostile,
    /// Not a threat
    Friendly,
    /// Could be either
    Unknown,
}

/// The outcome of a committed classification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The category the player asserted
    pub asserted: Category,
    /// Whether the assertion matched the true category
    pub correct: bool,
}

/// A component added to scene objects that the player can aim at and classify.
///
/// The targeting and classification systems drive the notification hooks;
/// scenario code reads the fields back to react to the player's calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifiable {
    /// The object's true category
    pub category: Category,
    /// How many times this object has been freshly acquired by the pointer
    pub times_targeted: u32,
    /// The most recent classification call made against this object, if any
    pub classification: Option<Classification>,
}

impl Classifiable {
    /// Create a new `Classifiable` with the given true category
    pub fn new(category: Category) -> Self {
        Self {
            category,
            times_targeted: 0,
            classification: None,
        }
    }

    /// Called when the pointer freshly acquires this object
    pub fn on_targeted(&mut self) {
        self.times_targeted += 1;
    }

    /// Called when the player commits a classification against this object.
    /// Returns whether the asserted category was correct.
    pub fn on_classified(&mut self, asserted: Category) -> bool {
        let correct = asserted == self.category;
        self.classification = Some(Classification { asserted, correct });
        correct
    }
}
