/// A component added to an entity to display a 2D "panel" in space.
///
/// Rendering is the host's problem: this component only carries the text and
/// buttons. The host's UI layer sets `clicked_this_frame` on a button when
/// the user activates it; `scenario_system` consumes and clears the flag.
#[derive(Debug, Clone, Default)]
pub struct UIPanel {
    /// The text to be displayed
    pub text: String,
    /// A list of buttons in this panel
    pub buttons: Vec<UIPanelButton>,
}

/// A button for a panel
#[derive(Debug, Clone)]
pub struct UIPanelButton {
    /// Text to be displayed
    pub text: String,
    /// Was this button hovered last frame?
    pub hovered_last_frame: bool,
    /// Is this button hovered this frame?
    pub hovered_this_frame: bool,
    /// Was this button clicked?
    pub clicked_this_frame: bool,
}

impl UIPanelButton {
    /// Convenience function to create a new panel button
    pub fn new(text: &str) -> Self {
        UIPanelButton {
            text: text.to_string(),
            hovered_last_frame: false,
            hovered_this_frame: false,
            clicked_this_frame: false,
        }
    }
}
