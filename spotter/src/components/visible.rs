/// The Visibility component determines whether a given entity is shown or
/// hidden within the world.
///
/// Entities can have Visibility assigned or removed each tick, eg. when the
/// player toggles the scenario control panel.
#[derive(Debug, Clone, Copy)]
pub struct Visible {}
