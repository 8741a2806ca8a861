#![allow(missing_docs)]
pub mod haptic_context;
pub mod input_context;
pub mod physics_context;
pub mod scenario_context;
pub mod xr_context;

pub use haptic_context::HapticContext;
pub use input_context::InputContext;
pub use physics_context::PhysicsContext;
pub use scenario_context::ScenarioContext;
pub use xr_context::XrInput;
