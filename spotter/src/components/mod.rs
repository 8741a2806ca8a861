#![allow(missing_docs)]
pub mod classifiable;
pub mod hand;
pub mod hmd;
pub mod info;
pub mod local_transform;
pub mod physics;
pub mod pointer;
pub mod reticle;
pub mod stage;
pub mod ui_panel;
pub mod visible;

pub use classifiable::{Category, Classifiable, Classification};
pub use hand::Handedness;
pub use hmd::HMD;
pub use info::Info;
pub use local_transform::LocalTransform;
pub use physics::Collider;
pub use pointer::Pointer;
pub use reticle::Reticle;
pub use stage::Stage;
pub use ui_panel::{UIPanel, UIPanelButton};
pub use visible::Visible;
