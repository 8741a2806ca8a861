#![allow(missing_docs)]

pub mod classification;
pub mod locomotion;
pub mod scenario;
pub mod targeting;

pub use classification::classification_system;
pub use locomotion::locomotion_system;
pub use scenario::scenario_system;
pub use targeting::targeting_system;
