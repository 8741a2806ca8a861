#![deny(missing_docs)]

//! Spotter is a small library for building standalone VR target-identification
//! trainers. It owns the per-frame "glue" between an OpenXR runtime and a game
//! simulation: sampling controller state, moving the player rig, resolving what
//! the dominant hand is aimed at, and committing classification calls with
//! haptic confirmation.
//!
//! The core loop is engine-free: [`Engine::tick`] consumes a plain
//! [`contexts::input_context::ControllerFrame`] value and mutates the world and
//! contexts, so every system can be driven deterministically in tests. The
//! OpenXR side lives in [`contexts::xr_context`], which turns a running session
//! into `ControllerFrame`s and plays back queued haptic pulses.

pub use glam;
pub use hecs;
pub use openxr as xr;
pub use rapier3d;

pub use config::Config;
pub use engine::Engine;
pub use spotter_error::SpotterError;

/// Components are data attached to entities in the simulation
pub mod components;
mod config;
/// Contexts wrap state shared by the systems each frame
pub mod contexts;
mod engine;
mod spotter_error;
/// Systems are functions called each frame to advance the simulation
pub mod systems;
/// Kitchen sink utility functions
pub mod util;

/// Spotter result type
pub type SpotterResult<T> = std::result::Result<T, SpotterError>;
