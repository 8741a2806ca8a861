use serde::{Deserialize, Serialize};

use crate::{components::hand::Handedness, contexts::haptic_context::HapticPulse};

/// Session tuning values. Supplied by the host once at startup and read-only
/// afterwards; everything has a sensible default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Planar movement speed in metres per second
    pub movement_speed: f32,
    /// Select the faster of the two turn rates
    pub fast_turn: bool,
    /// Turn rate in radians per second when `fast_turn` is set
    pub fast_turn_rate: f32,
    /// Turn rate in radians per second when `fast_turn` is not set
    pub slow_turn_rate: f32,
    /// How close the player rig may get to scene geometry, in metres
    pub player_radius: f32,
    /// Maximum targeting range, and the reticle's resting distance, in metres
    pub crosshair_distance: f32,
    /// Which hand carries the pointer
    pub dominant_hand: Handedness,
    /// Pulse played on a correct classification
    pub correct_pulse: HapticPulse,
    /// Pulse played on an incorrect classification
    pub incorrect_pulse: HapticPulse,
    /// Reticle color per target category
    pub reticle_colors: ReticleColors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            movement_speed: 2.0,
            fast_turn: false,
            fast_turn_rate: 120_f32.to_radians(),
            slow_turn_rate: 45_f32.to_radians(),
            player_radius: 0.2,
            crosshair_distance: 10.0,
            dominant_hand: Handedness::Right,
            correct_pulse: HapticPulse {
                amplitude: 0.3,
                duration: 0.1,
            },
            incorrect_pulse: HapticPulse {
                amplitude: 0.8,
                duration: 0.4,
            },
            reticle_colors: Default::default(),
        }
    }
}

/// RGBA reticle colors, one per [`crate::components::Category`] plus the
/// color used when nothing classifiable is under the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReticleColors {
    /// Shown while aiming at a hostile target
    pub hostile: [f32; 4],
    /// Shown while aiming at a friendly target
    pub friendly: [f32; 4],
    /// Shown while aiming at an unknown target
    pub unknown: [f32; 4],
    /// Shown on a miss or a non-classifiable surface
    pub default: [f32; 4],
}

impl Default for ReticleColors {
    fn default() -> Self {
        Self {
            hostile: [1.0, 0.0, 0.0, 1.0],
            friendly: [0.0, 1.0, 0.0, 1.0],
            unknown: [1.0, 1.0, 0.0, 1.0],
            default: [0.8, 0.8, 0.8, 1.0],
        }
    }
}
