use serde::{Deserialize, Serialize};

use crate::components::hand::Handedness;

/// A single haptic impulse: amplitude in `[0, 1]`, duration in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HapticPulse {
    pub amplitude: f32,
    pub duration: f32,
}

/// Wrapper around XR haptics.
///
/// Systems queue at most one pulse per hand per frame; when two pulses are
/// requested for the same hand the stronger amplitude wins. The pending pulse
/// is drained by [`super::xr_context::apply_haptic_feedback`] (or inspected
/// directly by non-XR hosts and tests).
#[derive(Clone, Debug, Default)]
pub struct HapticContext {
    left_pulse_this_frame: Option<HapticPulse>,
    right_pulse_this_frame: Option<HapticPulse>,
}

impl HapticContext {
    /// Request a pulse be applied to the given hand this frame
    pub fn request_haptic_feedback(&mut self, pulse: HapticPulse, handedness: Handedness) {
        let pending = match handedness {
            Handedness::Left => &mut self.left_pulse_this_frame,
            Handedness::Right => &mut self.right_pulse_this_frame,
        };
        match pending {
            Some(existing) if existing.amplitude >= pulse.amplitude => {}
            _ => *pending = Some(pulse),
        }
    }

    /// Take the pending pulse for the given hand, leaving nothing queued
    pub fn take(&mut self, handedness: Handedness) -> Option<HapticPulse> {
        match handedness {
            Handedness::Left => self.left_pulse_this_frame.take(),
            Handedness::Right => self.right_pulse_this_frame.take(),
        }
    }

    /// Peek at the pending pulse for the given hand
    pub fn pending(&self, handedness: Handedness) -> Option<HapticPulse> {
        match handedness {
            Handedness::Left => self.left_pulse_this_frame,
            Handedness::Right => self.right_pulse_this_frame,
        }
    }
}
