use glam::{Affine3A, Vec2};

use crate::components::hand::Handedness;

/// The trigger axis is treated as a button once it is pulled to this point or
/// beyond.
pub const TRIGGER_THRESHOLD: f32 = 0.5;

/// A raw per-frame sample of one controller, in stage space.
///
/// The production sampler is [`super::xr_context::sample_frame`]; tests build
/// these by hand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandSample {
    /// Primary button (X on the left hand, A on the right)
    pub primary_button: bool,
    /// Secondary button (Y on the left hand, B on the right)
    pub secondary_button: bool,
    /// Trigger pull in `[0, 1]`
    pub trigger_analog: f32,
    /// Thumbstick deflection, both axes in `[-1, 1]`
    pub thumbstick_xy: Vec2,
    /// Pose of the grip in stage space
    pub stage_from_grip: Affine3A,
    /// Pose of the aim ray in stage space
    pub stage_from_aim: Affine3A,
}

/// Everything the input devices reported this frame. A `None` hand means the
/// device was absent or untracked; the corresponding input state is simply
/// held at its last value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerFrame {
    /// The left controller's sample, if the device was present
    pub left: Option<HandSample>,
    /// The right controller's sample, if the device was present
    pub right: Option<HandSample>,
    /// The headset pose in stage space, if tracked
    pub stage_from_hmd: Option<Affine3A>,
}

/// Input state for a single hand, with edge detection.
///
/// `update` rotates current values into previous ones before applying the new
/// sample, so the `*_just_pressed` accessors fire exactly on a false→true
/// transition and never on sustained input or release.
#[derive(Debug, Default)]
pub struct HandInputContext {
    primary_button: bool,
    primary_button_prev: bool,
    secondary_button: bool,
    secondary_button_prev: bool,
    trigger_button: bool,
    trigger_button_prev: bool,
    trigger_analog: f32,
    thumbstick_xy: Vec2,
    stage_from_grip: Affine3A,
    stage_from_aim: Affine3A,
}

impl HandInputContext {
    pub fn primary_button(&self) -> bool {
        self.primary_button
    }
    pub fn primary_button_just_pressed(&self) -> bool {
        self.primary_button && !self.primary_button_prev
    }
    pub fn primary_button_just_released(&self) -> bool {
        !self.primary_button && self.primary_button_prev
    }
    pub fn secondary_button(&self) -> bool {
        self.secondary_button
    }
    pub fn secondary_button_just_pressed(&self) -> bool {
        self.secondary_button && !self.secondary_button_prev
    }
    pub fn secondary_button_just_released(&self) -> bool {
        !self.secondary_button && self.secondary_button_prev
    }
    pub fn trigger_button(&self) -> bool {
        self.trigger_button
    }
    pub fn trigger_just_pressed(&self) -> bool {
        self.trigger_button && !self.trigger_button_prev
    }
    pub fn trigger_just_released(&self) -> bool {
        !self.trigger_button && self.trigger_button_prev
    }
    pub fn trigger_analog(&self) -> f32 {
        self.trigger_analog
    }
    pub fn thumbstick_xy(&self) -> Vec2 {
        self.thumbstick_xy
    }
    pub fn stage_from_grip(&self) -> Affine3A {
        self.stage_from_grip
    }
    pub fn stage_from_aim(&self) -> Affine3A {
        self.stage_from_aim
    }

    fn update(&mut self, sample: Option<&HandSample>) {
        self.primary_button_prev = self.primary_button;
        self.secondary_button_prev = self.secondary_button;
        self.trigger_button_prev = self.trigger_button;

        // An absent device degrades to "no new input": keep the last values.
        let sample = match sample {
            Some(sample) => sample,
            None => return,
        };

        self.primary_button = sample.primary_button;
        self.secondary_button = sample.secondary_button;
        self.trigger_analog = sample.trigger_analog;
        self.trigger_button = sample.trigger_analog >= TRIGGER_THRESHOLD;
        self.thumbstick_xy = sample.thumbstick_xy;
        self.stage_from_grip = sample.stage_from_grip;
        self.stage_from_aim = sample.stage_from_aim;
    }
}

/// Context that holds input state. Allows systems to query for input events
/// without having to worry about OpenXR internals.
#[derive(Debug, Default)]
pub struct InputContext {
    pub left: HandInputContext,
    pub right: HandInputContext,
}

impl InputContext {
    /// Fold this frame's device samples into the context. Automatically called
    /// by `Engine` each tick.
    pub fn update(&mut self, frame: &ControllerFrame) {
        self.left.update(frame.left.as_ref());
        self.right.update(frame.right.as_ref());
    }

    /// The state for the given hand.
    pub fn hand(&self, handedness: Handedness) -> &HandInputContext {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// The state for the hand opposite the given one.
    pub fn other_hand(&self, handedness: Handedness) -> &HandInputContext {
        match handedness {
            Handedness::Left => &self.right,
            Handedness::Right => &self.left,
        }
    }
}
