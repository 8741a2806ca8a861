//! The OpenXR side of the house: action-set plumbing, per-frame sampling into
//! a [`ControllerFrame`], and haptic playback.
//!
//! Everything here is generic over the session's graphics binding; the host
//! owns the instance, session and frame loop. Device failures degrade to
//! absent input rather than errors, so a session with no controllers simply
//! produces empty frames.

use glam::Vec2;
use openxr::{self as xr, Action, ActionSet, Haptic, Posef, Space};

use crate::{
    components::hand::Handedness,
    contexts::{
        haptic_context::HapticContext,
        input_context::{ControllerFrame, HandSample},
    },
    util::{affine_from_posef, is_space_valid},
    SpotterResult,
};

static HAPTIC_FREQUENCY: f32 = 400.;

/// The actions, spaces and subaction paths for a pair of touch controllers.
pub struct XrInput {
    pub action_set: ActionSet,
    pub primary_button_action: Action<bool>,
    pub secondary_button_action: Action<bool>,
    pub trigger_action: Action<f32>,
    pub thumbstick_x_action: Action<f32>,
    pub thumbstick_y_action: Action<f32>,
    pub grip_pose_action: Action<Posef>,
    pub aim_pose_action: Action<Posef>,
    pub haptic_feedback_action: Action<Haptic>,
    pub left_hand_grip_space: Space,
    pub left_hand_aim_space: Space,
    pub left_hand_subaction_path: xr::Path,
    pub right_hand_grip_space: Space,
    pub right_hand_aim_space: Space,
    pub right_hand_subaction_path: xr::Path,
}

impl XrInput {
    /// Create and attach the action set for the Oculus Touch interaction
    /// profile. The "primary" button maps to X on the left hand and A on the
    /// right; "secondary" maps to Y and B.
    pub fn oculus_touch_controller<G: xr::Graphics>(
        instance: &xr::Instance,
        session: &xr::Session<G>,
    ) -> SpotterResult<Self> {
        let action_set = instance.create_action_set("input", "input pose information", 0)?;

        let left_hand_subaction_path = instance.string_to_path("/user/hand/left")?;
        let right_hand_subaction_path = instance.string_to_path("/user/hand/right")?;
        let both_hands = [left_hand_subaction_path, right_hand_subaction_path];

        let primary_button_action =
            action_set.create_action::<bool>("primary_button", "Primary Button", &both_hands)?;
        let secondary_button_action = action_set.create_action::<bool>(
            "secondary_button",
            "Secondary Button",
            &both_hands,
        )?;
        let trigger_action =
            action_set.create_action::<f32>("trigger", "Trigger Pull", &both_hands)?;
        let thumbstick_x_action =
            action_set.create_action::<f32>("thumbstick_x", "Thumbstick X", &both_hands)?;
        let thumbstick_y_action =
            action_set.create_action::<f32>("thumbstick_y", "Thumbstick Y", &both_hands)?;
        let grip_pose_action =
            action_set.create_action::<Posef>("hand_pose", "Hand Pose", &both_hands)?;
        let aim_pose_action =
            action_set.create_action::<Posef>("pointer_pose", "Pointer Pose", &both_hands)?;
        let haptic_feedback_action =
            action_set.create_action::<Haptic>("haptic_feedback", "Haptic Feedback", &both_hands)?;

        // Bind our actions to input devices using the given profile
        instance.suggest_interaction_profile_bindings(
            instance.string_to_path("/interaction_profiles/oculus/touch_controller")?,
            &[
                xr::Binding::new(
                    &primary_button_action,
                    instance.string_to_path("/user/hand/left/input/x/click")?,
                ),
                xr::Binding::new(
                    &primary_button_action,
                    instance.string_to_path("/user/hand/right/input/a/click")?,
                ),
                xr::Binding::new(
                    &secondary_button_action,
                    instance.string_to_path("/user/hand/left/input/y/click")?,
                ),
                xr::Binding::new(
                    &secondary_button_action,
                    instance.string_to_path("/user/hand/right/input/b/click")?,
                ),
                xr::Binding::new(
                    &trigger_action,
                    instance.string_to_path("/user/hand/left/input/trigger/value")?,
                ),
                xr::Binding::new(
                    &trigger_action,
                    instance.string_to_path("/user/hand/right/input/trigger/value")?,
                ),
                xr::Binding::new(
                    &thumbstick_x_action,
                    instance.string_to_path("/user/hand/left/input/thumbstick/x")?,
                ),
                xr::Binding::new(
                    &thumbstick_x_action,
                    instance.string_to_path("/user/hand/right/input/thumbstick/x")?,
                ),
                xr::Binding::new(
                    &thumbstick_y_action,
                    instance.string_to_path("/user/hand/left/input/thumbstick/y")?,
                ),
                xr::Binding::new(
                    &thumbstick_y_action,
                    instance.string_to_path("/user/hand/right/input/thumbstick/y")?,
                ),
                xr::Binding::new(
                    &grip_pose_action,
                    instance.string_to_path("/user/hand/left/input/grip/pose")?,
                ),
                xr::Binding::new(
                    &grip_pose_action,
                    instance.string_to_path("/user/hand/right/input/grip/pose")?,
                ),
                xr::Binding::new(
                    &aim_pose_action,
                    instance.string_to_path("/user/hand/left/input/aim/pose")?,
                ),
                xr::Binding::new(
                    &aim_pose_action,
                    instance.string_to_path("/user/hand/right/input/aim/pose")?,
                ),
                xr::Binding::new(
                    &haptic_feedback_action,
                    instance.string_to_path("/user/hand/left/output/haptic")?,
                ),
                xr::Binding::new(
                    &haptic_feedback_action,
                    instance.string_to_path("/user/hand/right/output/haptic")?,
                ),
            ],
        )?;

        let left_hand_grip_space = grip_pose_action.create_space(
            session.clone(),
            left_hand_subaction_path,
            Posef::IDENTITY,
        )?;
        let left_hand_aim_space = aim_pose_action.create_space(
            session.clone(),
            left_hand_subaction_path,
            Posef::IDENTITY,
        )?;
        let right_hand_grip_space = grip_pose_action.create_space(
            session.clone(),
            right_hand_subaction_path,
            Posef::IDENTITY,
        )?;
        let right_hand_aim_space = aim_pose_action.create_space(
            session.clone(),
            right_hand_subaction_path,
            Posef::IDENTITY,
        )?;

        session.attach_action_sets(&[&action_set])?;

        Ok(XrInput {
            action_set,
            primary_button_action,
            secondary_button_action,
            trigger_action,
            thumbstick_x_action,
            thumbstick_y_action,
            grip_pose_action,
            aim_pose_action,
            haptic_feedback_action,
            left_hand_grip_space,
            left_hand_aim_space,
            left_hand_subaction_path,
            right_hand_grip_space,
            right_hand_aim_space,
            right_hand_subaction_path,
        })
    }

    fn subaction_path(&self, handedness: Handedness) -> xr::Path {
        match handedness {
            Handedness::Left => self.left_hand_subaction_path,
            Handedness::Right => self.right_hand_subaction_path,
        }
    }
}

/// Sample both controllers and the headset into a [`ControllerFrame`].
///
/// `stage_space` is the reference space the simulation runs in and
/// `view_space` a `VIEW` reference space for the headset pose. Any device that
/// fails to report comes back as `None`.
pub fn sample_frame<G: xr::Graphics>(
    session: &xr::Session<G>,
    input: &XrInput,
    stage_space: &Space,
    view_space: &Space,
    time: xr::Time,
) -> ControllerFrame {
    let active_action_set = xr::ActiveActionSet::new(&input.action_set);
    if session.sync_actions(&[active_action_set]).is_err() {
        return ControllerFrame::default();
    }

    let stage_from_hmd = view_space
        .locate(stage_space, time)
        .ok()
        .filter(is_space_valid)
        .map(|location| affine_from_posef(location.pose));

    ControllerFrame {
        left: sample_hand(session, input, Handedness::Left, stage_space, time),
        right: sample_hand(session, input, Handedness::Right, stage_space, time),
        stage_from_hmd,
    }
}

fn sample_hand<G: xr::Graphics>(
    session: &xr::Session<G>,
    input: &XrInput,
    handedness: Handedness,
    stage_space: &Space,
    time: xr::Time,
) -> Option<HandSample> {
    let subaction_path = input.subaction_path(handedness);
    let (grip_space, aim_space) = match handedness {
        Handedness::Left => (&input.left_hand_grip_space, &input.left_hand_aim_space),
        Handedness::Right => (&input.right_hand_grip_space, &input.right_hand_aim_space),
    };

    let primary_button = xr::ActionInput::get(&input.primary_button_action, session, subaction_path)
        .ok()?
        .current_state;
    let secondary_button =
        xr::ActionInput::get(&input.secondary_button_action, session, subaction_path)
            .ok()?
            .current_state;
    let trigger_analog = xr::ActionInput::get(&input.trigger_action, session, subaction_path)
        .ok()?
        .current_state;
    let thumbstick_x = xr::ActionInput::get(&input.thumbstick_x_action, session, subaction_path)
        .ok()?
        .current_state;
    let thumbstick_y = xr::ActionInput::get(&input.thumbstick_y_action, session, subaction_path)
        .ok()?
        .current_state;

    let grip = grip_space.locate(stage_space, time).ok()?;
    let aim = aim_space.locate(stage_space, time).ok()?;
    if !is_space_valid(&grip) || !is_space_valid(&aim) {
        return None;
    }

    Some(HandSample {
        primary_button,
        secondary_button,
        trigger_analog,
        thumbstick_xy: Vec2::new(thumbstick_x, thumbstick_y),
        stage_from_grip: affine_from_posef(grip.pose),
        stage_from_aim: affine_from_posef(aim.pose),
    })
}

/// Play back the pulses queued in the [`HapticContext`] as one-shot
/// vibrations. Each vibration is bounded by its own duration; a hand whose
/// device is gone silently swallows its pulse.
pub fn apply_haptic_feedback<G: xr::Graphics>(
    session: &xr::Session<G>,
    input: &XrInput,
    haptic_context: &mut HapticContext,
) {
    for handedness in [Handedness::Left, Handedness::Right] {
        if let Some(pulse) = haptic_context.take(handedness) {
            let event = xr::HapticVibration::new()
                .amplitude(pulse.amplitude)
                .frequency(HAPTIC_FREQUENCY)
                .duration(xr::Duration::from_nanos((pulse.duration * 1e9) as i64));

            let _ = input.haptic_feedback_action.apply_feedback(
                session,
                input.subaction_path(handedness),
                &event,
            );
        }
    }
}
