//! Commits a classification call on a trigger-press edge.
//!
//! A call happens at most once per acquisition: the [`Pointer`]'s `classified`
//! latch is set here and only cleared by the targeting system when the tracked
//! target changes. The player gets a short soft pulse when the call was right
//! and a longer, harder one when it was wrong.

use hecs::{Entity, World};

use crate::{
    components::{hand::Handedness, Category, Classifiable, Pointer},
    config::Config,
    contexts::{HapticContext, InputContext, ScenarioContext},
};

// TODO: bind the secondary button as a "friendly" call so the player actually
// makes a decision, instead of every trigger pull asserting hostile.
const ASSERTED_CATEGORY: Category = Category::Hostile;

/// Dispatch a classification for the current target on a fresh trigger pull.
pub fn classification_system(
    world: &mut World,
    input_context: &InputContext,
    haptic_context: &mut HapticContext,
    scenario_context: &mut ScenarioContext,
    config: &Config,
) {
    // Latch the pointer first, then notify the target once the query borrow
    // is gone.
    let mut dispatch: Option<(Entity, Handedness)> = None;
    for (_, pointer) in world.query_mut::<&mut Pointer>() {
        let hand = input_context.hand(pointer.handedness);
        pointer.trigger_value = hand.trigger_analog();

        if !hand.trigger_just_pressed() {
            continue;
        }
        let Some(target) = pointer.current_target else {
            continue;
        };
        if pointer.classified {
            continue;
        }
        pointer.classified = true;
        dispatch = Some((target, pointer.handedness));
    }

    let Some((target, handedness)) = dispatch else {
        return;
    };
    let Ok(mut classifiable) = world.get::<&mut Classifiable>(target) else {
        return;
    };

    let correct = classifiable.on_classified(ASSERTED_CATEGORY);
    let pulse = if correct {
        config.correct_pulse
    } else {
        config.incorrect_pulse
    };
    haptic_context.request_haptic_feedback(pulse, handedness);
    scenario_context.record_outcome(correct);
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::contexts::input_context::{ControllerFrame, HandSample};

    struct Rig {
        world: World,
        input_context: InputContext,
        haptic_context: HapticContext,
        scenario_context: ScenarioContext,
        config: Config,
        pointer_entity: Entity,
        target: Entity,
    }

    fn test_rig(category: Category) -> Rig {
        let mut world = World::new();
        let target = world.spawn((Classifiable::new(category),));
        let mut pointer = Pointer::new(Handedness::Right);
        pointer.current_target = Some(target);
        let pointer_entity = world.spawn((pointer,));

        let mut scenario_context = ScenarioContext::default();
        scenario_context.start();

        Rig {
            world,
            input_context: InputContext::default(),
            haptic_context: HapticContext::default(),
            scenario_context,
            config: Config::default(),
            pointer_entity,
            target,
        }
    }

    fn pull_trigger(rig: &mut Rig, trigger_analog: f32) {
        rig.input_context.update(&ControllerFrame {
            right: Some(HandSample {
                trigger_analog,
                ..Default::default()
            }),
            ..Default::default()
        });
        classification_system(
            &mut rig.world,
            &rig.input_context,
            &mut rig.haptic_context,
            &mut rig.scenario_context,
            &rig.config,
        );
    }

    #[test]
    pub fn test_correct_call_gets_soft_pulse() {
        let mut rig = test_rig(Category::Hostile);
        pull_trigger(&mut rig, 1.0);

        let classifiable = rig.world.get::<&Classifiable>(rig.target).unwrap();
        assert!(classifiable.classification.unwrap().correct);
        assert_eq!(
            rig.haptic_context.pending(Handedness::Right),
            Some(rig.config.correct_pulse)
        );
        assert_eq!((rig.scenario_context.correct, rig.scenario_context.incorrect), (1, 0));
    }

    #[test]
    pub fn test_incorrect_call_gets_hard_pulse() {
        let mut rig = test_rig(Category::Friendly);
        pull_trigger(&mut rig, 1.0);

        let classifiable = rig.world.get::<&Classifiable>(rig.target).unwrap();
        assert!(!classifiable.classification.unwrap().correct);
        assert_eq!(
            rig.haptic_context.pending(Handedness::Right),
            Some(rig.config.incorrect_pulse)
        );
        assert_eq!((rig.scenario_context.correct, rig.scenario_context.incorrect), (0, 1));
    }

    #[test]
    pub fn test_one_call_per_acquisition() {
        let mut rig = test_rig(Category::Hostile);

        // Press, release, press again without the target changing: only the
        // first edge commits.
        pull_trigger(&mut rig, 1.0);
        rig.haptic_context.take(Handedness::Right);
        pull_trigger(&mut rig, 0.0);
        pull_trigger(&mut rig, 1.0);

        assert_eq!(rig.scenario_context.correct, 1);
        assert_eq!(rig.haptic_context.pending(Handedness::Right), None);

        // A fresh acquisition clears the latch and a new call goes through.
        rig.world
            .get::<&mut Pointer>(rig.pointer_entity)
            .unwrap()
            .classified = false;
        pull_trigger(&mut rig, 0.0);
        pull_trigger(&mut rig, 1.0);
        assert_eq!(rig.scenario_context.correct, 2);
    }

    #[test]
    pub fn test_held_trigger_is_not_an_edge() {
        let mut rig = test_rig(Category::Hostile);
        pull_trigger(&mut rig, 1.0);
        rig.world
            .get::<&mut Pointer>(rig.pointer_entity)
            .unwrap()
            .classified = false;
        // Still held: no new edge, no new call even though the latch is clear.
        pull_trigger(&mut rig, 1.0);
        assert_eq!(rig.scenario_context.correct, 1);
    }

    #[test]
    pub fn test_no_target_is_a_no_op() {
        let mut rig = test_rig(Category::Hostile);
        rig.world
            .get::<&mut Pointer>(rig.pointer_entity)
            .unwrap()
            .current_target = None;
        pull_trigger(&mut rig, 1.0);

        assert_eq!((rig.scenario_context.correct, rig.scenario_context.incorrect), (0, 0));
        assert_eq!(rig.haptic_context.pending(Handedness::Right), None);
        // The latch stays clear for the next acquisition.
        assert!(!rig.world.get::<&Pointer>(rig.pointer_entity).unwrap().classified);
    }
}
