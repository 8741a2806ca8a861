use glam::Affine3A;
use hecs::{Entity, World};
use rapier3d::prelude::Collider as RapierCollider;

use crate::{
    components::{
        Category, Classifiable, Info, LocalTransform, Pointer, Reticle, Stage, UIPanel,
        UIPanelButton, Visible, HMD,
    },
    config::Config,
    contexts::{
        input_context::ControllerFrame, HapticContext, InputContext, PhysicsContext,
        ScenarioContext,
    },
    systems::{classification_system, locomotion_system, scenario_system, targeting_system},
};

/// The heart of a session.
///
/// Owns the world and the contexts, and runs the per-frame systems in a fixed
/// order: fold in input, pose the rig's tracked entities, apply UI commands,
/// step physics, move, resolve the aim, and finally dispatch any
/// classification. The host calls [`Engine::tick`] once per rendered frame
/// with the controller state it sampled, then plays back whatever is pending
/// in [`Engine::haptic_context`].
pub struct Engine {
    /// The game simulation
    pub world: World,
    /// Edge-detected controller state
    pub input_context: InputContext,
    /// Scene colliders and the query pipeline
    pub physics_context: PhysicsContext,
    /// Pulses queued for playback this frame
    pub haptic_context: HapticContext,
    /// Session state and score
    pub scenario_context: ScenarioContext,
    /// Session tuning values
    pub config: Config,
    /// The player's frame of reference
    pub stage_entity: Entity,
    /// Tracks the headset pose in stage space
    pub hmd_entity: Entity,
    /// Tracks the dominant controller's aim pose in stage space
    pub pointer_entity: Entity,
    /// The aiming reticle
    pub reticle_entity: Entity,
    /// The scenario control panel
    pub control_panel: Entity,
}

impl Engine {
    /// Create an engine and spawn the player rig.
    pub fn new(config: Config) -> Self {
        let mut world = World::new();

        let stage_entity = world.spawn((Stage, LocalTransform::default()));
        let hmd_entity = world.spawn((HMD {}, LocalTransform::default()));
        let pointer_entity = world.spawn((
            Pointer::new(config.dominant_hand),
            LocalTransform::default(),
        ));
        let reticle_entity = world.spawn((
            Reticle {
                color: config.reticle_colors.default,
            },
            LocalTransform::default(),
            Visible {},
        ));
        let control_panel = world.spawn((
            UIPanel {
                text: String::new(),
                buttons: vec![
                    UIPanelButton::new("Start"),
                    UIPanelButton::new("Pause"),
                    UIPanelButton::new("Resume"),
                    UIPanelButton::new("Stop"),
                ],
            },
            Visible {},
        ));

        Engine {
            world,
            input_context: InputContext::default(),
            physics_context: PhysicsContext::default(),
            haptic_context: HapticContext::default(),
            scenario_context: ScenarioContext::default(),
            config,
            stage_entity,
            hmd_entity,
            pointer_entity,
            reticle_entity,
            control_panel,
        }
    }

    /// Spawn a classifiable object with the given true category and collider.
    /// The collider should be in the targeting collision group.
    pub fn add_target(
        &mut self,
        name: &str,
        category: Category,
        collider: RapierCollider,
    ) -> Entity {
        let entity = self.world.spawn((
            Classifiable::new(category),
            Info {
                name: name.to_string(),
            },
            Visible {},
        ));
        let component = self.physics_context.add_collider(entity, collider);
        // Unwrap is fine, the entity was spawned two lines up.
        self.world.insert_one(entity, component).unwrap();
        entity
    }

    /// Advance the session by one frame.
    pub fn tick(&mut self, dt: f32, frame: &ControllerFrame) {
        self.input_context.update(frame);
        self.update_rig(frame);

        scenario_system(
            &mut self.world,
            &self.input_context,
            &mut self.scenario_context,
            &self.config,
        );

        self.physics_context.update();

        locomotion_system(
            &mut self.world,
            &self.input_context,
            &self.physics_context,
            &self.config,
            dt,
        );
        targeting_system(&mut self.world, &self.physics_context, &self.config);
        classification_system(
            &mut self.world,
            &self.input_context,
            &mut self.haptic_context,
            &mut self.scenario_context,
            &self.config,
        );
    }

    /// Copy this frame's tracked poses onto the HMD and pointer entities.
    /// Absent devices leave the previous pose in place.
    fn update_rig(&mut self, frame: &ControllerFrame) {
        if let Some(stage_from_hmd) = frame.stage_from_hmd {
            if let Ok(mut local_transform) = self.world.get::<&mut LocalTransform>(self.hmd_entity)
            {
                local_transform.update_from_affine(&stage_from_hmd);
            }
        }

        let stage_from_aim: Affine3A = self
            .input_context
            .hand(self.config.dominant_hand)
            .stage_from_aim();
        if let Ok(mut local_transform) =
            self.world.get::<&mut LocalTransform>(self.pointer_entity)
        {
            local_transform.update_from_affine(&stage_from_aim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Vec2, Vec3};
    use rapier3d::na::{self as nalgebra, vector};
    use rapier3d::prelude::{ColliderBuilder, InteractionGroups};

    use crate::{
        components::hand::Handedness,
        contexts::{
            input_context::HandSample,
            physics_context::TARGET_COLLISION_GROUP,
            scenario_context::ScenarioState,
        },
    };

    fn aim_frame(trigger_analog: f32) -> ControllerFrame {
        ControllerFrame {
            right: Some(HandSample {
                trigger_analog,
                stage_from_aim: Affine3A::from_translation(Vec3::new(0., 1.6, 0.)),
                ..Default::default()
            }),
            left: Some(HandSample::default()),
            stage_from_hmd: Some(Affine3A::from_translation(Vec3::new(0., 1.6, 0.))),
        }
    }

    fn target_collider(z: f32) -> rapier3d::prelude::Collider {
        ColliderBuilder::cuboid(0.5, 0.5, 0.5)
            .translation(vector![0.0, 1.6, z])
            .collision_groups(InteractionGroups::new(
                TARGET_COLLISION_GROUP.into(),
                TARGET_COLLISION_GROUP.into(),
            ))
            .build()
    }

    #[test]
    pub fn test_full_classification_flow() {
        let mut engine = Engine::new(Config::default());
        let target = engine.add_target("contact", Category::Hostile, target_collider(-5.0));
        engine.scenario_context.start();

        // Frame one: aim lands on the target, no trigger yet.
        engine.tick(1. / 72., &aim_frame(0.0));
        let pointer = *engine.world.get::<&Pointer>(engine.pointer_entity).unwrap();
        assert_eq!(pointer.current_target, Some(target));
        assert!(!pointer.classified);

        let reticle = *engine.world.get::<&Reticle>(engine.reticle_entity).unwrap();
        assert_eq!(reticle.color, engine.config.reticle_colors.hostile);

        // Frame two: trigger edge commits the call.
        engine.tick(1. / 72., &aim_frame(1.0));
        let pointer = *engine.world.get::<&Pointer>(engine.pointer_entity).unwrap();
        assert!(pointer.classified);
        assert_eq!(engine.scenario_context.correct, 1);
        assert_eq!(
            engine.haptic_context.pending(Handedness::Right),
            Some(engine.config.correct_pulse)
        );

        // Frame three: trigger still held, nothing further happens.
        engine.haptic_context.take(Handedness::Right);
        engine.tick(1. / 72., &aim_frame(1.0));
        assert_eq!(engine.scenario_context.correct, 1);
        assert_eq!(engine.haptic_context.pending(Handedness::Right), None);
    }

    #[test]
    pub fn test_misclassifying_a_friendly() {
        let mut engine = Engine::new(Config::default());
        engine.add_target("civilian", Category::Friendly, target_collider(-3.0));
        engine.scenario_context.start();

        engine.tick(1. / 72., &aim_frame(0.0));
        engine.tick(1. / 72., &aim_frame(1.0));

        assert_eq!(engine.scenario_context.incorrect, 1);
        assert_eq!(
            engine.haptic_context.pending(Handedness::Right),
            Some(engine.config.incorrect_pulse)
        );
        let reticle = *engine.world.get::<&Reticle>(engine.reticle_entity).unwrap();
        assert_eq!(reticle.color, engine.config.reticle_colors.friendly);
    }

    #[test]
    pub fn test_locomotion_moves_the_stage() {
        let mut engine = Engine::new(Config::default());

        let mut frame = aim_frame(0.0);
        frame.left = Some(HandSample {
            thumbstick_xy: Vec2::new(0., 1.),
            ..Default::default()
        });
        engine.tick(0.5, &frame);

        let stage = *engine
            .world
            .get::<&LocalTransform>(engine.stage_entity)
            .unwrap();
        assert_relative_eq!(
            stage.translation.z,
            -engine.config.movement_speed * 0.5,
            epsilon = 1e-4
        );
    }

    #[test]
    pub fn test_empty_frames_are_harmless() {
        let mut engine = Engine::new(Config::default());
        engine.add_target("contact", Category::Hostile, target_collider(-5.0));

        for _ in 0..3 {
            engine.tick(1. / 72., &ControllerFrame::default());
        }

        assert_eq!(engine.scenario_context.state, ScenarioState::Idle);
        assert_eq!(
            (engine.scenario_context.correct, engine.scenario_context.incorrect),
            (0, 0)
        );
        let stage = *engine
            .world
            .get::<&LocalTransform>(engine.stage_entity)
            .unwrap();
        assert_eq!(stage.translation, Vec3::ZERO);
    }
}
