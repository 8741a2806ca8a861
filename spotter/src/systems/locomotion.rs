//! Smooth locomotion for the player rig.
//!
//! The off hand's thumbstick translates the stage on the ground plane,
//! relative to the way the headset is facing. The dominant hand's thumbstick
//! yaws the stage about the vertical axis. Translation is swept against scene
//! geometry so the player cannot walk through walls.

use glam::{Quat, Vec3};
use hecs::{With, World};
use rapier3d::prelude::{InteractionGroups, QueryFilter, Ray};

use crate::{
    components::{LocalTransform, Stage, HMD},
    config::Config,
    contexts::{
        physics_context::DEFAULT_COLLISION_GROUP, InputContext, PhysicsContext,
    },
    util::{na_point_from_glam, na_vector_from_glam},
};

/// Thumbstick deflection below this produces no turning.
pub const TURN_DEAD_ZONE: f32 = 0.1;

/// Move and turn the stage from this frame's thumbstick state.
pub fn locomotion_system(
    world: &mut World,
    input_context: &InputContext,
    physics_context: &PhysicsContext,
    config: &Config,
    dt: f32,
) {
    let move_axis = input_context
        .other_hand(config.dominant_hand)
        .thumbstick_xy();
    let turn_axis = input_context.hand(config.dominant_hand).thumbstick_xy().x;

    // Copy the head pose out first; hecs will not give us the HMD and the
    // stage mutably at the same time.
    let mut stage_from_hmd = LocalTransform::default();
    for (_, local_transform) in world.query_mut::<With<&LocalTransform, &HMD>>() {
        stage_from_hmd = *local_transform;
    }

    for (_, stage_transform) in world.query_mut::<With<&mut LocalTransform, &Stage>>() {
        // Movement is relative to where the player is looking, flattened onto
        // the ground plane.
        let head_rotation = stage_transform.rotation * stage_from_hmd.rotation;
        let forward = flatten(head_rotation * Vec3::NEG_Z);
        let right = flatten(head_rotation * Vec3::X);

        let displacement =
            (right * move_axis.x + forward * move_axis.y) * config.movement_speed * dt;
        let distance = displacement.length();
        if distance > 0. {
            let direction = displacement / distance;
            let origin = stage_transform.to_affine().transform_point3(stage_from_hmd.translation);
            let allowed = clamp_displacement(
                physics_context,
                origin,
                direction,
                distance,
                config.player_radius,
            );
            stage_transform.translation += direction * allowed;
        }

        if turn_axis.abs() >= TURN_DEAD_ZONE {
            let rate = if config.fast_turn {
                config.fast_turn_rate
            } else {
                config.slow_turn_rate
            };
            stage_transform.rotation =
                Quat::from_rotation_y(turn_axis * rate * dt) * stage_transform.rotation;
        }
    }
}

/// Sweep the requested displacement against scene geometry and return how far
/// the player may actually travel, keeping `radius` clear of whatever the
/// sweep strikes.
fn clamp_displacement(
    physics_context: &PhysicsContext,
    origin: Vec3,
    direction: Vec3,
    distance: f32,
    radius: f32,
) -> f32 {
    let ray = Ray::new(na_point_from_glam(origin), na_vector_from_glam(direction));
    let filter = QueryFilter::new().groups(InteractionGroups::new(
        DEFAULT_COLLISION_GROUP.into(),
        DEFAULT_COLLISION_GROUP.into(),
    ));
    match physics_context.query_pipeline.cast_ray(
        &physics_context.rigid_bodies,
        &physics_context.colliders,
        &ray,
        distance + radius,
        true,
        filter,
    ) {
        Some((_, toi)) => (toi - radius).max(0.).min(distance),
        None => distance,
    }
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0., v.z).normalize_or_zero()
}
