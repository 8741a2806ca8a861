//! Resolves what the player is aiming at.
//!
//! One raycast per frame from the pointer serves both concerns that depend on
//! it: the acquisition state machine on the [`Pointer`] and the reticle's
//! color and position. The tracked target changes exactly when the hit
//! object's identity changes, and the `classified` latch resets on every such
//! change.

use glam::Vec3;
use hecs::{Entity, World};
use rapier3d::prelude::{InteractionGroups, QueryFilter, Ray};

use crate::{
    components::{stage::get_global_from_stage, Category, Classifiable, LocalTransform, Pointer, Reticle},
    config::Config,
    contexts::{physics_context::TARGET_COLLISION_GROUP, PhysicsContext},
    util::{na_point_from_glam, na_vector_from_glam},
};

/// Cast the aim ray and update the pointer's tracked target and the reticle.
pub fn targeting_system(world: &mut World, physics_context: &PhysicsContext, config: &Config) {
    let global_from_stage = get_global_from_stage(world);

    // Pose the ray from the pointer, then drop the query borrow before
    // touching any other component.
    let mut aim = None;
    for (entity, local_transform) in world.query_mut::<hecs::With<&LocalTransform, &Pointer>>() {
        let global_from_pointer = global_from_stage * local_transform.to_affine();
        let origin = Vec3::from(global_from_pointer.translation);
        let direction = global_from_pointer
            .transform_vector3(Vec3::NEG_Z)
            .normalize_or_zero();
        aim = Some((entity, origin, direction));
    }
    let Some((pointer_entity, origin, direction)) = aim else {
        return;
    };

    let hit = cast_aim_ray(physics_context, origin, direction, config.crosshair_distance);

    // The hit only counts as a target if the struck entity is classifiable.
    let hit_category =
        hit.and_then(|(entity, _)| world.get::<&Classifiable>(entity).ok().map(|c| c.category));
    let new_target = match (hit, hit_category) {
        (Some((entity, _)), Some(_)) => Some(entity),
        _ => None,
    };

    update_tracking(world, pointer_entity, new_target);
    update_reticle(world, origin, direction, hit, hit_category, config);
}

/// Nearest strike of the aim ray against targetable geometry, as the struck
/// entity and the hit point.
fn cast_aim_ray(
    physics_context: &PhysicsContext,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<(Entity, Vec3)> {
    let ray = Ray::new(na_point_from_glam(origin), na_vector_from_glam(direction));
    let filter = QueryFilter::new().groups(InteractionGroups::new(
        TARGET_COLLISION_GROUP.into(),
        TARGET_COLLISION_GROUP.into(),
    ));
    let (handle, toi) = physics_context.query_pipeline.cast_ray(
        &physics_context.rigid_bodies,
        &physics_context.colliders,
        &ray,
        max_distance,
        true,
        filter,
    )?;
    let entity = physics_context.entity_for_collider(handle)?;
    Some((entity, origin + direction * toi))
}

fn update_tracking(world: &mut World, pointer_entity: Entity, new_target: Option<Entity>) {
    let previous_target = match world.get::<&Pointer>(pointer_entity) {
        Ok(pointer) => pointer.current_target,
        Err(_) => return,
    };
    if new_target == previous_target {
        return;
    }

    if let Ok(mut pointer) = world.get::<&mut Pointer>(pointer_entity) {
        pointer.current_target = new_target;
        pointer.classified = false;
    }

    // Freshly acquired targets get notified exactly once per acquisition.
    if let Some(target) = new_target {
        if let Ok(mut classifiable) = world.get::<&mut Classifiable>(target) {
            classifiable.on_targeted();
        }
    }
}

fn update_reticle(
    world: &mut World,
    origin: Vec3,
    direction: Vec3,
    hit: Option<(Entity, Vec3)>,
    hit_category: Option<Category>,
    config: &Config,
) {
    let colors = &config.reticle_colors;
    let color = match hit_category {
        Some(Category::Hostile) => colors.hostile,
        Some(Category::Friendly) => colors.friendly,
        Some(Category::Unknown) => colors.unknown,
        None => colors.default,
    };
    let position = match hit {
        Some((_, point)) => point,
        None => origin + direction * config.crosshair_distance,
    };

    for (_, (reticle, local_transform)) in
        world.query_mut::<(&mut Reticle, &mut LocalTransform)>()
    {
        reticle.color = color;
        local_transform.translation = position;
    }
}
