use glam::Affine3A;
use hecs::{With, World};

use super::LocalTransform;

/// Marker component for the player's frame of reference. Locomotion moves and
/// turns the entity carrying this component; everything tracked in stage space
/// (HMD, controllers) is positioned relative to it.
#[derive(Debug)]
pub struct Stage;

/// Get the transform of the stage in global space.
pub fn get_global_from_stage(world: &mut World) -> Affine3A {
    world
        .query_mut::<With<&LocalTransform, &Stage>>()
        .into_iter()
        .next()
        .map(|(_, local_transform)| local_transform.to_affine())
        .unwrap_or(Affine3A::IDENTITY)
}
