use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The entity's position in the game simulation.
///
/// Stage, HMD, pointer and reticle entities all carry one. The stage has no
/// parent, so its `LocalTransform` *is* its global transform; HMD and
/// controller poses are stored relative to the stage and composed with it
/// where a global pose is needed.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Convenience function to convert the `LocalTransform` into a [`glam::Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the translation and rotation from a [`glam::Affine3A`]
    pub fn update_from_affine(&mut self, transform: &Affine3A) {
        let (_, rotation, translation) = transform.to_scale_rotation_translation();
        self.translation = translation;
        self.rotation = rotation;
    }
}
