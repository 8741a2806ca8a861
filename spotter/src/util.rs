use glam::{Affine3A, Quat, Vec3};
use openxr::{Posef, SpaceLocation, SpaceLocationFlags};
use rapier3d::na;

#[inline]
/// Convert a `Posef` from OpenXR into an Affine3
pub fn affine_from_posef(pose: Posef) -> Affine3A {
    let translation: Vec3 = mint::Vector3::from(pose.position).into();
    let rotation: Quat = mint::Quaternion::from(pose.orientation).into();

    Affine3A::from_rotation_translation(rotation, translation)
}

#[inline]
/// Convert a [`glam::Affine3A`] into a [`openxr::Posef`]
pub fn posef_from_affine(transform: Affine3A) -> Posef {
    let (_, rotation, translation) = transform.to_scale_rotation_translation();
    Posef {
        orientation: mint::Quaternion::from(rotation).into(),
        position: mint::Vector3::from(translation).into(),
    }
}

#[inline]
/// Convert a [`glam::Vec3`] into a [`rapier3d::na::Vector3`]
pub fn na_vector_from_glam(v: Vec3) -> na::Vector3<f32> {
    [v.x, v.y, v.z].into()
}

#[inline]
/// Convert a [`glam::Vec3`] into a [`rapier3d::na::Point3`]
pub fn na_point_from_glam(v: Vec3) -> na::Point3<f32> {
    na::Point3::new(v.x, v.y, v.z)
}

#[inline]
/// Convert a [`rapier3d::na::Vector3`] into a [`glam::Vec3`]
pub fn glam_vec_from_na(v: &na::Vector3<f32>) -> Vec3 {
    [v.x, v.y, v.z].into()
}

/// Check that a space has valid position and orientation tracking.
pub fn is_space_valid(space: &SpaceLocation) -> bool {
    space
        .location_flags
        .contains(SpaceLocationFlags::POSITION_VALID)
        && space
            .location_flags
            .contains(SpaceLocationFlags::ORIENTATION_VALID)
}
