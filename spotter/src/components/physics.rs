use std::fmt::Debug;

use rapier3d::prelude::ColliderHandle;

/// A component that links an entity to its collider in the physics world -
/// essentially a thin wrapper around [`rapier3d::prelude::ColliderHandle`].
///
/// Create one through
/// [`crate::contexts::PhysicsContext::add_collider`] so the collider's
/// `user_data` points back at the entity; the targeting ray relies on that
/// back-pointer to resolve what it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    /// The collider's handle into the physics world
    pub handle: ColliderHandle,
}
