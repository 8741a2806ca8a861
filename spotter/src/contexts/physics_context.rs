use hecs::Entity;
use rapier3d::prelude::*;

use crate::components::physics::Collider as ColliderComponent;

/// Scene geometry the player can collide with while moving.
pub const DEFAULT_COLLISION_GROUP: u32 = 0b01;
/// Geometry the targeting ray is allowed to strike.
pub const TARGET_COLLISION_GROUP: u32 = 0b10;

/// Wrapper around the physics world. The scene's colliders live here, and the
/// query pipeline answers the locomotion sweep and the targeting raycast.
pub struct PhysicsContext {
    pub physics_pipeline: PhysicsPipeline,
    pub gravity: rapier3d::na::Vector3<f32>,
    pub query_pipeline: QueryPipeline,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhase,
    pub narrow_phase: NarrowPhase,
    pub rigid_bodies: RigidBodySet,
    pub island_manager: IslandManager,
    pub integration_parameters: IntegrationParameters,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for PhysicsContext {
    fn default() -> Self {
        let mut integration_parameters = IntegrationParameters::default();

        // Quest 2 runs at 72fps.
        integration_parameters.dt = 1. / 72.;

        PhysicsContext {
            physics_pipeline: PhysicsPipeline::new(),
            gravity: rapier3d::na::Vector3::zeros(),
            query_pipeline: QueryPipeline::new(),
            colliders: ColliderSet::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_bodies: RigidBodySet::new(),
            island_manager: IslandManager::new(),
            integration_parameters,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }
}

impl PhysicsContext {
    /// Step the simulation and refresh the query pipeline so that raycasts
    /// this frame see the scene's current state.
    pub fn update(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );

        self.query_pipeline
            .update(&self.rigid_bodies, &self.colliders);
    }

    /// Insert a collider for `entity`, stamping its `user_data` with the
    /// entity's bits so a raycast hit can be resolved back to the entity.
    pub fn add_collider(
        &mut self,
        entity: Entity,
        mut collider: rapier3d::geometry::Collider,
    ) -> ColliderComponent {
        collider.user_data = entity.to_bits().get() as _;
        let handle = self.colliders.insert(collider);
        ColliderComponent { handle }
    }

    /// Resolve a collider handle back to the entity it was created for.
    /// Returns `None` for colliders that were not added through
    /// [`Self::add_collider`].
    pub fn entity_for_collider(&self, handle: ColliderHandle) -> Option<Entity> {
        let collider = self.colliders.get(handle)?;
        Entity::from_bits(collider.user_data as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;
    use rapier3d::na::{self as nalgebra, point, vector};

    #[test]
    pub fn test_collider_resolves_to_entity() {
        let mut physics_context = PhysicsContext::default();
        let mut world = World::new();

        let entity = world.spawn(());
        let collider = ColliderBuilder::cuboid(1.0, 1.0, 1.0)
            .translation(vector![0.0, 0.0, -2.0])
            .build();
        let component = physics_context.add_collider(entity, collider);
        physics_context.update();

        assert_eq!(
            physics_context.entity_for_collider(component.handle),
            Some(entity)
        );
    }

    #[test]
    pub fn test_update_refreshes_query_pipeline() {
        let mut physics_context = PhysicsContext::default();
        let mut world = World::new();

        let entity = world.spawn(());
        let collider = ColliderBuilder::cuboid(0.5, 0.5, 0.5)
            .translation(vector![0.0, 0.0, -4.0])
            .build();
        let component = physics_context.add_collider(entity, collider);

        // A freshly inserted collider is only visible to raycasts after the
        // pipeline has been stepped and the query pipeline refreshed.
        physics_context.update();

        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![0.0, 0.0, -1.0]);
        let hit = physics_context.query_pipeline.cast_ray(
            &physics_context.rigid_bodies,
            &physics_context.colliders,
            &ray,
            10.0,
            true,
            QueryFilter::new(),
        );
        let (handle, toi) = hit.unwrap();
        assert_eq!(handle, component.handle);
        assert!((toi - 3.5).abs() < 1e-4);
    }
}
