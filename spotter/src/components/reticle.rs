/// The aiming reticle.
///
/// Its color is recomputed every frame from whatever is under the crosshair
/// right now; it carries no memory of previous frames. The entity's
/// [`super::LocalTransform`] snaps to the hit point when the aim ray strikes
/// something, and otherwise rests at the configured distance along the aim
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reticle {
    /// Current RGBA color
    pub color: [f32; 4],
}
