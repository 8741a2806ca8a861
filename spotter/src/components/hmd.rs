/// A marker component used to indicate the player's headset in the game
/// simulation.
///
/// The entity marked with this component has its [`super::LocalTransform`]
/// updated each tick with the pose of the headset in stage space. Composing it
/// with the [`super::Stage`] transform gives the head pose in global space,
/// which is what locomotion uses to decide which way "forward" is.
#[derive(Debug)]
pub struct HMD {}
