use bevy::prelude::*;

/// Marker for the pad's outer circle. The stick node is spawned as its child.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct PadBase;

/// Marker for the draggable stick inside the base.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct PadStick;
