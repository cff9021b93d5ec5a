use bevy::prelude::*;

use crate::components::direction::PadDirection;

/// Stick placement computed from one pointer sample. Rebuilt on every
/// processed move and discarded on release.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PadCoordinates {
    /// Pad-local stick offset in logical pixels, each axis clamped to
    /// `±size/2`. Follows UI conventions: y grows downward.
    pub relative: Vec2,
    /// Raw pointer position relative to the anchor rect's top-left corner,
    /// unclamped.
    pub axis: Vec2,
    pub direction: PadDirection,
}

impl PadCoordinates {
    /// Derives coordinates from an absolute pointer position against the
    /// anchor rect captured at drag start.
    pub fn from_pointer(absolute: Vec2, anchor_min: Vec2, size: f32) -> Self {
        let half = size / 2.0;
        let relative = Vec2::new(
            (absolute.x - anchor_min.x - half).clamp(-half, half),
            (absolute.y - anchor_min.y - half).clamp(-half, half),
        );
        Self {
            relative,
            axis: absolute - anchor_min,
            direction: PadDirection::from_offset(relative),
        }
    }

    /// The outward-facing move vector: x as-is, y inverted so "up is
    /// positive" for consumers.
    pub fn emitted(&self) -> Vec2 {
        Vec2::new(self.relative.x, -self.relative.y)
    }
}

/// The public state of the pointer pad.
/// Read this from your movement systems to control entities.
#[derive(Resource, Default, Reflect)]
#[reflect(Resource)]
pub struct PadOutput {
    /// `Some` only while a drag is in progress; drives the stick visual.
    pub coordinates: Option<PadCoordinates>,
    /// Last emitted move vector (y up-positive). Zeroed on release when
    /// `reset_on_release` is set, retained otherwise.
    pub value: Vec2,
}
