use bevy::prelude::*;

/// Coarse 4-way classification of the stick's angular offset.
///
/// `Forward` is "up" on screen. The classification is total: every angle maps
/// to exactly one direction, the four arcs cover the full circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum PadDirection {
    Forward,
    Right,
    Left,
    Backward,
}

// 135 and 45 degrees in radians.
const ARC_UPPER: f32 = 2.356_194_49;
const ARC_LOWER: f32 = 0.785_398_163;

impl PadDirection {
    /// Classifies a stick offset in pad-local UI coordinates (y grows
    /// downward).
    ///
    /// The atan2 arguments are deliberately swapped relative to the usual
    /// `atan2(y, x)` so that angle 0 points down the screen, which keeps the
    /// arc thresholds in the form the classification was defined with.
    pub fn from_offset(offset: Vec2) -> Self {
        Self::from_angle(f32::atan2(offset.x, offset.y))
    }

    pub fn from_angle(angle: f32) -> Self {
        if angle > ARC_UPPER || angle < -ARC_UPPER {
            PadDirection::Forward
        } else if angle > ARC_LOWER {
            PadDirection::Right
        } else if angle < -ARC_LOWER {
            PadDirection::Left
        } else {
            PadDirection::Backward
        }
    }

    /// Label used by HUD readouts.
    pub fn label(&self) -> &'static str {
        match self {
            PadDirection::Forward => "FORWARD",
            PadDirection::Right => "RIGHT",
            PadDirection::Left => "LEFT",
            PadDirection::Backward => "BACKWARD",
        }
    }
}
