use bevy::prelude::*;

/// Visibility behavior of the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum PadMode {
    /// The pad is always visible at its resting position.
    #[default]
    Static,
    /// The pad is hidden while idle and only shown during a drag.
    /// Intended for use together with [`PadConfig::auto_center`].
    Dynamic,
}

/// Configuration resource for the pointer pad.
///
/// By updating this resource (via code or the `bevy_inspector_egui` overlay
/// behind the `dev` feature), the pad reacts instantly to changes in size,
/// colors, or throttling.
#[derive(Resource, Reflect, Debug)]
#[reflect(Resource)]
pub struct PadConfig {
    /// Diameter of the base circle in logical pixels. The stick travel range
    /// is half of this on each axis.
    pub size: f32,

    /// Tint of the base circle.
    pub base_color: Color,

    /// Tint of the draggable stick. The stick diameter is `size / 1.5`.
    pub stick_color: Color,

    /// Minimum milliseconds between two outward `Move` event emissions.
    /// Moves inside the window are dropped silently; the stick visual still
    /// updates every frame. `0` emits on every processed move.
    pub throttle_ms: f64,

    /// When set, pointer-down is ignored and the pad renders dimmed.
    pub disabled: bool,

    /// Re-center the base under the pointer on every drag start, so the drag
    /// always begins from the stick's neutral position.
    pub auto_center: bool,

    /// When true, [`PadOutput::value`] is zeroed on release. When false the
    /// last move vector is retained so consumers keep the final heading.
    ///
    /// [`PadOutput::value`]: crate::resources::pad_output::PadOutput
    pub reset_on_release: bool,

    pub mode: PadMode,

    /// Opacity of the pad while idle (0.0 to 1.0).
    pub alpha_idle: f32,

    /// Opacity of the pad while actively dragged (0.0 to 1.0).
    pub alpha_active: f32,

    /// Opacity of the pad while disabled.
    pub alpha_disabled: f32,

    /// Resting distance from the left screen edge in responsive `VMin` units.
    pub pos_left_vmin: f32,

    /// Resting distance from the bottom screen edge in responsive `VMin` units.
    pub pos_bottom_vmin: f32,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            base_color: Color::srgba(0.0, 0.0, 0.0, 0.15),
            stick_color: Color::srgba(0.0, 0.0, 0.0, 0.31),
            throttle_ms: 0.0,
            disabled: false,
            auto_center: false,
            reset_on_release: false,
            mode: PadMode::Static,
            alpha_idle: 0.6,
            alpha_active: 1.0,
            alpha_disabled: 0.25,
            pos_left_vmin: 15.0,
            pos_bottom_vmin: 15.0,
        }
    }
}
