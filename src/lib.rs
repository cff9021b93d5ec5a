//! # pointer-pad
//!
//! A draggable virtual joystick ("pointer pad") for Bevy UI, usable with both
//! mouse and touch input.
//!
//! Add [`PadPlugin`] to your app, spawn the widget with
//! [`plugins::pad::spawn_pad`], then either read the
//! [`PadOutput`](resources::pad_output::PadOutput) resource from your movement
//! systems or consume [`PadEvent`](plugins::pad::PadEvent)s.

use bevy::prelude::*;

pub mod components;
pub mod plugins;
pub mod resources;

pub mod prelude {
    pub use super::components::direction::PadDirection;
    pub use super::components::pad::{PadBase, PadStick};
    pub use super::plugins::pad::{spawn_pad, PadEvent};
    pub use super::resources::drag_session::{ActiveDrag, DragSession, GrabSource};
    pub use super::resources::pad_config::{PadConfig, PadMode};
    pub use super::resources::pad_output::{PadCoordinates, PadOutput};
    pub use super::PadPlugin;
}

pub struct PadPlugin;

impl Plugin for PadPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(plugins::pad::plugin);
        #[cfg(feature = "dev")]
        app.add_plugins(plugins::debug::plugin);
    }
}
