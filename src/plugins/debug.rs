use bevy::app::App;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};

use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::resources::pad_config::PadConfig;
use crate::resources::pad_output::PadOutput;

pub(crate) fn plugin(app: &mut App) {
    app.add_plugins((
        LogDiagnosticsPlugin::default(),
        FrameTimeDiagnosticsPlugin::default(),
    ));

    app.add_plugins(EguiPlugin::default());

    app.add_plugins(ResourceInspectorPlugin::<PadConfig>::default());
    app.add_plugins(ResourceInspectorPlugin::<PadOutput>::default());
}
