//! Demo application: a pointer pad steering a puck around a 2D scene, with a
//! HUD readout of the current direction and offset.

use bevy::{asset::AssetMetaCheck, prelude::*};

use pointer_pad::prelude::*;

const BACKGROUND_COLOR: Color = Color::srgb(0.93, 0.93, 0.96);

fn main() {
    App::new()
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins(
            DefaultPlugins
                .set(AssetPlugin {
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "pointer-pad demo".into(),
                        resizable: true,
                        resolution: (800.0, 600.0).into(),
                        canvas: Some("#bevy".to_owned()),
                        fit_canvas_to_parent: true,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(PadPlugin)
        .insert_resource(PadConfig {
            // One emission per frame at 60Hz is plenty for the log.
            throttle_ms: 16.0,
            ..default()
        })
        .add_systems(Startup, (setup_scene, spawn_pad, spawn_readout))
        .add_systems(Update, (drive_puck, update_readout, log_pad_events))
        .run();
}

#[derive(Component, Default)]
struct Puck {
    velocity: Vec2,
}

#[derive(Component)]
struct ReadoutText;

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2d);

    commands.spawn((
        Puck::default(),
        Mesh2d(meshes.add(Circle::new(24.0))),
        MeshMaterial2d(materials.add(Color::srgb(0.16, 0.45, 0.30))),
        Transform::default(),
    ));
}

fn spawn_readout(mut commands: Commands) {
    commands.spawn((
        ReadoutText,
        Text::new("idle"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.1, 0.1, 0.1)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::VMin(4.0),
            right: Val::VMin(4.0),
            ..default()
        },
    ));
}

/// Steers the puck from the pad output, normalized so a fully deflected
/// stick gives unit input.
fn drive_puck(
    time: Res<Time>,
    config: Res<PadConfig>,
    output: Res<PadOutput>,
    mut q_puck: Query<(&mut Puck, &mut Transform)>,
) {
    let Ok((mut puck, mut transform)) = q_puck.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    let input = output.value / (config.size / 2.0);
    puck.velocity += input * 900.0 * dt;
    puck.velocity *= 0.9f32.powf(dt * 60.0);

    transform.translation += (puck.velocity * dt).extend(0.0);
}

fn update_readout(output: Res<PadOutput>, mut q_text: Query<&mut Text, With<ReadoutText>>) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    text.0 = match output.coordinates {
        Some(c) => format!(
            "{}  x {:+.0}  y {:+.0}",
            c.direction.label(),
            c.relative.x,
            -c.relative.y
        ),
        None => "idle".to_owned(),
    };
}

fn log_pad_events(mut events: EventReader<PadEvent>) {
    for event in events.read() {
        match event {
            PadEvent::Start => info!("pad grabbed"),
            PadEvent::Move { x, y, direction } => {
                debug!("pad move x={x:.1} y={y:.1} direction={}", direction.label());
            }
            PadEvent::Stop => info!("pad released"),
        }
    }
}
