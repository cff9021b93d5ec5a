//! # Pointer Pad Plugin
//!
//! Provides a draggable virtual joystick for cross-platform mouse and touch
//! input.
//!
//! This plugin manages:
//! 1. Spawning the UI elements.
//! 2. Grabbing the pointer and tracking a drag session.
//! 3. Publishing [`PadEvent`]s and the [`PadOutput`] resource.
//! 4. Rendering the visual stick movement.
//!
//! ## Requirements
//! - Requires a `Camera2d` or `Camera3d` to be present in the world for UI
//!   rendering.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::prelude::{
    ActiveDrag, DragSession, GrabSource, PadBase, PadConfig, PadDirection, PadMode, PadOutput,
    PadStick,
};
use crate::resources::pad_output::PadCoordinates;

/// Notification emitted at each stage of a drag, mirroring the pad's
/// start/move/stop callback surface. `Start` and `Stop` carry no payload.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PadEvent {
    Start,
    /// `x` is the stick offset, `y` is inverted so "up is positive".
    Move { x: f32, y: f32, direction: PadDirection },
    Stop,
}

/// Main entry point for the pointer pad functionality.
/// Call `.add_plugins(PadPlugin)` in your App setup.
pub(crate) fn plugin(app: &mut App) {
    app.init_resource::<PadConfig>()
        .init_resource::<PadOutput>()
        .init_resource::<ActiveDrag>()
        .register_type::<PadConfig>()
        .register_type::<PadOutput>()
        .register_type::<ActiveDrag>()
        .add_event::<PadEvent>()
        .add_systems(
            Update,
            // Release runs before move so the release frame never emits a
            // trailing Move after the pointer is already up.
            (
                pad_press_system,
                pad_release_system,
                pad_move_system,
                pad_render_system,
            )
                .chain()
                .run_if(any_with_component::<PadBase>),
        );
}

/// Spawns the visual hierarchy of the pad: the base circle with the stick as
/// its child. In [`PadMode::Dynamic`] the pad starts hidden and only appears
/// during a drag.
pub fn spawn_pad(mut commands: Commands, config: Res<PadConfig>) {
    let visibility = match config.mode {
        PadMode::Static => Visibility::Inherited,
        PadMode::Dynamic => Visibility::Hidden,
    };

    commands
        .spawn((
            PadBase,
            Interaction::default(),
            Node {
                width: Val::Px(config.size),
                height: Val::Px(config.size),
                position_type: PositionType::Absolute,
                left: Val::VMin(config.pos_left_vmin),
                bottom: Val::VMin(config.pos_bottom_vmin),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(config.base_color),
            BorderRadius::all(Val::Percent(50.0)),
            visibility,
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                PadStick,
                Node {
                    width: Val::Px(config.size / 1.5),
                    height: Val::Px(config.size / 1.5),
                    position_type: PositionType::Relative,
                    ..default()
                },
                BackgroundColor(config.stick_color),
                BorderRadius::all(Val::Percent(50.0)),
            ));
        });
}

/// Screen-space bounding rect of a laid-out UI node, in logical pixels.
fn node_rect(computed: &ComputedNode, transform: &GlobalTransform) -> Rect {
    let scale = computed.inverse_scale_factor();
    Rect::from_center_size(
        transform.translation().truncate() * scale,
        computed.size() * scale,
    )
}

/// Detects pointer-down and opens the drag session.
///
/// The grab is scoped to the modality that pressed: a mouse grab tracks only
/// the cursor afterwards, a touch grab only its own touch id. A press of any
/// modality while a session already exists is ignored.
fn pad_press_system(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    config: Res<PadConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<ActiveDrag>,
    mut q_base: Query<
        (
            &Interaction,
            &mut Node,
            &mut Visibility,
            &ComputedNode,
            &GlobalTransform,
        ),
        With<PadBase>,
    >,
    mut events: EventWriter<PadEvent>,
) {
    if config.disabled || drag.session.is_some() {
        return;
    }
    let Ok((interaction, mut node, mut visibility, computed, transform)) = q_base.single_mut()
    else {
        return;
    };

    let base_rect = node_rect(computed, transform);

    let mut press: Option<(GrabSource, Vec2)> = None;
    if mouse_buttons.just_pressed(MouseButton::Left) {
        if let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) {
            if config.auto_center || *interaction == Interaction::Pressed {
                press = Some((GrabSource::Mouse, cursor));
            }
        }
    }
    if press.is_none() {
        for touch in touches.iter_just_pressed() {
            if config.auto_center || base_rect.contains(touch.position()) {
                press = Some((GrabSource::Touch(touch.id()), touch.position()));
                break;
            }
        }
    }
    let Some((source, press_pos)) = press else {
        return;
    };

    let anchor = if config.auto_center {
        // Reposition the base under the pointer; the anchor is then the rect
        // the layout pass will produce, centered on the press point.
        node.left = Val::Px(press_pos.x - config.size / 2.0);
        node.top = Val::Px(press_pos.y - config.size / 2.0);
        node.bottom = Val::Auto;
        Rect::from_center_size(press_pos, Vec2::splat(config.size))
    } else {
        base_rect
    };

    if config.mode == PadMode::Dynamic {
        *visibility = Visibility::Inherited;
    }

    drag.session = Some(DragSession { source, anchor });
    events.write(PadEvent::Start);
}

/// Tracks the grabbed pointer while a session is active.
///
/// The stick coordinates are refreshed in [`PadOutput`] on every frame (one
/// visual update per frame, however fast the pointer reports), while the
/// outward `Move` event is additionally rate-limited by
/// [`PadConfig::throttle_ms`].
fn pad_move_system(
    time: Res<Time>,
    touches: Res<Touches>,
    config: Res<PadConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<ActiveDrag>,
    mut output: ResMut<PadOutput>,
    mut events: EventWriter<PadEvent>,
) {
    let Some(session) = drag.session else {
        return;
    };

    let absolute = match session.source {
        GrabSource::Mouse => windows.single().ok().and_then(|w| w.cursor_position()),
        GrabSource::Touch(id) => touches.get_pressed(id).map(|t| t.position()),
    };
    let Some(absolute) = absolute else {
        return;
    };

    let coords = PadCoordinates::from_pointer(absolute, session.anchor.min, config.size);
    output.coordinates = Some(coords);

    let now_ms = time.elapsed_secs_f64() * 1000.0;
    if drag.throttle.allow(now_ms, config.throttle_ms) {
        let emitted = coords.emitted();
        output.value = emitted;
        events.write(PadEvent::Move {
            x: emitted.x,
            y: emitted.y,
            direction: coords.direction,
        });
    }
}

/// Closes the drag session when the grabbed pointer is released.
///
/// Fires regardless of prior move history: the stick returns to rest, any
/// auto-center position override is undone, and `Stop` is emitted.
fn pad_release_system(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    config: Res<PadConfig>,
    mut drag: ResMut<ActiveDrag>,
    mut output: ResMut<PadOutput>,
    mut q_base: Query<(&mut Node, &mut Visibility), With<PadBase>>,
    mut events: EventWriter<PadEvent>,
) {
    let Some(session) = drag.session else {
        return;
    };

    let released = match session.source {
        GrabSource::Mouse => !mouse_buttons.pressed(MouseButton::Left),
        // Covers both regular release and cancellation.
        GrabSource::Touch(id) => touches.get_pressed(id).is_none(),
    };
    if !released {
        return;
    }

    drag.session = None;
    output.coordinates = None;
    if config.reset_on_release {
        output.value = Vec2::ZERO;
    }

    if let Ok((mut node, mut visibility)) = q_base.single_mut() {
        node.left = Val::VMin(config.pos_left_vmin);
        node.bottom = Val::VMin(config.pos_bottom_vmin);
        node.top = Val::Auto;
        if config.mode == PadMode::Dynamic {
            *visibility = Visibility::Hidden;
        }
    }

    events.write(PadEvent::Stop);
}

/// Updates the stick position and the opacity of the pad.
fn pad_render_system(
    config: Res<PadConfig>,
    drag: Res<ActiveDrag>,
    output: Res<PadOutput>,
    mut q_base: Query<(&mut Node, &mut BackgroundColor), (With<PadBase>, Without<PadStick>)>,
    mut q_stick: Query<(&mut Node, &mut BackgroundColor), (With<PadStick>, Without<PadBase>)>,
) {
    let Ok((mut base_node, mut base_color)) = q_base.single_mut() else {
        return;
    };
    let Ok((mut stick_node, mut stick_color)) = q_stick.single_mut() else {
        return;
    };

    base_node.width = Val::Px(config.size);
    base_node.height = Val::Px(config.size);
    stick_node.width = Val::Px(config.size / 1.5);
    stick_node.height = Val::Px(config.size / 1.5);

    let offset = output
        .coordinates
        .map(|c| c.relative)
        .unwrap_or(Vec2::ZERO);
    stick_node.left = Val::Px(offset.x);
    stick_node.top = Val::Px(offset.y);

    let alpha_factor = if config.disabled {
        config.alpha_disabled
    } else if drag.session.is_some() {
        config.alpha_active
    } else {
        config.alpha_idle
    };
    base_color.0 = config
        .base_color
        .with_alpha(config.base_color.alpha() * alpha_factor);
    stick_color.0 = config
        .stick_color
        .with_alpha(config.stick_color.alpha() * alpha_factor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::mouse::MouseButtonInput;
    use bevy::input::touch::{TouchInput, TouchPhase};
    use bevy::input::{ButtonState, InputPlugin};
    use bevy::math::DVec2;

    fn test_app(config: PadConfig) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, InputPlugin, plugin));
        app.insert_resource(config);

        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();
        app.world_mut().spawn((
            PadBase,
            Interaction::None,
            Node::default(),
            ComputedNode::default(),
            GlobalTransform::default(),
            BackgroundColor::default(),
            Visibility::Hidden,
        ));
        app.world_mut()
            .spawn((PadStick, Node::default(), BackgroundColor::default()));
        (app, window)
    }

    fn set_cursor(app: &mut App, window: Entity, pos: Vec2) {
        let mut w = app.world_mut().get_mut::<Window>(window).unwrap();
        w.set_physical_cursor_position(Some(DVec2::new(pos.x as f64, pos.y as f64)));
    }

    fn send_mouse(app: &mut App, window: Entity, state: ButtonState) {
        app.world_mut().send_event(MouseButtonInput {
            button: MouseButton::Left,
            state,
            window,
        });
    }

    fn send_touch(app: &mut App, window: Entity, id: u64, phase: TouchPhase, position: Vec2) {
        app.world_mut().send_event(TouchInput {
            phase,
            position,
            window,
            force: None,
            id,
        });
    }

    fn drain_events(app: &mut App) -> Vec<PadEvent> {
        app.world_mut()
            .resource_mut::<Events<PadEvent>>()
            .drain()
            .collect()
    }

    fn session(app: &App) -> Option<DragSession> {
        app.world().resource::<ActiveDrag>().session
    }

    #[test]
    fn disabled_pad_emits_nothing() {
        let (mut app, window) = test_app(PadConfig {
            disabled: true,
            auto_center: true,
            ..default()
        });
        set_cursor(&mut app, window, Vec2::new(100.0, 100.0));
        send_mouse(&mut app, window, ButtonState::Pressed);
        app.update();
        set_cursor(&mut app, window, Vec2::new(160.0, 100.0));
        app.update();
        send_mouse(&mut app, window, ButtonState::Released);
        app.update();

        assert!(drain_events(&mut app).is_empty());
        assert!(session(&app).is_none());
    }

    #[test]
    fn mouse_drag_runs_start_move_stop() {
        let (mut app, window) = test_app(PadConfig {
            auto_center: true,
            ..default()
        });
        set_cursor(&mut app, window, Vec2::new(100.0, 100.0));
        send_mouse(&mut app, window, ButtonState::Pressed);
        app.update();

        let events = drain_events(&mut app);
        assert_eq!(events[0], PadEvent::Start);
        // Polled once per frame while dragging; the press frame samples the
        // neutral position.
        assert!(matches!(events[1], PadEvent::Move { x, y, .. } if x == 0.0 && y == 0.0));
        assert!(session(&app).is_some());

        // Pull 40px up on screen: emitted y is positive.
        set_cursor(&mut app, window, Vec2::new(100.0, 60.0));
        app.update();
        let events = drain_events(&mut app);
        assert!(events.contains(&PadEvent::Move {
            x: 0.0,
            y: 40.0,
            direction: PadDirection::Forward
        }));

        send_mouse(&mut app, window, ButtonState::Released);
        app.update();
        let events = drain_events(&mut app);
        assert_eq!(events, vec![PadEvent::Stop]);
        assert!(session(&app).is_none());
        assert!(app.world().resource::<PadOutput>().coordinates.is_none());
    }

    #[test]
    fn touch_drag_is_scoped_to_the_grabbed_finger() {
        let (mut app, window) = test_app(PadConfig {
            auto_center: true,
            ..default()
        });
        send_touch(&mut app, window, 7, TouchPhase::Started, Vec2::new(200.0, 200.0));
        app.update();
        assert_eq!(drain_events(&mut app)[0], PadEvent::Start);
        assert_eq!(
            session(&app).map(|s| s.source),
            Some(GrabSource::Touch(7))
        );

        // A second finger neither opens a session nor moves the stick.
        send_touch(&mut app, window, 8, TouchPhase::Started, Vec2::new(50.0, 50.0));
        send_touch(&mut app, window, 7, TouchPhase::Moved, Vec2::new(230.0, 200.0));
        app.update();
        let events = drain_events(&mut app);
        assert!(!events.contains(&PadEvent::Start));
        assert!(events.contains(&PadEvent::Move {
            x: 30.0,
            y: 0.0,
            direction: PadDirection::Right
        }));

        // Releasing the second finger does not end the drag.
        send_touch(&mut app, window, 8, TouchPhase::Ended, Vec2::new(50.0, 50.0));
        app.update();
        assert!(!drain_events(&mut app).contains(&PadEvent::Stop));
        assert!(session(&app).is_some());

        send_touch(&mut app, window, 7, TouchPhase::Ended, Vec2::new(230.0, 200.0));
        app.update();
        assert!(drain_events(&mut app).contains(&PadEvent::Stop));
        assert!(session(&app).is_none());
    }

    #[test]
    fn second_press_while_dragging_is_ignored() {
        let (mut app, window) = test_app(PadConfig {
            auto_center: true,
            ..default()
        });
        set_cursor(&mut app, window, Vec2::new(100.0, 100.0));
        send_mouse(&mut app, window, ButtonState::Pressed);
        app.update();
        drain_events(&mut app);

        // A touch landing mid-drag must not restart the session.
        send_touch(&mut app, window, 3, TouchPhase::Started, Vec2::new(300.0, 300.0));
        app.update();
        assert!(!drain_events(&mut app).contains(&PadEvent::Start));
        assert_eq!(session(&app).map(|s| s.source), Some(GrabSource::Mouse));
    }

    #[test]
    fn release_applies_reset_on_release_rule() {
        for (reset, expected) in [(false, Vec2::new(50.0, 0.0)), (true, Vec2::ZERO)] {
            let (mut app, window) = test_app(PadConfig {
                auto_center: true,
                reset_on_release: reset,
                ..default()
            });
            set_cursor(&mut app, window, Vec2::new(100.0, 100.0));
            send_mouse(&mut app, window, ButtonState::Pressed);
            app.update();
            // Drag well past the right edge of the pad: clamps to +size/2.
            set_cursor(&mut app, window, Vec2::new(400.0, 100.0));
            app.update();
            assert_eq!(app.world().resource::<PadOutput>().value, Vec2::new(50.0, 0.0));

            send_mouse(&mut app, window, ButtonState::Released);
            app.update();
            let output = app.world().resource::<PadOutput>();
            assert!(output.coordinates.is_none());
            assert_eq!(output.value, expected, "reset_on_release={reset}");
        }
    }

    #[test]
    fn dynamic_pad_is_visible_only_while_dragging() {
        let (mut app, window) = test_app(PadConfig {
            auto_center: true,
            mode: PadMode::Dynamic,
            ..default()
        });

        let visibility = |app: &mut App| {
            let mut q = app.world_mut().query_filtered::<&Visibility, With<PadBase>>();
            *q.single(app.world()).unwrap()
        };

        set_cursor(&mut app, window, Vec2::new(100.0, 100.0));
        send_mouse(&mut app, window, ButtonState::Pressed);
        app.update();
        assert_eq!(visibility(&mut app), Visibility::Inherited);

        send_mouse(&mut app, window, ButtonState::Released);
        app.update();
        assert_eq!(visibility(&mut app), Visibility::Hidden);
    }

    #[test]
    fn static_press_uses_the_pad_rect_as_anchor() {
        // Without auto-center the grab goes through the UI Interaction
        // component; the anchor is the pad's current bounding rect.
        let (mut app, window) = test_app(PadConfig::default());
        {
            let mut q = app
                .world_mut()
                .query_filtered::<&mut Interaction, With<PadBase>>();
            *q.single_mut(app.world_mut()).unwrap() = Interaction::Pressed;
        }
        set_cursor(&mut app, window, Vec2::new(50.0, 50.0));
        send_mouse(&mut app, window, ButtonState::Pressed);
        app.update();

        let events = drain_events(&mut app);
        assert_eq!(events[0], PadEvent::Start);
        let anchor = session(&app).unwrap().anchor;
        // The un-laid-out test node sits at the origin with zero size.
        assert_eq!(anchor.min, Vec2::ZERO);
        let coords = app.world().resource::<PadOutput>().coordinates.unwrap();
        assert_eq!(coords.relative, Vec2::ZERO);
        assert_eq!(coords.axis, Vec2::new(50.0, 50.0));
        assert_eq!(coords.direction, PadDirection::Backward);
    }
}
