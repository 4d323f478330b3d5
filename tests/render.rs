use paintbox::draw::{BLACK, BLUE, CairoSurface, DrawOperation, History, RED, Surface};
use paintbox::input::{Action, InputState};

fn canvas() -> CairoSurface {
    CairoSurface::new(120, 90).expect("canvas")
}

fn drag(state: &mut InputState, surface: &mut CairoSurface, points: &[(i32, i32)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    state.on_pointer_press(surface, first.0, first.1);
    for (x, y) in rest {
        state.on_pointer_motion(surface, *x, *y);
    }
    let last = points.last().copied().unwrap_or(*first);
    state.on_pointer_release(surface, last.0, last.1);
}

#[test]
fn replay_is_idempotent() {
    let mut surface = canvas();
    let mut state = InputState::with_defaults(BLACK, 6, 0.3);
    drag(&mut state, &mut surface, &[(5, 5), (40, 20), (60, 60)]);
    state.handle_action(Action::ToggleRectangle, &mut surface);
    drag(&mut state, &mut surface, &[(100, 80), (70, 50)]);

    state.history.replay_all(&mut surface, state.line_width());
    let first = surface.pixels();
    state.history.replay_all(&mut surface, state.line_width());
    assert_eq!(first, surface.pixels());
}

#[test]
fn reset_leaves_blank_canvas_and_replay_keeps_it_blank() {
    let mut surface = canvas();
    let mut history = History::new();
    history.record(DrawOperation::Freehand {
        x: 10,
        y: 10,
        color: RED,
        starts_path: true,
    });
    history.record(DrawOperation::normalized_rectangle(20, 20, 50, 40, BLUE));
    history.replay_all(&mut surface, 4.0);
    assert!(surface.has_pixels());

    history.reset(&mut surface);
    assert!(history.is_empty());
    assert!(!surface.has_pixels());

    history.replay_all(&mut surface, 4.0);
    assert!(!surface.has_pixels());
}

#[test]
fn freehand_pixels_survive_rectangle_preview() {
    let mut surface = canvas();
    let mut state = InputState::with_defaults(BLACK, 6, 0.3);
    drag(&mut state, &mut surface, &[(10, 45), (30, 45), (50, 45)]);
    assert!(surface.alpha_at(30, 45) > 200);

    state.handle_action(Action::ToggleRectangle, &mut surface);
    state.on_pointer_press(&mut surface, 80, 10);
    state.on_pointer_motion(&mut surface, 110, 30);

    // The preview replays the history, so the earlier stroke is still there
    assert!(surface.alpha_at(30, 45) > 200);
    assert!(surface.alpha_at(80, 20) > 200);
}

#[test]
fn preview_tracks_latest_motion_only() {
    let mut surface = canvas();
    let mut state = InputState::with_defaults(BLACK, 4, 0.3);
    state.handle_action(Action::ToggleRectangle, &mut surface);

    state.on_pointer_press(&mut surface, 10, 10);
    state.on_pointer_motion(&mut surface, 100, 80);
    assert!(surface.alpha_at(100, 50) > 200);

    state.on_pointer_motion(&mut surface, 40, 40);
    // The larger preview from the first motion has been wiped
    assert_eq!(surface.alpha_at(100, 50), 0);
    assert!(surface.alpha_at(40, 25) > 200);
}

#[test]
fn airbrush_stamp_is_translucent_and_lost_on_replay() {
    let mut surface = canvas();
    let mut state = InputState::with_defaults(BLACK, 10, 0.3);
    state.handle_action(Action::ToggleAirbrush, &mut surface);
    drag(&mut state, &mut surface, &[(20, 20)]);

    let alpha = surface.alpha_at(24, 24);
    assert!(alpha > 0 && alpha < 255, "alpha was {alpha}");
    assert!(state.history.is_empty());

    state.handle_action(Action::ToggleRectangle, &mut surface);
    drag(&mut state, &mut surface, &[(60, 60), (80, 80)]);

    assert_eq!(surface.alpha_at(24, 24), 0);
}

#[test]
fn drag_direction_does_not_change_rectangle() {
    let mut down_right = canvas();
    let mut state = InputState::with_defaults(RED, 4, 0.3);
    state.handle_action(Action::ToggleRectangle, &mut down_right);
    drag(&mut state, &mut down_right, &[(20, 15), (90, 70)]);

    let mut up_left = canvas();
    let mut other = InputState::with_defaults(RED, 4, 0.3);
    other.handle_action(Action::ToggleRectangle, &mut up_left);
    drag(&mut other, &mut up_left, &[(90, 70), (20, 15)]);

    assert_eq!(state.history.operations(), other.history.operations());

    state.history.replay_all(&mut down_right, state.line_width());
    other.history.replay_all(&mut up_left, other.line_width());
    assert_eq!(down_right.pixels(), up_left.pixels());
}

#[test]
fn brush_change_restyles_history_on_next_replay() {
    let mut surface = canvas();
    let mut state = InputState::with_defaults(BLACK, 2, 0.3);
    drag(&mut state, &mut surface, &[(10, 45), (110, 45)]);
    assert_eq!(surface.alpha_at(60, 50), 0);

    for _ in 0..5 {
        state.handle_action(Action::IncreaseBrush, &mut surface);
    }
    assert_eq!(state.brush_width(), 12);
    state.history.replay_all(&mut surface, state.line_width());

    assert!(surface.alpha_at(60, 50) > 200);
}

#[test]
fn exported_png_has_canvas_dimensions() {
    let mut surface = canvas();
    let mut state = InputState::with_defaults(BLACK, 4, 0.3);
    drag(&mut state, &mut surface, &[(0, 0), (119, 89)]);

    let png = surface.export_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    // IHDR width and height, big-endian
    assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 120);
    assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 90);
    assert_eq!(surface.width(), 120);
}
