#![cfg(not(target_arch = "wasm32"))]

use shaderpad_wasm::frame::{FrameClock, FrameState};
use shaderpad_wasm::geometry::{vertex_count, QUAD_POSITIONS, TRIANGLE_POSITIONS};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[test]
fn mouse_flips_to_bottom_left_origin() {
    let mut state = FrameState::new();
    state.set_viewport(800, 600);
    // cursor 40px right of and 25px below the canvas corner
    state.record_mouse(140.0, 75.0, 100.0, 50.0);
    assert!(approx_eq(state.mouse_x, 40.0, 1e-6));
    assert!(approx_eq(state.mouse_y, 600.0 - 25.0, 1e-6));
}

#[test]
fn mouse_defaults_to_origin() {
    let state = FrameState::new();
    assert_eq!((state.mouse_x, state.mouse_y), (0.0, 0.0));
}

#[test]
fn clock_starts_at_zero_and_never_goes_back() {
    let mut clock = FrameClock::new();
    let first = clock.elapsed_seconds(12_345.0);
    assert!(approx_eq(first, 0.0, 1e-9));

    let mut last = first;
    for now in [12_361.0, 12_377.7, 12_377.7, 12_400.2] {
        let elapsed = clock.elapsed_seconds(now);
        assert!(elapsed >= last, "elapsed went backwards: {elapsed} < {last}");
        last = elapsed;
    }
    assert!(approx_eq(last, 0.0552, 1e-4));
}

#[test]
fn quad_is_six_vertices_of_two_floats() {
    assert_eq!(QUAD_POSITIONS.len(), 12);
    assert_eq!(vertex_count(&QUAD_POSITIONS), 6);
    assert_eq!(vertex_count(&TRIANGLE_POSITIONS), 3);
    // every coordinate stays inside clip space
    assert!(QUAD_POSITIONS.iter().all(|c| (-1.0..=1.0).contains(c)));
}

#[test]
fn viewport_updates_are_idempotent() {
    let mut once = FrameState::new();
    once.set_viewport(1280, 720);
    let mut twice = once;
    twice.set_viewport(1280, 720);
    assert_eq!(once, twice);
}
