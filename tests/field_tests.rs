// Host-side tests for the field integrator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod waves {
    pub mod grid {
        include!("../src/waves/grid.rs");
    }
    pub mod integrate {
        include!("../src/waves/integrate.rs");
    }
    pub mod noise {
        include!("../src/waves/noise.rs");
    }
    pub mod pointer {
        include!("../src/waves/pointer.rs");
    }
}

use glam::Vec2;
use std::f64::consts::PI;
use waves::grid::*;
use waves::integrate::*;
use waves::noise::*;
use waves::pointer::*;

fn pointer_at(pos: Vec2, smoothed_speed: f32, angle: f32) -> PointerState {
    PointerState {
        raw: pos,
        smoothed: pos,
        last: pos,
        speed: smoothed_speed,
        smoothed_speed,
        angle,
        initialized: true,
    }
}

fn far_pointer() -> PointerState {
    pointer_at(Vec2::new(1.0e6, 1.0e6), 0.0, 0.0)
}

#[test]
fn impulse_at_pointer_matches_reference() {
    // radius = max(175, 50) = 175, s = 1, f = 1 -> 175 * 50 * 0.00035
    let kick = cursor_impulse(0.0, 50.0, 0.0).unwrap();
    assert!((kick.x - 3.0625).abs() < 1e-4, "{:?}", kick);
    assert!(kick.y.abs() < 1e-6);

    let kick = cursor_impulse(0.0, 50.0, std::f32::consts::FRAC_PI_2).unwrap();
    assert!(kick.x.abs() < 1e-5);
    assert!((kick.y - 3.0625).abs() < 1e-4);
}

#[test]
fn impulse_falls_off_and_stops_at_radius() {
    let near = cursor_impulse(10.0, 80.0, 0.0).unwrap();
    let mid = cursor_impulse(100.0, 80.0, 0.0).unwrap();
    assert!(near.x > mid.x && mid.x > 0.0);
    assert!(cursor_impulse(175.0, 80.0, 0.0).is_none());
    assert!(cursor_impulse(400.0, 80.0, 0.0).is_none());
}

#[test]
fn fast_pointer_widens_radius() {
    assert!(cursor_impulse(180.0, 100.0, 0.0).is_none());
    assert!(cursor_impulse(180.0, 200.0, 0.0).is_some());
}

#[test]
fn still_pointer_gives_no_kick() {
    let kick = cursor_impulse(0.0, 0.0, 1.0).unwrap();
    assert_eq!(kick.length(), 0.0);
}

#[test]
fn wave_offset_maps_noise_to_ellipse() {
    let flat = |_: f64, _: f64| 0.0;
    assert_eq!(wave_offset(&flat, Vec2::new(5.0, 7.0), 1234.0), Vec2::new(12.0, 0.0));

    // 8 * pi/16 = pi/2 -> (0, 6)
    let quarter = |_: f64, _: f64| PI / 16.0;
    let w = wave_offset(&quarter, Vec2::ZERO, 0.0);
    assert!(w.x.abs() < 1e-5 && (w.y - 6.0).abs() < 1e-5, "{:?}", w);
}

#[test]
fn wave_offset_samples_drifting_coordinates() {
    let echo_x = |x: f64, _: f64| x;
    let echo_y = |_: f64, y: f64| y;
    // n = ((x + t * 0.008) * 0.003) * 8
    let t = 1000.0;
    let w = wave_offset(&echo_x, Vec2::new(100.0, 0.0), t);
    let n = ((100.0 + t * 0.008) * 0.003 * 8.0) as f32;
    assert!((w.x - n.cos() * 12.0).abs() < 1e-4);
    let w = wave_offset(&echo_y, Vec2::new(0.0, 50.0), t);
    let n = ((50.0 + t * 0.003) * 0.002 * 8.0) as f32;
    assert!((w.y - n.sin() * 6.0).abs() < 1e-4);
}

#[test]
fn wave_offset_is_pure() {
    let noise = SimplexNoise::new(7);
    let a = wave_offset(&noise, Vec2::new(320.0, 48.0), 16_000.0);
    // Evaluating other coordinates in between must not change the result.
    for i in 0..50 {
        wave_offset(&noise, Vec2::new(i as f32 * 16.0, 3.0), 16_000.0 + i as f64);
    }
    let b = wave_offset(&noise, Vec2::new(320.0, 48.0), 16_000.0);
    assert_eq!(a, b);
    assert_eq!(a, wave_offset(&SimplexNoise::new(7), Vec2::new(320.0, 48.0), 16_000.0));
    assert!(a.x.abs() <= 12.0 && a.y.abs() <= 6.0);
}

#[test]
fn single_step_applies_impulse_then_spring() {
    let mut p = Point::at(Vec2::new(40.0, 40.0));
    let pointer = pointer_at(Vec2::new(40.0, 40.0), 50.0, 0.0);
    step_point(&mut p, &pointer, &|_: f64, _: f64| 0.0, 0.0);
    // v = 3.0625 (kick), restoring term is zero at rest, then * 0.95
    let expected = 3.0625 * 0.95;
    assert!((p.cursor_velocity.x - expected).abs() < 1e-4);
    assert!((p.cursor.x - expected).abs() < 1e-4);
    assert_eq!(p.wave, Vec2::new(12.0, 0.0));
}

#[test]
fn spring_step_restores_then_damps() {
    let mut p = Point::at(Vec2::ZERO);
    p.cursor = Vec2::new(10.0, -10.0);
    spring_step(&mut p);
    // v = (0 - 10) * 0.01 = -0.1, * 0.95 = -0.095
    assert!((p.cursor_velocity.x + 0.095).abs() < 1e-6);
    assert!((p.cursor.x - 9.905).abs() < 1e-5);
    assert!((p.cursor.y + 9.905).abs() < 1e-5);
}

#[test]
fn cursor_offset_stays_clamped_under_sustained_kicks() {
    let mut grid = Grid::build(SurfaceSize::new(400.0, 300.0));
    let noise = SimplexNoise::new(3);
    for frame in 0..2000 {
        let angle = if frame % 500 < 250 { 0.3 } else { 3.5 };
        let pointer = pointer_at(Vec2::new(200.0, 150.0), 100.0, angle);
        integrate(grid.points_mut(), &pointer, &noise, frame as f64 * 16.0);
        for p in grid.points() {
            assert!(p.cursor.x >= -50.0 && p.cursor.x <= 50.0, "{:?}", p);
            assert!(p.cursor.y >= -50.0 && p.cursor.y <= 50.0, "{:?}", p);
        }
    }
    // The pointer really did push something to the limit.
    let max = grid
        .points()
        .iter()
        .map(|p| p.cursor.abs().max_element())
        .fold(0.0_f32, f32::max);
    assert!(max > 10.0);
}

#[test]
fn cursor_decays_to_rest_without_input() {
    let mut grid = Grid::build(SurfaceSize::new(200.0, 100.0));
    for (i, p) in grid.points_mut().iter_mut().enumerate() {
        p.cursor = Vec2::new(50.0, -50.0) * if i % 2 == 0 { 1.0 } else { -0.5 };
        p.cursor_velocity = Vec2::new(8.0, 3.0);
    }
    let pointer = far_pointer();
    let flat = |_: f64, _: f64| 0.0;
    for frame in 0..1500 {
        integrate(grid.points_mut(), &pointer, &flat, frame as f64 * 16.0);
    }
    for p in grid.points() {
        assert!(p.cursor.length() < 1e-3, "{:?}", p);
        assert!(p.cursor_velocity.length() < 1e-3, "{:?}", p);
    }
}

#[test]
fn integrate_never_moves_base_positions() {
    let mut grid = Grid::build(SurfaceSize::new(300.0, 200.0));
    let before: Vec<Vec2> = grid.points().iter().map(|p| p.base).collect();
    let pointer = pointer_at(Vec2::new(150.0, 100.0), 100.0, 1.0);
    let noise = SimplexNoise::new(11);
    for frame in 0..60 {
        integrate(grid.points_mut(), &pointer, &noise, frame as f64 * 16.7);
    }
    let after: Vec<Vec2> = grid.points().iter().map(|p| p.base).collect();
    assert_eq!(before, after);
}
