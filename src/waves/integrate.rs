use super::grid::Point;
use super::noise::NoiseSource;
use super::pointer::PointerState;
use crate::constants::*;
use glam::Vec2;

/// Noise-driven displacement for a grid coordinate at `time_ms`.
///
/// Pure in `(base, time_ms)` for a given noise source.
#[inline]
pub fn wave_offset<N: NoiseSource + ?Sized>(noise: &N, base: Vec2, time_ms: f64) -> Vec2 {
    let nx = (base.x as f64 + time_ms * NOISE_TIME_DRIFT_X) * NOISE_FREQ_X;
    let ny = (base.y as f64 + time_ms * NOISE_TIME_DRIFT_Y) * NOISE_FREQ_Y;
    let n = (noise.sample(nx, ny) * NOISE_GAIN) as f32;
    Vec2::new(n.cos() * WAVE_AMPLITUDE_X, n.sin() * WAVE_AMPLITUDE_Y)
}

/// Velocity kick for a point `distance` away from the smoothed pointer.
///
/// `None` outside the influence radius `max(175, speed)`.
#[inline]
pub fn cursor_impulse(distance: f32, smoothed_speed: f32, angle: f32) -> Option<Vec2> {
    let radius = POINTER_MIN_RADIUS.max(smoothed_speed);
    if distance >= radius {
        return None;
    }
    let s = 1.0 - distance / radius;
    let f = (distance * POINTER_FALLOFF).cos() * s;
    let magnitude = f * radius * smoothed_speed * POINTER_IMPULSE;
    Some(Vec2::new(angle.cos(), angle.sin()) * magnitude)
}

/// Damped spring step: restoring force, damping, integration, clamp.
#[inline]
pub fn spring_step(point: &mut Point) {
    point.cursor_velocity += (Vec2::ZERO - point.cursor) * SPRING_STIFFNESS;
    point.cursor_velocity *= SPRING_DAMPING;
    point.cursor += point.cursor_velocity;
    point.cursor = point
        .cursor
        .clamp(Vec2::splat(-CURSOR_OFFSET_LIMIT), Vec2::splat(CURSOR_OFFSET_LIMIT));
}

/// Advance one point by one frame.
pub fn step_point<N: NoiseSource + ?Sized>(
    point: &mut Point,
    pointer: &PointerState,
    noise: &N,
    time_ms: f64,
) {
    point.wave = wave_offset(noise, point.base, time_ms);
    let d = point.base.distance(pointer.smoothed);
    if let Some(kick) = cursor_impulse(d, pointer.smoothed_speed, pointer.angle) {
        point.cursor_velocity += kick;
    }
    spring_step(point);
}

/// Advance every point. The pointer must already be smoothed for this frame.
pub fn integrate<N: NoiseSource + ?Sized>(
    points: &mut [Point],
    pointer: &PointerState,
    noise: &N,
    time_ms: f64,
) {
    for p in points.iter_mut() {
        step_point(p, pointer, noise, time_ms);
    }
}
