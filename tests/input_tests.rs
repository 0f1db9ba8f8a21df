// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn surface_local_subtracts_origin() {
    let local = surface_local(Vec2::new(250.0, 130.0), Vec2::new(50.0, 30.0));
    assert_eq!(local, Vec2::new(200.0, 100.0));
}

#[test]
fn surface_local_allows_points_outside_surface() {
    // The window-level mousemove listener reports positions over other elements too.
    let local = surface_local(Vec2::new(10.0, 5.0), Vec2::new(40.0, 60.0));
    assert_eq!(local, Vec2::new(-30.0, -55.0));
}

#[test]
fn surface_local_at_origin_is_identity() {
    let p = Vec2::new(12.5, 99.0);
    assert_eq!(surface_local(p, Vec2::ZERO), p);
}

#[test]
fn page_origin_adds_scroll() {
    let origin = page_origin(Vec2::new(40.0, -260.0), Vec2::new(0.0, 300.0));
    assert_eq!(origin, Vec2::new(40.0, 40.0));
}

#[test]
fn cached_page_origin_holds_after_scrolling() {
    // Origin measured once at mount, with the page unscrolled.
    let cached = page_origin(Vec2::new(40.0, 100.0), Vec2::ZERO);

    // The user scrolls 250px; the container's client rect moves up, the
    // pointer's page position does not depend on the cached rect.
    let scroll = Vec2::new(0.0, 250.0);
    let client_origin_now = Vec2::new(40.0, 100.0) - scroll;
    let pointer_client = Vec2::new(140.0, 10.0);
    let pointer_page = pointer_client + scroll;

    assert_eq!(
        surface_local(pointer_page, cached),
        surface_local(pointer_client, client_origin_now)
    );
    assert_eq!(surface_local(pointer_page, cached), Vec2::new(100.0, 160.0));
}
