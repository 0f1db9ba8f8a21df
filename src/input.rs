use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn mouse_page(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.page_x() as f32, ev.page_y() as f32)
}

/// First active touch, if any.
#[inline]
pub fn touch_page(ev: &web::TouchEvent) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(Vec2::new(touch.page_x() as f32, touch.page_y() as f32))
}

/// Shift a viewport (client) position into page space.
#[inline]
pub fn page_origin(client_origin: Vec2, scroll: Vec2) -> Vec2 {
    client_origin + scroll
}

/// Convert a pointer position into surface-local coordinates given the
/// surface's top-left corner in the same space (client or page).
#[inline]
pub fn surface_local(client: Vec2, surface_origin: Vec2) -> Vec2 {
    client - surface_origin
}
