use super::grid::Point;
use std::fmt::Write;

/// Write the SVG path description for one line into `out`.
///
/// The move-to anchor uses the wave offset only; every line-to includes the
/// spring displacement. Lines shorter than two points leave `out` untouched
/// and return `false`.
pub fn write_line_path(points: &[Point], out: &mut String) -> bool {
    let Some((first, rest)) = points.split_first() else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    out.clear();
    let anchor = first.wave_position();
    _ = write!(out, "M {:.2} {:.2}", anchor.x, anchor.y);
    for p in rest {
        let pos = p.rendered_position();
        _ = write!(out, " L {:.2} {:.2}", pos.x, pos.y);
    }
    true
}

#[allow(dead_code)]
#[inline]
pub fn line_path(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 20);
    write_line_path(points, &mut out);
    out
}
