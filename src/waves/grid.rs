use crate::constants::{GRID_STEP, OVERSCAN_X, OVERSCAN_Y};
use glam::Vec2;

/// One lattice sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Grid coordinate; fixed once the grid is built.
    pub base: Vec2,
    /// Noise displacement, recomputed from scratch every frame.
    pub wave: Vec2,
    /// Spring displacement driven by the pointer. Kept within the offset limit.
    pub cursor: Vec2,
    pub cursor_velocity: Vec2,
}

impl Point {
    pub fn at(base: Vec2) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Rendered position without the spring displacement.
    #[inline]
    pub fn wave_position(&self) -> Vec2 {
        self.base + self.wave
    }

    /// Fully displaced rendered position.
    #[inline]
    pub fn rendered_position(&self) -> Vec2 {
        self.base + self.wave + self.cursor
    }
}

/// Surface size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    /// Negative or non-finite dimensions collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }
}

/// Line/point counts and the centering offset for a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub lines: usize,
    pub points_per_line: usize,
    pub start: Vec2,
}

impl GridLayout {
    pub fn for_surface(size: SurfaceSize) -> Self {
        let lines = ((size.width + OVERSCAN_X) / GRID_STEP).ceil() as usize;
        let points_per_line = ((size.height + OVERSCAN_Y) / GRID_STEP).ceil() as usize;
        let start = Vec2::new(
            (size.width - GRID_STEP * lines as f32) / 2.0,
            (size.height - GRID_STEP * points_per_line as f32) / 2.0,
        );
        Self {
            lines,
            points_per_line,
            start,
        }
    }

    #[inline]
    pub fn base_position(&self, line: usize, point: usize) -> Vec2 {
        self.start + Vec2::new(GRID_STEP * line as f32, GRID_STEP * point as f32)
    }
}

/// Lattice stored line-major in one flat buffer.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    layout: Option<GridLayout>,
    points: Vec<Point>,
}

impl Grid {
    pub fn build(size: SurfaceSize) -> Self {
        let layout = GridLayout::for_surface(size);
        let mut points = Vec::with_capacity(layout.lines * layout.points_per_line);
        for i in 0..layout.lines {
            for j in 0..layout.points_per_line {
                points.push(Point::at(layout.base_position(i, j)));
            }
        }
        Self {
            layout: Some(layout),
            points,
        }
    }

    pub fn line_count(&self) -> usize {
        self.layout.map_or(0, |l| l.lines)
    }

    pub fn points_per_line(&self) -> usize {
        self.layout.map_or(0, |l| l.points_per_line)
    }

    /// Lines in render order. Yields nothing for an empty grid.
    pub fn lines(&self) -> impl Iterator<Item = &[Point]> {
        self.points.chunks_exact(self.points_per_line().max(1))
    }

    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }
}

// Read-only lookups; the frame pass only walks `lines()` and `points_mut()`.
#[allow(dead_code)]
impl Grid {
    pub fn layout(&self) -> Option<GridLayout> {
        self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, line: usize, point: usize) -> Option<&Point> {
        let n = self.points_per_line();
        if point >= n {
            return None;
        }
        self.points.get(line * n + point)
    }

    pub fn line(&self, line: usize) -> Option<&[Point]> {
        let n = self.points_per_line();
        let start = line.checked_mul(n)?;
        self.points.get(start..start + n)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
