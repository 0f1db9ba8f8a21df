use super::grid::{Grid, SurfaceSize};
use super::integrate::integrate;
use super::noise::NoiseSource;
use super::path::write_line_path;
use super::pointer::PointerState;
use glam::Vec2;

/// Lifecycle of a mounted renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unmounted,
    Initializing,
    Running,
}

/// All per-mount simulation state: grid, pointer, noise and emitted paths.
///
/// The browser layer owns one of these per mounted view and forwards
/// resize, pointer and frame callbacks into it. Nothing here touches the
/// DOM; `paths()` is what gets pushed to the surface after each tick.
pub struct WaveScene<N: NoiseSource> {
    noise: N,
    grid: Grid,
    pointer: PointerState,
    phase: Phase,
    size: Option<SurfaceSize>,
    paths: Vec<String>,
    frames: u64,
}

impl<N: NoiseSource> WaveScene<N> {
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            grid: Grid::default(),
            pointer: PointerState::default(),
            phase: Phase::Unmounted,
            size: None,
            paths: Vec::new(),
            frames: 0,
        }
    }

    /// Enter `Initializing` and build the first grid.
    ///
    /// A missing surface leaves the grid empty; a later resize fills it.
    pub fn mount(&mut self, size: Option<SurfaceSize>) {
        self.phase = Phase::Initializing;
        self.pointer = PointerState::default();
        self.frames = 0;
        self.grid = Grid::default();
        self.paths.clear();
        self.size = None;
        self.resize(size);
    }

    /// Listeners are attached and the first frame is scheduled.
    pub fn start(&mut self) {
        if self.phase == Phase::Initializing {
            self.phase = Phase::Running;
        }
    }

    /// Rebuild the grid for a new surface size.
    ///
    /// Returns `true` when the grid was replaced. Callers must then replace
    /// every drawable path so the surface holds exactly `line_count()` paths.
    pub fn resize(&mut self, size: Option<SurfaceSize>) -> bool {
        if self.phase == Phase::Unmounted {
            return false;
        }
        let Some(size) = size else {
            log::warn!("[waves] surface unavailable, keeping previous grid");
            return false;
        };
        self.grid = Grid::build(size);
        self.size = Some(size);
        self.paths = vec![String::new(); self.grid.line_count()];
        log::debug!(
            "[waves] grid {}x{} for {:.0}x{:.0}",
            self.grid.line_count(),
            self.grid.points_per_line(),
            size.width,
            size.height
        );
        true
    }

    /// Pointer position in surface-local coordinates.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.pointer.move_to(pos);
    }

    /// Run one frame: pointer smoothing, integration, path emission.
    ///
    /// Returns `false` (and mutates nothing) unless running.
    pub fn tick(&mut self, time_ms: f64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.pointer.advance();
        integrate(self.grid.points_mut(), &self.pointer, &self.noise, time_ms);
        for (line, out) in self.grid.lines().zip(self.paths.iter_mut()) {
            write_line_path(line, out);
        }
        self.frames += 1;
        true
    }

    pub fn teardown(&mut self) {
        self.phase = Phase::Unmounted;
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[allow(dead_code)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    pub fn line_count(&self) -> usize {
        self.grid.line_count()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
