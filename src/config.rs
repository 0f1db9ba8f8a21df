use crate::constants::{DEFAULT_BACKGROUND, DEFAULT_POINTER_SIZE, DEFAULT_STROKE};

/// Per-instance options supplied by the embedding page.
#[derive(Clone, Debug, PartialEq)]
pub struct WavesConfig {
    pub stroke_color: String,
    pub background_color: String,
    /// Accepted for API compatibility; the integrator does not read it.
    pub pointer_size: f32,
    /// Noise seed. `None` draws a fresh seed on every mount.
    pub seed: Option<u32>,
}

impl Default for WavesConfig {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            pointer_size: DEFAULT_POINTER_SIZE,
            seed: None,
        }
    }
}

impl WavesConfig {
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn with_pointer_size(mut self, size: f32) -> Self {
        if size.is_finite() {
            self.pointer_size = size;
        }
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Merge optional values coming from JS; blank strings keep the default.
    pub fn from_options(
        stroke_color: Option<String>,
        background_color: Option<String>,
        pointer_size: Option<f32>,
        seed: Option<u32>,
    ) -> Self {
        let mut cfg = Self::default();
        if let Some(c) = stroke_color.filter(|c| !c.trim().is_empty()) {
            cfg = cfg.with_stroke_color(c);
        }
        if let Some(c) = background_color.filter(|c| !c.trim().is_empty()) {
            cfg = cfg.with_background_color(c);
        }
        if let Some(s) = pointer_size {
            cfg = cfg.with_pointer_size(s);
        }
        if let Some(seed) = seed {
            cfg = cfg.with_seed(seed);
        }
        cfg
    }

    #[inline]
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
