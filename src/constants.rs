/// Wave-field tuning constants.
///
/// These keep the simulation's magic numbers in one place. Distances are in
/// surface pixels, times in milliseconds, and every rate is applied once per
/// animation frame.
// Lattice sampling step (both axes)
pub const GRID_STEP: f32 = 16.0;

// Overscan added to the surface so displaced lines never expose an edge
pub const OVERSCAN_X: f32 = 200.0;
pub const OVERSCAN_Y: f32 = 30.0;

// Noise sampling: time drift and spatial frequency per axis
pub const NOISE_TIME_DRIFT_X: f64 = 0.008;
pub const NOISE_TIME_DRIFT_Y: f64 = 0.003;
pub const NOISE_FREQ_X: f64 = 0.003;
pub const NOISE_FREQ_Y: f64 = 0.002;
pub const NOISE_GAIN: f64 = 8.0; // raw noise -> angle in radians

// Idle wave amplitude
pub const WAVE_AMPLITUDE_X: f32 = 12.0;
pub const WAVE_AMPLITUDE_Y: f32 = 6.0;

// Pointer influence
pub const POINTER_MIN_RADIUS: f32 = 175.0;
pub const POINTER_FALLOFF: f32 = 0.001; // cos(d * falloff) term
pub const POINTER_IMPULSE: f32 = 0.00035;

// Damped spring pulling the cursor offset back to rest
pub const SPRING_STIFFNESS: f32 = 0.01;
pub const SPRING_DAMPING: f32 = 0.95; // velocity multiplier per frame
pub const CURSOR_OFFSET_LIMIT: f32 = 50.0;

// Pointer smoothing
pub const POINTER_SMOOTHING: f32 = 0.1; // new = old + (target - old) * k
pub const POINTER_SPEED_MAX: f32 = 100.0;
pub const POINTER_START: [f32; 2] = [-10.0, 0.0]; // raw position before any event

// Path styling
pub const STROKE_WIDTH: &str = "1.2";
pub const STROKE_OPACITY: &str = "0.7";

// Inline properties set on the host container while mounted
pub const CONTAINER_STYLE_PROPS: [&str; 4] = ["background", "overflow", "--x", "--y"];

// Default look
pub const GRADIENT_ID: &str = "waveGradient";
pub const DEFAULT_STROKE: &str = "url(#waveGradient)";
pub const DEFAULT_BACKGROUND: &str = "#000000";
pub const DEFAULT_POINTER_SIZE: f32 = 0.5;

// Vertical gradient stops: (offset, color)
pub const GRADIENT_STOPS: [(&str, &str); 4] = [
    ("0%", "#e0f7ff"),
    ("20%", "#00ffff"),
    ("50%", "#0066cc"),
    ("100%", "#000033"),
];
