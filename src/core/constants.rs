// Defaults and tuning constants for the scroll animator and the frame-rate
// estimator.

// Option defaults
pub const DEFAULT_DURATION_INCREASE_FACTOR: f64 = 1.1;
pub const DEFAULT_SCROLL_SPEED_MULTIPLIER: f64 = 12.0;
pub const DEFAULT_SCROLL_DURATION_MS: u32 = 700;
pub const DEFAULT_LIMIT_DURATION_MS: u32 = 2500;
pub const DEFAULT_ENABLE_LIMIT_DURATION: bool = true;
pub const DEFAULT_TOGGLE_BUTTON_SELECTOR: &str = ".scroll-mode";
pub const DEFAULT_ACTIVE_STATE_CLASS_NAME: &str = "scroll-enabled";

// Easing curve control points (x, y) for the cubic Bezier
pub const BEZIER_X: [f64; 4] = [0.0, 1.0, 1.0, 3.0];
pub const BEZIER_Y: [f64; 4] = [1.0, 1.0, 0.0, 0.0];

// Rounding grids
pub const VELOCITY_PRECISION: f64 = 10_000.0; // 4 decimals
pub const DELTA_PRECISION: f64 = 10.0; // 1 decimal (px)

// Frame-rate calibration
pub const FIRST_WINDOW_MS: u32 = 500;
pub const WARMUP_WINDOW_MAX_MS: u32 = 2000;
pub const SAMPLE_WINDOW_MS: u32 = 3000; // only windows of this length are kept
pub const CALIBRATION_SAMPLES: usize = 3;

// Used until a first window completes
pub const FALLBACK_FRAME_RATE: u32 = 60;
