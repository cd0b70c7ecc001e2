// --- Window Config ---
#[cfg(feature = "window")]
pub const WINDOW_TITLE: &str = "MicroWave Simulator";
pub const SCALE: u32 = 1; // Pixel scale of the simulator window
pub const MARGIN: u32 = 30; // Page space around the waveform canvas
#[cfg(feature = "window")]
pub const FRAME_DELAY_MS: u64 = 16;

// --- Widget Defaults ---
pub const BAR_WIDTH: f32 = 3.0;
pub const GAP: f32 = 6.0;
pub const CANVAS_HEIGHT: f32 = 120.0;

// --- Keyboard Seeking ---
#[cfg(feature = "window")]
pub const SEEK_STEP: f32 = 0.05; // Progress change per arrow key press

// --- Demo Peaks ---
pub const DEMO_FRAMES: usize = 4_000; // Columns in the synthesized analysis
pub const DEMO_BEAT_FRAMES: usize = 250; // Columns between synthesized kicks
