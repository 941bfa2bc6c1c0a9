// Shared motion tuning constants used by both web and native frontends.

// Scroll telemetry
pub const SCROLL_START_PX: f32 = 0.0; // continuous header morph begins here
pub const SCROLL_END_PX: f32 = 100.0; // ...and is complete here
pub const SCROLLED_THRESHOLD_PX: f32 = 20.0; // binary "scrolled" cutoff, independent of the window above

// Spring defaults
pub const SPRING_STIFFNESS: f32 = 150.0;
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_MASS: f32 = 0.1;
pub const SPRING_REST_DELTA: f32 = 0.001; // snap to target below this distance and speed
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_TICK_SEC: f32 = 0.1; // longer gaps (tab switches) are truncated

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 1.0 / 30.0;

// Parallax
pub const PARALLAX_FACTOR: f32 = 1.0;
pub const PARALLAX_LIMIT_PX: f32 = 20.0; // offset at the viewport edge for factor 1
pub const GLARE_MIN_OPACITY: f32 = 0.05;
pub const GLARE_OPACITY_GAIN: f32 = 0.15;
pub const GLARE_CENTER_PCT: f32 = 50.0;
pub const GLARE_SPAN_PCT: f32 = 100.0;

// Header morph
pub const HEADER_HEIGHT_PX: (f32, f32) = (90.0, 70.0);
pub const HEADER_BACKDROP_OPACITY: (f32, f32) = (0.0, 0.85);

// Carousel
pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;
