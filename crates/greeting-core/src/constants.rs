// Tuning constants for the effects and the presentation timeline.
// Times are milliseconds since the relevant trigger (mount or click).

// Phase timeline
pub const INTRO_DURATION_MS: u64 = 6000; // cutscene length before main content
pub const SURPRISE_BURST_DELAY_MS: u64 = 1200; // click -> firework burst + shake
pub const SURPRISE_FINAL_DELAY_MS: u64 = 2200; // click -> final message reveal
pub const SHAKE_DURATION_MS: u64 = 500;

// Carousel
pub const PHOTO_COUNT: usize = 10;
pub const CAROUSEL_INTERVAL_MS: u64 = 3000;

// Starfield
pub const STAR_COUNT: usize = 220;
pub const STAR_RADIUS_MIN: f32 = 0.2;
pub const STAR_RADIUS_MAX: f32 = 2.0;
pub const STAR_OPACITY_MIN: f32 = 0.1;
pub const STAR_OPACITY_MAX: f32 = 1.0;

// Fireworks
pub const BURST_PARTICLES: usize = 110;
pub const PARTICLE_SPEED_MAX: f32 = 3.0; // dx, dy uniform in [-max, max]
pub const PARTICLE_LIFE: i32 = 100; // frames
pub const PARTICLE_SIZE: f32 = 2.0;

// Streaks
pub const STREAK_COUNT: usize = 80;
pub const STREAK_SPEED_MIN: f32 = 20.0;
pub const STREAK_SPEED_MAX: f32 = 45.0;
pub const STREAK_LENGTH_MIN: f32 = 40.0;
pub const STREAK_LENGTH_MAX: f32 = 100.0;
pub const STREAK_LINE_WIDTH: f32 = 2.0;
pub const STREAK_LIGHTNESS: f32 = 70.0; // percent
pub const STREAK_LIFETIME_MS: u64 = 1500; // hard self-expiry after mount

// Hearts
pub const HEART_INTERVAL_MS: u64 = 480;
pub const HEART_ANIMATION_MS: u64 = 5000;
pub const HEART_REMOVAL_GRACE_MS: u64 = 100; // keep the node a little past the animation
pub const HEART_SIZE_MIN_PX: f32 = 20.0;
pub const HEART_SIZE_MAX_PX: f32 = 40.0;

// Hue range shared by fireworks and streaks
pub const HUE_MAX: f32 = 360.0;
