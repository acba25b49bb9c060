use glam::Vec3;

// Default tuning shared by the stage and the native driver.

// Tempo
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const DEFAULT_BPM: u32 = 120;
pub const DEFAULT_BEATS_PER_MEASURE: u32 = 4;

// Pitch domain (playback rate offset chosen per ball)
pub const MIN_PITCH: f32 = -3.0;
pub const MAX_PITCH: f32 = 3.0;
pub const DRAFT_PITCH: f32 = 1.0; // pitch of a freshly opened draft
pub const NEUTRAL_AUDIO_PITCH: f32 = 1.0; // playback pitch after cleanup

// Pitch-driven outputs; higher pitch maps toward the min end
pub const MIN_BALL_MASS: f32 = 1.0;
pub const MAX_BALL_MASS: f32 = 10.0;
pub const MIN_BALL_SCALE: f32 = 0.5;
pub const MAX_BALL_SCALE: f32 = 10.0;
pub const MIN_BOUNCE_HEIGHT: f32 = 5.0;
pub const MAX_BOUNCE_HEIGHT: f32 = 20.0;

// Spawn layouts
pub const LINE_START: Vec3 = Vec3::ZERO;
pub const LINE_SPACING: f32 = 12.0;
pub const CIRCLE_CENTER: Vec3 = Vec3::ZERO;
pub const CIRCLE_RADIUS: f32 = 25.0;
pub const CIRCLE_SPACING_DEGREES: f32 = 30.0;
pub const CIRCLE_START_DEGREES: f32 = 180.0; // first ball sits on -X

// Upper bound on live balls
pub const DEFAULT_MAX_BALLS: usize = 12;

// Colors
pub const NEUTRAL_COLOR: [f32; 3] = [1.0, 1.0, 1.0]; // cleaned-up ball
pub const DEFAULT_CLIP_COLORS: [[f32; 3]; 4] = [
    [0.9, 0.3, 0.3], // kick, red-ish
    [0.3, 0.9, 0.4], // snare, green-ish
    [0.3, 0.5, 0.9], // hat, blue-ish
    [0.9, 0.8, 0.3], // clap, yellow-ish
];
pub const DEFAULT_CLIP_NAMES: [&str; 4] = ["kick", "snare", "hat", "clap"];
