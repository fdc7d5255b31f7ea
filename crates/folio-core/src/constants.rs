// Shared scene tuning constants used by the core and the web frontend.

// Population
pub const BODY_COUNT: usize = 50; // spheres per accent batch
pub const ACCENT_INTERVAL_SECS: f64 = 3.0; // time between accent changes
pub const SPAWN_SPREAD: f32 = 20.0; // spawn cube edge length, centred on the origin

// Frame stepping
pub const MAX_FRAME_DT: f32 = 0.1; // cap on a single step after a stall

// Per-body behaviour
pub const ATTRACTION: f32 = 0.2; // impulse per unit of distance from the origin
pub const COLOR_SMOOTH_TIME: f32 = 0.2; // seconds to (roughly) reach the target colour
pub const COLOR_EPSILON: f32 = 0.001; // per-channel snap distance

// Rigid bodies
pub const BODY_RADIUS: f32 = 1.0;
pub const LINEAR_DAMPING: f32 = 4.0;
pub const ANGULAR_DAMPING: f32 = 1.0;
pub const FRICTION: f32 = 0.1;
pub const POINTER_RADIUS: f32 = 1.0;

// Camera (perspective, looking down -Z at the origin)
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOV_DEG: f32 = 17.5;
pub const CAMERA_NEAR: f32 = 10.0;
pub const CAMERA_FAR: f32 = 40.0;
