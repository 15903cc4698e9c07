// Shared scene and tuning constants used by both web and native frontends.

// Scene layout
pub const SECTION_COUNT: usize = 7;
pub const SECTION_SPACING: f32 = 4.0; // world units between consecutive sections
pub const SECTION_OFFSET_X: f32 = 2.0; // sections alternate between +x and -x

// Camera
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Parallax
pub const PARALLAX_AMPLITUDE: f32 = 0.5; // rig offset at the viewport edge
pub const PARALLAX_SMOOTHING_RATE: f32 = 5.0; // 1/s, first-order low-pass

// Section transition tween
pub const SECTION_SPIN_DELTA: [f32; 3] = [6.0, 3.0, 1.5]; // radians, additive
pub const SECTION_SPIN_DURATION_SEC: f32 = 1.5;

// Ambient spin (radians per second)
pub const AMBIENT_SPIN_X: f32 = 0.1;
pub const AMBIENT_SPIN_Y: f32 = 0.12;
pub const PARTICLE_SPIN_Y: f32 = 0.02;

// Particles
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent of the field
pub const PARTICLE_SIZE: f32 = 0.1; // world-space sprite size
pub const DEFAULT_PARTICLE_SEED: u64 = 7;

// Lighting
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 0.0];
pub const LIGHT_INTENSITY: f32 = 3.0;

// Material
pub const DEFAULT_MATERIAL_COLOR: &str = "#ffeded";

// Background gradient (bottom, middle, top)
pub const GRADIENT_COLORS: [&str; 3] = ["#FF9A8B", "#FF6A88", "#FF99AC"];
pub const GRADIENT_SPLIT: f32 = 0.55; // fraction of screen height for color1 -> color2

// Renderer
pub const MAX_PIXEL_RATIO: f32 = 2.0;
