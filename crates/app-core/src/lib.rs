pub mod audio;
pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod gpu;
pub mod gradient;
pub mod input;
pub mod mesh;
pub mod rotation;
pub mod scene;
pub mod section;
pub mod sequencer;
pub mod tween;
pub mod viewport;

// Shaders bundled as string constants
pub static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");
pub static TOON_WGSL: &str = include_str!("../shaders/toon.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use color::Rgb;
pub use config::SceneConfig;
pub use error::{Result, SceneError};
pub use input::{CursorState, InputSampler, InputSnapshot, VirtualScroll};
pub use scene::{Scene, TickOutcome};
pub use section::{SectionTracker, TransitionEvent};
pub use sequencer::{render_frame, FrameRenderer, SceneFrame};
pub use viewport::Viewport;
