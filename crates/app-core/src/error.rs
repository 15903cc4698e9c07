use thiserror::Error;

/// Recoverable failures surfaced by the scene core and its renderer.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),
    #[error("invalid config value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, SceneError>;
