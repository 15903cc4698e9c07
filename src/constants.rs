/// DOM element ids the page is expected to provide.
pub const CANVAS_ID: &str = "scene-canvas";
pub const AUDIO_ID: &str = "background-music";
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";

// Window events the frontend listens to
pub const SCROLL_EVENT: &str = "scroll";
pub const POINTER_MOVE_EVENT: &str = "mousemove";
pub const RESIZE_EVENT: &str = "resize";
