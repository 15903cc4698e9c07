//! Background music toggle logic. The host owns the actual media element.

pub const OPACITY_PLAYING: f32 = 1.0;
pub const OPACITY_PAUSED: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// What to do when the toggle button is clicked, given the element's state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackToggle {
    pub command: PlaybackCommand,
    pub button_opacity: f32,
}

impl PlaybackToggle {
    pub fn on_click(currently_paused: bool) -> Self {
        if currently_paused {
            Self {
                command: PlaybackCommand::Play,
                button_opacity: OPACITY_PLAYING,
            }
        } else {
            Self {
                command: PlaybackCommand::Pause,
                button_opacity: OPACITY_PAUSED,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_element_starts_playing_at_full_opacity() {
        let t = PlaybackToggle::on_click(true);
        assert_eq!(t.command, PlaybackCommand::Play);
        assert_eq!(t.button_opacity, 1.0);
    }

    #[test]
    fn playing_element_pauses_and_dims() {
        let t = PlaybackToggle::on_click(false);
        assert_eq!(t.command, PlaybackCommand::Pause);
        assert_eq!(t.button_opacity, 0.5);
    }
}
