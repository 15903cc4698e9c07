use crate::constants::{AUDIO_ID, AUDIO_TOGGLE_ID};
use crate::dom;
use scrollscape_core::audio::{PlaybackCommand, PlaybackToggle};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Hook the toggle button to the background music element.
pub fn wire_audio_toggle(document: &web::Document) {
    let Some(audio) = document
        .get_element_by_id(AUDIO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
    else {
        log::warn!("[audio] missing #{}", AUDIO_ID);
        return;
    };
    let Some(button) = document
        .get_element_by_id(AUDIO_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[audio] missing #{}", AUDIO_TOGGLE_ID);
        return;
    };

    dom::add_click_listener(document, AUDIO_TOGGLE_ID, move || {
        let toggle = PlaybackToggle::on_click(audio.paused());
        match toggle.command {
            PlaybackCommand::Play => match audio.play() {
                Ok(promise) => play_when_allowed(promise),
                Err(e) => log::warn!("[audio] play failed: {:?}", e),
            },
            PlaybackCommand::Pause => {
                if let Err(e) = audio.pause() {
                    log::warn!("[audio] pause failed: {:?}", e);
                }
            }
        }
        _ = button
            .style()
            .set_property("opacity", &toggle.button_opacity.to_string());
        log::info!("[audio] {:?}", toggle.command);
    });
}

// Autoplay policies can reject the promise; that is not fatal.
fn play_when_allowed(promise: js_sys::Promise) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[audio] playback rejected: {:?}", e);
        }
    });
}
