use crate::constants::SCROLL_EVENT;
use crate::dom;
use scrollscape_core::InputSampler;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Record the page's vertical scroll offset; the next tick reads the latest.
pub fn wire_scroll(input: Rc<RefCell<InputSampler>>) {
    dom::add_window_listener(SCROLL_EVENT, move |_ev: web::Event| {
        if let Some(w) = web::window() {
            let y = w.scroll_y().unwrap_or(0.0) as f32;
            input.borrow_mut().record_scroll(y);
        }
    });
}
