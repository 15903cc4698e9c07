use crate::constants::POINTER_MOVE_EVENT;
use crate::dom;
use scrollscape_core::InputSampler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_move(input: Rc<RefCell<InputSampler>>) {
    dom::add_window_listener(POINTER_MOVE_EVENT, move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(w) = web::window() else {
            return;
        };
        let viewport = dom::current_viewport(&w);
        input
            .borrow_mut()
            .record_pointer(mouse.client_x() as f32, mouse.client_y() as f32, &viewport);
    });
}
