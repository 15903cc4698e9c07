use crate::constants::RESIZE_EVENT;
use crate::dom;
use scrollscape_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Resize the canvas backing store now; the GPU side follows before the
/// next frame is drawn.
pub fn wire_resize(canvas: web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    dom::add_window_listener(RESIZE_EVENT, move |_ev: web::Event| {
        let Some(w) = web::window() else {
            return;
        };
        let viewport = dom::current_viewport(&w);
        dom::sync_canvas_backing_size(&canvas, &viewport);
        scene.borrow_mut().resize(viewport);
    });
}
