use scrollscape_core::clock::FrameClock;
use scrollscape_core::gpu::{FrameOutcome, GpuState};
use scrollscape_core::{InputSampler, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub input: Rc<RefCell<InputSampler>>,
    pub gpu: GpuState<'static>,
    pub clock: FrameClock,
    pub stopped: bool,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<Scene>>, input: Rc<RefCell<InputSampler>>, gpu: GpuState<'static>) -> Self {
        Self {
            scene,
            input,
            gpu,
            clock: FrameClock::new(),
            stopped: false,
        }
    }

    pub fn frame(&mut self) {
        if self.stopped {
            return;
        }
        let dt_sec = self.clock.tick();
        let snapshot = self.input.borrow().snapshot();

        let mut scene = self.scene.borrow_mut();
        let outcome = scene.tick(dt_sec, &snapshot);
        if self.gpu.render_scene(&mut scene, &outcome.camera) == FrameOutcome::Fatal {
            log::error!("[gpu] stopping render loop");
            self.stopped = true;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if !frame_ctx_tick.borrow().stopped {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
