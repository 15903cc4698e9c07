#![cfg(target_arch = "wasm32")]
use scrollscape_core::gpu::GpuState;
use scrollscape_core::{InputSampler, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollscape-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let search = window.location().search().unwrap_or_default();
    let scene_config = config::scene_config_from_search(&search);

    let viewport = dom::current_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let mut scene = Scene::new(&scene_config, viewport);
    let gpu = GpuState::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        &scene,
        scene_config.gradient,
    )
    .await
    .map_err(|e| anyhow::anyhow!("WebGPU init error: {}", e))?;

    let initial_scroll = window.scroll_y().unwrap_or(0.0) as f32;
    scene.seed_scroll(initial_scroll);
    let scene = Rc::new(RefCell::new(scene));
    let input = Rc::new(RefCell::new(InputSampler::new(initial_scroll)));

    events::scroll::wire_scroll(input.clone());
    events::pointer::wire_pointer_move(input.clone());
    events::resize::wire_resize(canvas.clone(), scene.clone());
    audio::wire_audio_toggle(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(scene, input, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
