use scrollscape_core::clock::FrameClock;
use scrollscape_core::gpu::{FrameOutcome, GpuState};
use scrollscape_core::{InputSampler, Scene, SceneConfig, Viewport, VirtualScroll};
use winit::dpi::LogicalSize;
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

// Logical pixels per wheel line / arrow key press
const LINE_SCROLL_PX: f32 = 100.0;

/// Environment overrides, fed through the same parser as the web query string.
const ENV_KEYS: [(&str, &str); 3] = [
    ("SCROLLSCAPE_MATERIAL", "material"),
    ("SCROLLSCAPE_SEED", "seed"),
    ("SCROLLSCAPE_OVERLAP", "overlap"),
];

fn config_from_env() -> SceneConfig {
    let vars: Vec<(&str, String)> = ENV_KEYS
        .iter()
        .filter_map(|(var, key)| std::env::var(var).ok().map(|v| (*key, v)))
        .collect();
    match SceneConfig::from_pairs(vars.iter().map(|(k, v)| (*k, v.as_str()))) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SceneConfig::default()
        }
    }
}

fn viewport_of(window: &Window) -> Option<Viewport> {
    let scale = window.scale_factor() as f32;
    let size = window.inner_size();
    Viewport::new(size.width as f32 / scale, size.height as f32 / scale, scale).ok()
}

struct App<'w> {
    window: &'w Window,
    scene: Scene,
    gpu: GpuState<'w>,
    input: InputSampler,
    scroll: VirtualScroll,
    clock: FrameClock,
}

impl<'w> App<'w> {
    async fn new(window: &'w Window, config: SceneConfig) -> anyhow::Result<Self> {
        let viewport = viewport_of(window).unwrap_or_default();
        let scene = Scene::new(&config, viewport);
        let gpu = GpuState::new(window, &scene, config.gradient).await?;
        Ok(Self {
            window,
            scene,
            gpu,
            input: InputSampler::new(0.0),
            scroll: VirtualScroll::default(),
            clock: FrameClock::new(),
        })
    }

    fn scroll_by(&mut self, delta: f32) {
        let viewport = self.scene.viewport();
        let y = self
            .scroll
            .scroll_by(delta, self.scene.sections.len(), &viewport);
        self.input.record_scroll(y);
    }

    fn scroll_to(&mut self, y: f32) {
        let viewport = self.scene.viewport();
        let y = self.scroll.scroll_to(y, self.scene.sections.len(), &viewport);
        self.input.record_scroll(y);
    }

    fn on_key(&mut self, key: &Key) {
        let page = self.scene.viewport().height;
        match key {
            Key::Named(NamedKey::ArrowDown) => self.scroll_by(LINE_SCROLL_PX),
            Key::Named(NamedKey::ArrowUp) => self.scroll_by(-LINE_SCROLL_PX),
            Key::Named(NamedKey::PageDown) | Key::Named(NamedKey::Space) => self.scroll_by(page),
            Key::Named(NamedKey::PageUp) => self.scroll_by(-page),
            Key::Named(NamedKey::Home) => self.scroll_to(0.0),
            Key::Named(NamedKey::End) => self.scroll_to(f32::MAX),
            _ => {}
        }
    }

    fn on_wheel(&mut self, delta: MouseScrollDelta) {
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * LINE_SCROLL_PX,
            MouseScrollDelta::PixelDelta(p) => (p.y / self.window.scale_factor()) as f32,
        };
        // wheel up scrolls towards the top of the page
        self.scroll_by(-dy);
    }

    fn on_cursor(&mut self, x_px: f64, y_px: f64) {
        let scale = self.window.scale_factor();
        let viewport = self.scene.viewport();
        self.input
            .record_pointer((x_px / scale) as f32, (y_px / scale) as f32, &viewport);
    }

    fn on_resize(&mut self) {
        let Some(viewport) = viewport_of(self.window) else {
            return;
        };
        self.scene.resize(viewport);
        // keep the offset inside the (possibly shorter) page
        self.scroll_by(0.0);
    }

    fn frame(&mut self) -> FrameOutcome {
        let dt_sec = self.clock.tick();
        let snapshot = self.input.snapshot();
        let outcome = self.scene.tick(dt_sec, &snapshot);
        self.gpu.render_scene(&mut self.scene, &outcome.camera)
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = config_from_env();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Scrollscape (native)")
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
        .expect("window");

    let mut app = match pollster::block_on(App::new(&window, config)) {
        Ok(app) => app,
        Err(e) => {
            log::error!("gpu init error: {:#}", e);
            return;
        }
    };

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => app.on_resize(),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::MouseWheel { delta, .. } => app.on_wheel(delta),
                WindowEvent::CursorMoved { position, .. } => app.on_cursor(position.x, position.y),
                WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                    app.on_key(&event.logical_key)
                }
                _ => {}
            },
            Event::AboutToWait => match app.frame() {
                FrameOutcome::Fatal => elwt.exit(),
                _ => app.window.request_redraw(),
            },
            _ => {}
        })
        .unwrap();
}
