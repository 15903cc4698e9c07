//! wgpu renderer shared by the web and native hosts.
//!
//! [`GpuState`] owns the surface and every pipeline; [`WgpuFrame`] is the
//! per-frame [`FrameRenderer`] that turns pending clears into load ops.

mod background;
mod helpers;
mod meshes;
mod particles;
mod targets;

use crate::camera::CameraTransform;
use crate::constants::{CAMERA_FOV_DEG, LIGHT_DIRECTION, LIGHT_INTENSITY, PARTICLE_SIZE};
use crate::error::{Result, SceneError};
use crate::gradient::Gradient;
use crate::mesh::SECTION_SHAPES;
use crate::scene::Scene;
use crate::sequencer::{self, FrameRenderer, SceneFrame, BACKGROUND_PASS, MAIN_PASS};
use crate::viewport::Viewport;
use background::BackgroundResources;
use glam::Vec3;
use meshes::MeshResources;
use particles::ParticleResources;
use targets::DepthTarget;

/// Uniform block shared by `toon.wgsl` and `particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub particle_model: [[f32; 4]; 4],
    pub material: [f32; 4],
    pub light: [f32; 4],
    pub particle: [f32; 4],
}

impl FrameUniforms {
    pub fn from_frame(frame: &SceneFrame) -> Self {
        let light = Vec3::from(LIGHT_DIRECTION).normalize_or_zero();
        // matches the on-screen size of an attenuated point sprite
        let half_size = 0.5 * PARTICLE_SIZE * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
        Self {
            view_proj: frame.view_projection.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            particle_model: frame.particle_model.to_cols_array_2d(),
            material: frame.material_color,
            light: light.extend(LIGHT_INTENSITY).to_array(),
            particle: [half_size, 0.0, 0.0, 0.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// Surface was reconfigured or timed out; try again next frame.
    Skipped,
    /// The device is out of memory; stop rendering.
    Fatal,
}

pub struct GpuState<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    background: BackgroundResources,
    meshes: MeshResources,
    particles: ParticleResources,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    gradient: Gradient,
    clear_color: wgpu::Color,
}

impl<'w> GpuState<'w> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        scene: &Scene,
        gradient: Gradient,
    ) -> Result<Self> {
        let (width, height) = scene.viewport().physical_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(SceneError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or(SceneError::NoAdapter)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] {:?} {}x{} {:?}", adapter.get_info().backend, width, height, format);

        let depth = DepthTarget::new(&device, width, height);
        let background =
            background::create_background_resources(&device, format, &gradient.uniforms((width, height)));

        let frame_bgl = helpers::uniform_bind_group_layout(
            &device,
            "frame_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let frame_buffer = helpers::uniform_buffer(
            &device,
            "frame_uniforms",
            &FrameUniforms::from_frame(&scene.frame(&scene.rig().transform(&scene.viewport()))),
        );
        let frame_bind_group = helpers::uniform_bind_group(&device, "frame_bg", &frame_bgl, &frame_buffer);

        let meshes = meshes::create_mesh_resources(&device, format, &frame_bgl, &SECTION_SHAPES);
        let particles =
            particles::create_particle_resources(&device, format, &frame_bgl, &scene.particles.positions);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            background,
            meshes,
            particles,
            frame_buffer,
            frame_bind_group,
            gradient,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Reconfigure the surface and depth target and refresh the gradient
    /// resolution, all before the next frame is recorded.
    pub fn resize(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.physical_size();
        if width == 0 || height == 0 {
            return;
        }
        if (width, height) != self.size() {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
        if self.depth.size() != (width, height) {
            self.depth.recreate(&self.device, width, height);
        }
        self.background
            .write(&self.queue, &self.gradient.uniforms((width, height)));
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn begin_frame(&self) -> std::result::Result<WgpuFrame<'_, 'w>, wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });
        Ok(WgpuFrame {
            gpu: self,
            surface_texture,
            view,
            encoder,
            auto_clear: true,
            color_clear_pending: false,
            depth_clear_pending: false,
        })
    }

    /// Record and present one frame, recovering from a lost surface.
    pub fn present(&mut self, frame: &SceneFrame) -> FrameOutcome {
        match self.begin_frame() {
            Ok(mut f) => {
                sequencer::render_frame(&mut f, frame);
                f.finish();
                FrameOutcome::Presented
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.reconfigure();
                FrameOutcome::Skipped
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                FrameOutcome::Fatal
            }
            Err(e) => {
                log::warn!("[gpu] frame skipped: {:?}", e);
                FrameOutcome::Skipped
            }
        }
    }

    /// Apply any pending resize, then draw the scene through `camera`.
    pub fn render_scene(&mut self, scene: &mut Scene, camera: &CameraTransform) -> FrameOutcome {
        if let Some(viewport) = scene.take_pending_resize() {
            self.resize(&viewport);
        }
        self.present(&scene.frame(camera))
    }
}

/// One frame in flight. Drawing calls record passes into a single encoder.
pub struct WgpuFrame<'a, 'w> {
    gpu: &'a GpuState<'w>,
    surface_texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    encoder: wgpu::CommandEncoder,
    auto_clear: bool,
    color_clear_pending: bool,
    depth_clear_pending: bool,
}

impl WgpuFrame<'_, '_> {
    fn take_load_ops(&mut self) -> (wgpu::LoadOp<wgpu::Color>, wgpu::LoadOp<f32>) {
        if self.auto_clear {
            self.color_clear_pending = true;
            self.depth_clear_pending = true;
        }
        let color = if std::mem::take(&mut self.color_clear_pending) {
            wgpu::LoadOp::Clear(self.gpu.clear_color)
        } else {
            wgpu::LoadOp::Load
        };
        let depth = if std::mem::take(&mut self.depth_clear_pending) {
            wgpu::LoadOp::Clear(1.0)
        } else {
            wgpu::LoadOp::Load
        };
        (color, depth)
    }

    pub fn finish(self) {
        self.gpu.queue.submit(Some(self.encoder.finish()));
        self.surface_texture.present();
    }
}

fn begin_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    label: &str,
    color: &wgpu::TextureView,
    depth: &wgpu::TextureView,
    color_load: wgpu::LoadOp<wgpu::Color>,
    depth_load: wgpu::LoadOp<f32>,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: color,
            resolve_target: None,
            ops: wgpu::Operations {
                load: color_load,
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: depth,
            depth_ops: Some(wgpu::Operations {
                load: depth_load,
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        timestamp_writes: None,
        occlusion_query_set: None,
    })
}

impl FrameRenderer for WgpuFrame<'_, '_> {
    fn set_auto_clear(&mut self, enabled: bool) {
        self.auto_clear = enabled;
    }

    fn clear(&mut self) {
        self.color_clear_pending = true;
        self.depth_clear_pending = true;
    }

    fn render_background(&mut self) {
        let (color_load, depth_load) = self.take_load_ops();
        let gpu = self.gpu;
        let mut rpass = begin_pass(
            &mut self.encoder,
            BACKGROUND_PASS.label,
            &self.view,
            &gpu.depth.view,
            color_load,
            depth_load,
        );
        rpass.set_pipeline(&gpu.background.pipeline);
        rpass.set_bind_group(0, &gpu.background.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn clear_depth(&mut self) {
        self.depth_clear_pending = true;
    }

    fn render_main(&mut self, frame: &SceneFrame) {
        let gpu = self.gpu;
        gpu.queue.write_buffer(
            &gpu.frame_buffer,
            0,
            bytemuck::bytes_of(&FrameUniforms::from_frame(frame)),
        );
        gpu.meshes.write_models(&gpu.queue, &frame.object_models);

        let (color_load, depth_load) = self.take_load_ops();
        let mut rpass = begin_pass(
            &mut self.encoder,
            MAIN_PASS.label,
            &self.view,
            &gpu.depth.view,
            color_load,
            depth_load,
        );
        gpu.meshes
            .draw(&mut rpass, &gpu.frame_bind_group, frame.object_models.len());
        gpu.particles.draw(&mut rpass, &gpu.frame_bind_group);
    }
}
