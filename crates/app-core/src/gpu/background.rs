use super::{helpers, targets};
use crate::gradient::GradientUniforms;
use crate::sequencer::BACKGROUND_PASS;

pub(crate) struct BackgroundResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl BackgroundResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &GradientUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

pub(crate) fn create_background_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    initial: &GradientUniforms,
) -> BackgroundResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("background_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::BACKGROUND_WGSL.into()),
    });
    let bgl = helpers::uniform_bind_group_layout(device, "background_bgl", wgpu::ShaderStages::FRAGMENT);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("background_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("background_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(targets::depth_stencil_state(&BACKGROUND_PASS, None)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_gradient"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = helpers::uniform_buffer(device, "background_uniforms", initial);
    let bind_group = helpers::uniform_bind_group(device, "background_bg", &bgl, &uniform_buffer);

    BackgroundResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
