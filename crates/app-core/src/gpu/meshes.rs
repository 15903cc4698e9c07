use super::{helpers, targets};
use crate::mesh::{MeshVertex, Shape};
use crate::sequencer::MAIN_PASS;
use glam::Mat4;

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

/// One mesh per section; model matrices go through a per-instance buffer
/// indexed by section.
pub(crate) struct MeshResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) meshes: Vec<GpuMesh>,
    pub(crate) instance_buffer: wgpu::Buffer,
}

impl MeshResources {
    pub(crate) fn write_models(&self, queue: &wgpu::Queue, models: &[Mat4]) {
        let n = models.len().min(self.meshes.len());
        let cols: Vec<[f32; 16]> = models[..n].iter().map(Mat4::to_cols_array).collect();
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&cols));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, frame_bg: &wgpu::BindGroup, count: usize) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, frame_bg, &[]);
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        for (i, mesh) in self.meshes.iter().take(count).enumerate() {
            let i = i as u32;
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, i..i + 1);
        }
    }
}

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const MODEL_ATTRIBUTES: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4];

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    frame_bgl: &wgpu::BindGroupLayout,
    shapes: &[Shape],
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("toon_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::TOON_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("toon_pl"),
        bind_group_layouts: &[frame_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("toon_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRIBUTES,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 16]>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &MODEL_ATTRIBUTES,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(targets::depth_stencil_state(&MAIN_PASS, None)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_toon"),
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

    let meshes: Vec<GpuMesh> = shapes
        .iter()
        .map(|shape| {
            let buffers = shape.build();
            GpuMesh {
                vertex_buffer: helpers::vertex_buffer(device, "mesh_vertices", &buffers.vertices),
                index_buffer: helpers::index_buffer(device, "mesh_indices", &buffers.indices),
                index_count: buffers.indices.len() as u32,
            }
        })
        .collect();
    let identity = vec![Mat4::IDENTITY.to_cols_array(); meshes.len().max(1)];
    let instance_buffer = helpers::vertex_buffer(device, "mesh_models", &identity);

    MeshResources {
        pipeline,
        meshes,
        instance_buffer,
    }
}
