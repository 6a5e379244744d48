use crate::camera::Camera;
use crate::math::srgb_to_linear;
use crate::scene::Scene;

pub const FOG_START: f32 = 10.0;
pub const FOG_END: f32 = 80.0;

/// Per-frame uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye_position: [f32; 3],
    pub min_ambient: f32,
    pub light_position: [f32; 3],
    pub light_power: f32,
    pub light_color: [f32; 4],
    pub fog_color: [f32; 4],
    pub fog_start: f32,
    pub fog_end: f32,
    pub _pad: [f32; 2],
}

impl FrameUniform {
    pub fn new(camera: &Camera, scene: &Scene) -> Self {
        let fog_end = FOG_END.min(camera.far());
        Self {
            view_proj: camera.camera_matrix().to_cols_array_2d(),
            eye_position: camera.position().to_array(),
            min_ambient: scene.params.min_ambient_light,
            light_position: scene.light.position.to_array(),
            light_power: scene.params.light_power,
            light_color: srgb_to_linear(scene.light.color),
            fog_color: srgb_to_linear(scene.background),
            fog_start: FOG_START.min(fog_end * 0.5),
            fog_end,
            _pad: [0.0; 2],
        }
    }
}

/// Vertex of the line-list geometry
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn new(position: glam::Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
