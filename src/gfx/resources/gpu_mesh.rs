//! GPU-side copies of generated meshes
//!
//! The generators only ever produce CPU buffers. A [`GpuMeshHandle`] is the
//! renderer's exclusive owner of the uploaded copies: creating one uploads
//! the vertex and index data, dropping it destroys both buffers.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::gfx::geometry::{GeometryData, GeometryError, RevolvedSurface};
use crate::gfx::scene::vertex::Vertex3D;

/// Uploaded vertex and index buffers for one mesh
pub struct GpuMeshHandle {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_count: u32,
}

impl GpuMeshHandle {
    /// Upload packed vertices and triangle indices
    ///
    /// # Arguments
    /// * `device` - WGPU device that owns the new buffers
    /// * `vertices` - Interleaved vertices in the [`Vertex3D`] layout
    /// * `indices` - Triangle list indices into `vertices`
    /// * `label` - Debug label prefix for both buffers
    pub fn upload(device: &wgpu::Device, vertices: &[Vertex3D], indices: &[u32], label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "Uploaded '{}': {} vertices ({} bytes), {} indices",
            label,
            vertices.len(),
            std::mem::size_of_val(vertices),
            indices.len()
        );

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len() as u32,
            index_count: indices.len() as u32,
        }
    }

    /// Upload a revolved surface
    pub fn from_surface(device: &wgpu::Device, surface: &RevolvedSurface, label: &str) -> Self {
        Self::upload(device, surface.vertices(), surface.indices(), label)
    }

    /// Pack and upload generated geometry
    pub fn from_geometry(
        device: &wgpu::Device,
        data: &GeometryData,
        label: &str,
    ) -> Result<Self, GeometryError> {
        let vertices = data.pack()?;
        Ok(Self::upload(device, &vertices, &data.indices, label))
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

impl Drop for GpuMeshHandle {
    fn drop(&mut self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

pub trait DrawMesh<'a> {
    fn draw_gpu_mesh(&mut self, mesh: &'a GpuMeshHandle);
    fn draw_gpu_mesh_instanced(&mut self, mesh: &'a GpuMeshHandle, instances: Range<u32>);
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_gpu_mesh(&mut self, mesh: &'b GpuMeshHandle) {
        self.draw_gpu_mesh_instanced(mesh, 0..1);
    }

    fn draw_gpu_mesh_instanced(&mut self, mesh: &'b GpuMeshHandle, instances: Range<u32>) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }
}
