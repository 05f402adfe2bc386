//! # Vertex Data Structures
//!
//! This module defines the GPU vertex format shared by every generated
//! surface: position, normal and texture coordinates, 32 bytes per vertex.

use std::mem;

/// A 3D vertex with position, normal and texture coordinate data.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute fixes the layout the renderer binds against:
///
/// | attribute    | byte offset | shader location |
/// |--------------|-------------|-----------------|
/// | `position`   | 0           | 0               |
/// | `normal`     | 12          | 1               |
/// | `tex_coords` | 24          | 2               |
///
/// # Examples
///
/// ```no_run
/// use lathe::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coords: [0.5, 0.5],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
}

const _: () = assert!(mem::size_of::<Vertex3D>() == 32);

impl Vertex3D {
    /// Byte offset of the normal attribute
    pub const NORMAL_OFFSET: wgpu::BufferAddress = mem::size_of::<[f32; 3]>() as wgpu::BufferAddress;
    /// Byte offset of the texture coordinate attribute
    pub const TEX_COORDS_OFFSET: wgpu::BufferAddress =
        mem::size_of::<[f32; 6]>() as wgpu::BufferAddress;

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: Self::NORMAL_OFFSET,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: Self::TEX_COORDS_OFFSET,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x2,
        },
    ];

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lathe::gfx::scene::vertex::Vertex3D;
    ///
    /// let layout = Vertex3D::desc();
    /// assert_eq!(layout.array_stride, 32);
    /// ```
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets() {
        let layout = Vertex3D::desc();
        assert_eq!(layout.array_stride, 32);

        let offsets: Vec<_> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);

        let locations: Vec<_> = layout.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }

    #[test]
    fn test_cast_to_floats() {
        let vertex = Vertex3D {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 0.0, 1.0],
            tex_coords: [0.5, 0.25],
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&vertex));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.5, 0.25]);
    }
}
