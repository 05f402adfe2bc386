//! # Procedural Geometry Generation
//!
//! This module generates surfaces procedurally from a handful of parameters,
//! so that curved scene pieces never need external model files.
//!
//! ## Supported Surfaces
//!
//! - **Revolved Bezier surface**: a Bezier profile swept around the Y axis,
//!   fully or partially ([`revolve`])
//! - **Curved wall**: a thick annular-sector wall with caps ([`curved_wall`])
//!
//! ## Pipeline
//!
//! Every generator fills a [`GeometryData`] (separate attribute streams plus
//! triangle indices). [`GeometryData::pack`] interleaves the streams into the
//! 32-byte vertex layout expected by [`Vertex3D::desc`].
//!
//! ## Usage
//!
//! ```rust
//! use lathe::gfx::geometry::{profiles, RevolveConfig, RevolvedSurface};
//!
//! let surface = RevolvedSurface::new(profiles::SCULPTURE_PROFILE, RevolveConfig::sculpture())
//!     .expect("reference profile is valid");
//! assert_eq!(surface.verts_per_ring(), 7);
//! ```
//!
//! [`Vertex3D::desc`]: crate::gfx::scene::vertex::Vertex3D::desc

pub mod bezier;
pub mod curved_wall;
pub mod profiles;
pub mod revolve;

pub use bezier::{binomial, BezierProfile, CurveSample};
pub use curved_wall::{generate_curved_wall, CurvedWallConfig};
pub use revolve::{
    build_indices, NormalPolicy, RevolutionRing, RevolveConfig, RevolvedSurface, Winding,
};

use crate::gfx::scene::vertex::Vertex3D;

/// Number of `f32` values per packed vertex: position, normal, texture coordinates.
pub const VERTEX_FLOATS: usize = 8;

/// Byte distance between consecutive packed vertices.
pub const VERTEX_STRIDE: usize = VERTEX_FLOATS * std::mem::size_of::<f32>();

/// Largest vertex count addressable by `u32` indices.
pub const MAX_MESH_VERTICES: u64 = u32::MAX as u64 + 1;

/// Reject vertex budgets that `u32` indices cannot address
pub(crate) fn check_vertex_budget(vertices: u64) -> Result<(), GeometryError> {
    if vertices > MAX_MESH_VERTICES {
        return Err(GeometryError::MeshTooLarge { vertices });
    }
    Ok(())
}

/// Configuration errors raised before any geometry is generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("control polygon requires at least 2 points, got {count}")]
    TooFewControlPoints { count: usize },
    #[error("control point array length {len} is not a multiple of 3")]
    RaggedControlPoints { len: usize },
    #[error("control point {index} has non-finite coordinates")]
    NonFiniteControlPoint { index: usize },
    #[error("curve degree {degree} exceeds the supported maximum of {max}")]
    DegreeTooLarge { degree: usize, max: usize },
    #[error("{name} must be positive, got {value}")]
    NonPositiveSteps { name: &'static str, value: u32 },
    #[error("sweep fraction must lie in (0, 1], got {0}")]
    InvalidSweepFraction(f32),
    #[error("sweep of {fraction} over {steps} steps produces no angular segment")]
    EmptySweep { steps: u32, fraction: f32 },
    #[error("attribute streams differ in length: {positions} positions, {normals} normals, {tex_coords} texture coordinates")]
    AttributeLengthMismatch {
        positions: usize,
        normals: usize,
        tex_coords: usize,
    },
    #[error("invalid wall dimensions: {0}")]
    InvalidWall(&'static str),
    #[error("mesh would need {vertices} vertices, more than 32-bit indices can address")]
    MeshTooLarge { vertices: u64 },
}

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Pre-allocate room for a known number of vertices and indices
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            tex_coords: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Append one vertex and return its index
    ///
    /// Generators check their vertex budget against [`MAX_MESH_VERTICES`]
    /// up front, so the index always fits.
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> u32 {
        debug_assert!((self.vertices.len() as u64) < MAX_MESH_VERTICES);
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
        index
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave the attribute streams into GPU vertices.
    ///
    /// Fails when the three streams do not describe the same number of vertices.
    pub fn pack(&self) -> Result<Vec<Vertex3D>, GeometryError> {
        pack(&self.vertices, &self.normals, &self.tex_coords)
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}

/// Strict positional interleave of the three attribute streams.
///
/// The result casts to `[x, y, z, nx, ny, nz, u, v]` per vertex through
/// [`packed_floats`].
pub fn pack(
    positions: &[[f32; 3]],
    normals: &[[f32; 3]],
    tex_coords: &[[f32; 2]],
) -> Result<Vec<Vertex3D>, GeometryError> {
    if positions.len() != normals.len() || positions.len() != tex_coords.len() {
        return Err(GeometryError::AttributeLengthMismatch {
            positions: positions.len(),
            normals: normals.len(),
            tex_coords: tex_coords.len(),
        });
    }

    Ok(positions
        .iter()
        .zip(normals)
        .zip(tex_coords)
        .map(|((&position, &normal), &tex_coords)| Vertex3D {
            position,
            normal,
            tex_coords,
        })
        .collect())
}

/// View packed vertices as the flat float buffer handed to the renderer
pub fn packed_floats(vertices: &[Vertex3D]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_interleaves_in_order() {
        let positions = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let normals = [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let tex_coords = [[0.25, 0.5], [0.75, 1.0]];

        let vertices = pack(&positions, &normals, &tex_coords).unwrap();
        let floats = packed_floats(&vertices);

        assert_eq!(floats.len(), 2 * VERTEX_FLOATS);
        assert_eq!(
            &floats[..8],
            &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.25, 0.5]
        );
        assert_eq!(
            &floats[8..],
            &[4.0, 5.0, 6.0, 0.0, 0.0, 1.0, 0.75, 1.0]
        );
    }

    #[test]
    fn test_pack_rejects_mismatched_streams() {
        let err = pack(&[[0.0; 3]; 3], &[[0.0; 3]; 2], &[[0.0; 2]; 3]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::AttributeLengthMismatch {
                positions: 3,
                normals: 2,
                tex_coords: 3
            }
        );
    }

    #[test]
    fn test_stride_matches_vertex_layout() {
        assert_eq!(VERTEX_STRIDE, 32);
        assert_eq!(VERTEX_STRIDE, std::mem::size_of::<Vertex3D>());
    }

    #[test]
    fn test_push_vertex_returns_sequential_indices() {
        let mut data = GeometryData::new();
        assert_eq!(data.push_vertex([0.0; 3], [0.0, 1.0, 0.0], [0.0; 2]), 0);
        assert_eq!(data.push_vertex([1.0; 3], [0.0, 1.0, 0.0], [1.0; 2]), 1);
        assert_eq!(data.vertex_count(), 2);
        assert!(data.pack().is_ok());
    }
}
