//! # Lathe Prelude
//!
//! ```rust
//! use lathe::prelude::*;
//!
//! let surface = RevolvedSurface::new(
//!     profiles::SCULPTURE_PROFILE,
//!     RevolveConfig::sculpture(),
//! )
//! .unwrap();
//! assert_eq!(surface.verts_per_ring(), 7);
//! ```

// Geometry generation
pub use crate::gfx::geometry::{
    build_indices, generate_curved_wall, profiles, BezierProfile, CurvedWallConfig, GeometryData,
    GeometryError, NormalPolicy, RevolveConfig, RevolvedSurface, Winding,
};

// Scene and GPU resources
pub use crate::gfx::context::GpuContext;
pub use crate::gfx::resources::{DrawMesh, GpuMeshHandle, PhongMaterial};
pub use crate::gfx::scene::{DrawObject, SurfaceObject, Vertex3D};

// Re-export common external dependencies
pub use cgmath::{Deg, InnerSpace, Vector3, Zero};
pub use wgpu::{Device, Queue};
