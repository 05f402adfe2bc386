// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles uploaded meshes, materials, and their bind groups.

pub mod gpu_mesh;
pub mod material;

// Re-export main types
pub use gpu_mesh::{DrawMesh, GpuMeshHandle};
pub use material::{MaterialUniform, PhongMaterial};
