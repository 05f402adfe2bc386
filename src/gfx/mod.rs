//! # Graphics Module
//!
//! - **Geometry** ([`geometry`]) - Bezier profiles, surfaces of revolution and the curved wall
//! - **Scene** ([`scene`]) - Vertex layout and placed surface objects
//! - **Resources** ([`resources`]) - Uploaded meshes and Phong materials
//! - **Context** ([`context`]) - Headless device acquisition
//!
//! Geometry generation is pure CPU work and never touches the GPU. Everything
//! under [`resources`] and [`context`] needs a `wgpu::Device`.

pub mod context;
pub mod geometry;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use context::GpuContext;
pub use geometry::{BezierProfile, RevolveConfig, RevolvedSurface};
