//! # Scene Module
//!
//! Placement of generated surfaces: each [`SurfaceObject`] pairs a packed
//! mesh with a [`PhongMaterial`](crate::gfx::resources::PhongMaterial) and a
//! model transform, and owns its GPU copies once uploaded.
//!
//! ```no_run
//! use cgmath::{Deg, Vector3};
//! use lathe::gfx::geometry::{profiles, RevolveConfig, RevolvedSurface};
//! use lathe::gfx::resources::PhongMaterial;
//! use lathe::gfx::scene::SurfaceObject;
//!
//! let surface =
//!     RevolvedSurface::new(profiles::ROOF_ORNAMENT_PROFILE, RevolveConfig::roof_ornament())?;
//! let mut ornament =
//!     SurfaceObject::from_surface("Roof Ornament", &surface, PhongMaterial::roof_ornament());
//! ornament.set_transform_trs(
//!     Vector3::new(-4.0, 16.0, 0.0),
//!     Deg(0.0),
//!     Vector3::new(9.0, 15.0, 9.0),
//! );
//! # Ok::<(), lathe::gfx::geometry::GeometryError>(())
//! ```

pub mod object;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, SurfaceObject, TransformUniform};
pub use vertex::Vertex3D;
