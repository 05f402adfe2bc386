// src/lib.rs
//! Lathe
//!
//! Surfaces of revolution from 2D Bezier profiles, packed for wgpu.

pub mod gfx;
pub mod prelude;
pub mod wgpu_utils;
