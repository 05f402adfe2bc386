// src/wgpu_utils/mod.rs
//! WGPU utility functions and helpers
//!
//! Typed uniform buffers and their bind group layout entries.

pub mod uniform_buffer;

// Re-export main types
pub use uniform_buffer::UniformBuffer;
