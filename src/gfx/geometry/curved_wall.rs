//! # Curved Wall Generation
//!
//! A thick wall bent around the Y axis: the region between two concentric
//! radii, swept through an angle and extruded to a height. The wall is
//! centred on `y = 0` and starts at `+X`, sweeping towards `+Z`.

use std::f32::consts::PI;

use super::{check_vertex_budget, GeometryData, GeometryError};

/// Dimensions of a curved wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvedWallConfig {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub height: f32,
    /// Swept angle in degrees, in `(0, 360]`
    pub angle_degrees: f32,
    /// Angular segments; values below 2 are raised to 2
    pub segments: u32,
}

impl Default for CurvedWallConfig {
    fn default() -> Self {
        Self {
            outer_radius: 10.0,
            inner_radius: 9.8,
            height: 10.0,
            angle_degrees: 90.0,
            segments: 50,
        }
    }
}

impl CurvedWallConfig {
    pub fn validate(&self) -> Result<(), GeometryError> {
        let values = [
            self.outer_radius,
            self.inner_radius,
            self.height,
            self.angle_degrees,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::InvalidWall("dimensions must be finite"));
        }
        if self.height <= 0.0 {
            return Err(GeometryError::InvalidWall("height must be positive"));
        }
        if self.inner_radius < 0.0 {
            return Err(GeometryError::InvalidWall("inner radius must not be negative"));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(GeometryError::InvalidWall(
                "inner radius must be smaller than outer radius",
            ));
        }
        if !(self.angle_degrees > 0.0 && self.angle_degrees <= 360.0) {
            return Err(GeometryError::InvalidWall("angle must lie in (0, 360] degrees"));
        }
        // Four faces of two vertices per column, plus both end caps
        check_vertex_budget(8 * (self.segment_count() as u64 + 1) + 8)
    }

    fn segment_count(&self) -> u32 {
        self.segments.max(2)
    }

    fn is_closed(&self) -> bool {
        self.angle_degrees >= 360.0
    }
}

/// Generate a curved wall with outer and inner faces, top and bottom caps,
/// and flat end caps unless the wall closes into a full ring.
///
/// Faces do not share vertices, so every face keeps its own flat or radial
/// normals. Returns the wall with counter-clockwise outward-facing triangles.
pub fn generate_curved_wall(config: &CurvedWallConfig) -> Result<GeometryData, GeometryError> {
    config.validate()?;

    let segs = config.segment_count();
    let angle = config.angle_degrees * PI / 180.0;
    let half_height = config.height * 0.5;
    let (outer, inner) = (config.outer_radius, config.inner_radius);

    let columns = (segs + 1) as usize;
    let mut data = GeometryData::with_capacity(columns * 8 + 8, segs as usize * 24 + 12);

    // Outer face
    let base = data.vertex_count() as u32;
    for i in 0..=segs {
        let u = i as f32 / segs as f32;
        let (sin, cos) = (u * angle).sin_cos();
        let normal = [cos, 0.0, sin];
        data.push_vertex([outer * cos, -half_height, outer * sin], normal, [u, 0.0]);
        data.push_vertex([outer * cos, half_height, outer * sin], normal, [u, 1.0]);
    }
    for i in 0..segs {
        let bottom = base + i * 2;
        let (top, next_bottom, next_top) = (bottom + 1, bottom + 2, bottom + 3);
        data.indices.extend_from_slice(&[bottom, top, next_bottom]);
        data.indices.extend_from_slice(&[top, next_top, next_bottom]);
    }

    // Inner face
    let base = data.vertex_count() as u32;
    for i in 0..=segs {
        let u = i as f32 / segs as f32;
        let (sin, cos) = (u * angle).sin_cos();
        let normal = [-cos, 0.0, -sin];
        data.push_vertex([inner * cos, -half_height, inner * sin], normal, [u, 0.0]);
        data.push_vertex([inner * cos, half_height, inner * sin], normal, [u, 1.0]);
    }
    for i in 0..segs {
        let bottom = base + i * 2;
        let (top, next_bottom, next_top) = (bottom + 1, bottom + 2, bottom + 3);
        data.indices.extend_from_slice(&[bottom, next_bottom, top]);
        data.indices.extend_from_slice(&[top, next_bottom, next_top]);
    }

    // Top and bottom caps
    for (y, normal) in [(half_height, [0.0, 1.0, 0.0]), (-half_height, [0.0, -1.0, 0.0])] {
        let base = data.vertex_count() as u32;
        for i in 0..=segs {
            let u = i as f32 / segs as f32;
            let (sin, cos) = (u * angle).sin_cos();
            data.push_vertex([outer * cos, y, outer * sin], normal, [u, 1.0]);
            data.push_vertex([inner * cos, y, inner * sin], normal, [u, 0.0]);
        }
        for i in 0..segs {
            let o = base + i * 2;
            let (n, next_o, next_n) = (o + 1, o + 2, o + 3);
            if y > 0.0 {
                data.indices.extend_from_slice(&[o, n, next_o]);
                data.indices.extend_from_slice(&[n, next_n, next_o]);
            } else {
                data.indices.extend_from_slice(&[o, next_o, n]);
                data.indices.extend_from_slice(&[n, next_o, next_n]);
            }
        }
    }

    if !config.is_closed() {
        // Start cap faces -tangent, end cap faces +tangent
        for (theta, facing_end) in [(0.0f32, false), (angle, true)] {
            let (sin, cos) = theta.sin_cos();
            let tangent = [-sin, 0.0, cos];
            let normal = if facing_end {
                tangent
            } else {
                tangent.map(|c| -c)
            };

            let inner_bottom = data.push_vertex([inner * cos, -half_height, inner * sin], normal, [0.0, 0.0]);
            let outer_bottom = data.push_vertex([outer * cos, -half_height, outer * sin], normal, [1.0, 0.0]);
            let inner_top = data.push_vertex([inner * cos, half_height, inner * sin], normal, [0.0, 1.0]);
            let outer_top = data.push_vertex([outer * cos, half_height, outer * sin], normal, [1.0, 1.0]);

            if facing_end {
                data.indices.extend_from_slice(&[inner_bottom, outer_bottom, inner_top]);
                data.indices.extend_from_slice(&[outer_bottom, outer_top, inner_top]);
            } else {
                data.indices.extend_from_slice(&[inner_bottom, inner_top, outer_bottom]);
                data.indices.extend_from_slice(&[outer_bottom, inner_top, outer_top]);
            }
        }
    }

    log::debug!(
        "Curved wall: {} segments over {} degrees, {} vertices, {} triangles",
        segs,
        config.angle_degrees,
        data.vertex_count(),
        data.triangle_count()
    );

    Ok(data)
}
