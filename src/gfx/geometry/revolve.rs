//! # Surfaces of Revolution
//!
//! Sweeps a [`BezierProfile`] around the Y axis. The profile is sampled at
//! `steps_along_curve + 1` evenly spaced parameters; every sample becomes a
//! ring of vertices spaced `2π / steps_around_axis` apart. A partial sweep
//! keeps the same angular step and simply stops early, so a third of a
//! 21-step revolution has 7 segments and 8 vertices per ring.
//!
//! Rings are stored back to back (vertex `j` of ring `i` has index
//! `i * verts_per_ring + j`) and adjacent rings are stitched into quads of two
//! triangles. A full revolution does not wrap: its last column duplicates the
//! first so that the seam can carry `u = 1` texture coordinates.

use cgmath::{InnerSpace, Vector3};
use std::f64::consts::TAU;

use super::bezier::{BezierProfile, CurveSample, CurveTangent};
use super::{check_vertex_budget, GeometryData, GeometryError};
use crate::gfx::scene::vertex::Vertex3D;

/// Samples taken along the profile curve by default.
pub const DEFAULT_STEPS_ALONG_CURVE: u32 = 40;

/// Angular steps in a full revolution by default.
pub const DEFAULT_STEPS_AROUND_AXIS: u32 = 20;

// Absorbs rounding in products like 21 * (1/3)
const SWEEP_EPSILON: f64 = 1e-6;

// Radii and cross products below this are treated as zero
const DEGENERATE_EPSILON: f32 = 1e-6;

/// How vertex normals are derived on the revolved surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalPolicy {
    /// Points straight away from the axis, ignoring the profile slope.
    /// Cheap, and adequate for ornamental trim.
    #[default]
    Simple,
    /// True surface normal from the curve tangent crossed with the
    /// circumferential direction.
    TangentCorrect,
}

/// Triangle vertex order used when stitching rings together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    /// `(k1, k2, k1 + 1)` and `(k1 + 1, k2, k2 + 1)`
    #[default]
    Canonical,
    /// The canonical triangles with their last two vertices swapped
    Reversed,
}

/// Tessellation settings for a revolved surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevolveConfig {
    /// Number of intervals the profile parameter is split into
    pub steps_along_curve: u32,
    /// Number of angular steps that make up a full revolution
    pub steps_around_axis: u32,
    /// Portion of the full revolution actually generated, in `(0, 1]`
    pub sweep_fraction: f32,
    pub normal_policy: NormalPolicy,
}

impl Default for RevolveConfig {
    fn default() -> Self {
        Self {
            steps_along_curve: DEFAULT_STEPS_ALONG_CURVE,
            steps_around_axis: DEFAULT_STEPS_AROUND_AXIS,
            sweep_fraction: 1.0,
            normal_policy: NormalPolicy::Simple,
        }
    }
}

impl RevolveConfig {
    /// Full revolution with simple normals, as used for the roof ornament
    pub fn roof_ornament() -> Self {
        Self::default()
    }

    /// One-third sweep with tangent-correct normals, as used for the sculpture
    pub fn sculpture() -> Self {
        Self {
            sweep_fraction: 1.0 / 3.0,
            normal_policy: NormalPolicy::TangentCorrect,
            ..Self::default()
        }
    }

    /// Builder pattern: Set the number of samples along the curve
    pub fn with_steps_along_curve(mut self, steps: u32) -> Self {
        self.steps_along_curve = steps;
        self
    }

    /// Builder pattern: Set the number of angular steps per full revolution
    pub fn with_steps_around_axis(mut self, steps: u32) -> Self {
        self.steps_around_axis = steps;
        self
    }

    /// Builder pattern: Set the swept portion of a full revolution
    pub fn with_sweep_fraction(mut self, fraction: f32) -> Self {
        self.sweep_fraction = fraction;
        self
    }

    /// Builder pattern: Set the normal policy
    pub fn with_normal_policy(mut self, policy: NormalPolicy) -> Self {
        self.normal_policy = policy;
        self
    }

    /// Check the configuration before any geometry is generated
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.steps_along_curve == 0 {
            return Err(GeometryError::NonPositiveSteps {
                name: "steps_along_curve",
                value: self.steps_along_curve,
            });
        }
        if self.steps_around_axis == 0 {
            return Err(GeometryError::NonPositiveSteps {
                name: "steps_around_axis",
                value: self.steps_around_axis,
            });
        }
        if !(self.sweep_fraction > 0.0 && self.sweep_fraction <= 1.0) {
            return Err(GeometryError::InvalidSweepFraction(self.sweep_fraction));
        }
        if self.segments_around_axis() == 0 {
            return Err(GeometryError::EmptySweep {
                steps: self.steps_around_axis,
                fraction: self.sweep_fraction,
            });
        }
        check_vertex_budget(
            (self.steps_along_curve as u64 + 1)
                .saturating_mul(self.segments_around_axis() as u64 + 1),
        )
    }

    /// Angular segments actually generated: `floor(steps_around_axis * sweep_fraction)`
    pub fn segments_around_axis(&self) -> u32 {
        (self.steps_around_axis as f64 * self.sweep_fraction as f64 + SWEEP_EPSILON).floor() as u32
    }

    /// Vertices in every ring
    pub fn verts_per_ring(&self) -> usize {
        self.segments_around_axis() as usize + 1
    }

    /// Rings along the curve
    pub fn ring_count(&self) -> usize {
        self.steps_along_curve as usize + 1
    }

    /// Angle between neighbouring ring vertices, in radians
    pub fn angle_step(&self) -> f64 {
        TAU / self.steps_around_axis as f64
    }
}

/// The vertices produced by sweeping one curve sample around the axis
#[derive(Debug, Clone)]
pub struct RevolutionRing {
    pub sample: CurveSample,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
    /// Vertices whose normal came from the degenerate-geometry fallback
    pub fallback_normals: usize,
}

impl RevolutionRing {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Sample the profile and sweep every sample into a ring.
///
/// # Errors
/// Returns the configuration error from [`RevolveConfig::validate`].
pub fn build_rings(
    profile: &BezierProfile,
    config: &RevolveConfig,
) -> Result<Vec<RevolutionRing>, GeometryError> {
    config.validate()?;

    let steps_along = config.steps_along_curve;
    let segments = config.segments_around_axis();
    let dtheta = config.angle_step();

    let rings = (0..=steps_along)
        .map(|i| {
            let t = i as f64 / steps_along as f64;
            let sample = profile.evaluate(t);
            let tangent = profile.derivative(t);
            let v = i as f32 / steps_along as f32;

            let mut ring = RevolutionRing {
                sample,
                positions: Vec::with_capacity(segments as usize + 1),
                normals: Vec::with_capacity(segments as usize + 1),
                tex_coords: Vec::with_capacity(segments as usize + 1),
                fallback_normals: 0,
            };

            for j in 0..=segments {
                let theta = j as f64 * dtheta;
                let (sin, cos) = theta.sin_cos();
                let position = [
                    (sample.radius as f64 * sin) as f32,
                    sample.height,
                    (sample.radius as f64 * cos) as f32,
                ];

                let normal = match surface_normal(config.normal_policy, sample, tangent, sin, cos) {
                    Some(normal) => normal,
                    None => {
                        ring.fallback_normals += 1;
                        fallback_normal(tangent)
                    }
                };

                ring.positions.push(position);
                ring.normals.push(normal);
                ring.tex_coords.push([j as f32 / segments as f32, v]);
            }

            ring
        })
        .collect();

    Ok(rings)
}

/// Normal at one ring vertex, or `None` when the geometry there is degenerate.
fn surface_normal(
    policy: NormalPolicy,
    sample: CurveSample,
    tangent: CurveTangent,
    sin: f64,
    cos: f64,
) -> Option<[f32; 3]> {
    let (sin, cos) = (sin as f32, cos as f32);

    match policy {
        NormalPolicy::Simple => {
            if sample.radius.abs() <= DEGENERATE_EPSILON {
                return None;
            }
            let away = Vector3::new(sample.radius * sin, 0.0, sample.radius * cos);
            Some(away.normalize().into())
        }
        NormalPolicy::TangentCorrect => {
            let along = Vector3::new(tangent.d_radius * sin, tangent.d_height, tangent.d_radius * cos);
            let around = Vector3::new(cos, 0.0, -sin);
            let normal = along.cross(around);
            if normal.magnitude2() <= DEGENERATE_EPSILON * DEGENERATE_EPSILON {
                return None;
            }

            // T x R dotted with (x, 0, z) is -r * dH. On the axis the tie is
            // broken as for a small positive radius so the apex matches its
            // neighbours; at a height extremum the unflipped normal is kept.
            let flip = if sample.radius.abs() <= DEGENERATE_EPSILON {
                tangent.d_height > 0.0
            } else {
                sample.radius * tangent.d_height > 0.0
            };
            let normal = normal.normalize();
            if flip {
                Some((-normal).into())
            } else {
                Some(normal.into())
            }
        }
    }
}

/// Axis-aligned normal following the direction the profile climbs
fn fallback_normal(tangent: CurveTangent) -> [f32; 3] {
    if tangent.d_height < 0.0 {
        [0.0, -1.0, 0.0]
    } else {
        [0.0, 1.0, 0.0]
    }
}

/// Triangle indices connecting `ring_count` rings of `verts_per_ring` vertices.
///
/// Emits two triangles per quad and never wraps around a ring, so every index
/// is below `ring_count * verts_per_ring`.
pub fn build_indices(ring_count: usize, verts_per_ring: usize, winding: Winding) -> Vec<u32> {
    if ring_count < 2 || verts_per_ring < 2 {
        return Vec::new();
    }

    let quads = (ring_count - 1) * (verts_per_ring - 1);
    let mut indices = Vec::with_capacity(quads * 6);

    for i in 0..ring_count - 1 {
        for j in 0..verts_per_ring - 1 {
            let k1 = (i * verts_per_ring + j) as u32;
            let k2 = k1 + verts_per_ring as u32;

            match winding {
                Winding::Canonical => {
                    indices.extend_from_slice(&[k1, k2, k1 + 1]);
                    indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
                }
                Winding::Reversed => {
                    indices.extend_from_slice(&[k1, k1 + 1, k2]);
                    indices.extend_from_slice(&[k1 + 1, k2 + 1, k2]);
                }
            }
        }
    }

    indices
}

/// Reorder each triangle so its counter-clockwise face agrees with its
/// vertex normals, returning how many were reversed.
///
/// A triangle agrees when its area-weighted face normal has a non-negative dot
/// product with the sum of its vertex normals. Profiles that fold back on
/// themselves need both orders in one mesh. Degenerate triangles keep the
/// order they were given.
fn orient_triangles(data: &mut GeometryData) -> usize {
    let mut reversed = 0;
    for tri in data.indices.chunks_exact_mut(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|k| k as usize);
        let pa = Vector3::from(data.vertices[a]);
        let pb = Vector3::from(data.vertices[b]);
        let pc = Vector3::from(data.vertices[c]);
        let face = (pb - pa).cross(pc - pa);
        let vertex_normals = Vector3::from(data.normals[a])
            + Vector3::from(data.normals[b])
            + Vector3::from(data.normals[c]);

        if face.dot(vertex_normals) < 0.0 {
            tri.swap(1, 2);
            reversed += 1;
        }
    }
    reversed
}

/// A tessellated surface of revolution, ready for upload.
///
/// Built once from a control polygon and a [`RevolveConfig`]; the mesh is
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct RevolvedSurface {
    profile: BezierProfile,
    config: RevolveConfig,
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    ring_count: usize,
    verts_per_ring: usize,
    winding: Winding,
    reversed_triangles: usize,
    fallback_normals: usize,
}

impl RevolvedSurface {
    /// Generate a surface from a flat `[x, y, z, ...]` control point array.
    ///
    /// # Errors
    /// Any malformed control polygon or configuration is rejected before
    /// geometry is generated; see [`GeometryError`].
    pub fn new(control_points: &[f32], config: RevolveConfig) -> Result<Self, GeometryError> {
        config.validate()?;
        let profile = BezierProfile::from_flat(control_points)?;
        Self::from_profile(profile, config)
    }

    /// Generate a surface from an already validated profile
    pub fn from_profile(profile: BezierProfile, config: RevolveConfig) -> Result<Self, GeometryError> {
        let rings = build_rings(&profile, &config)?;
        let ring_count = rings.len();
        let verts_per_ring = config.verts_per_ring();

        let mut data = GeometryData::with_capacity(
            ring_count * verts_per_ring,
            (ring_count - 1) * (verts_per_ring - 1) * 6,
        );
        let mut fallback_normals = 0;
        for ring in rings {
            debug_assert_eq!(ring.len(), verts_per_ring);
            fallback_normals += ring.fallback_normals;
            data.vertices.extend(ring.positions);
            data.normals.extend(ring.normals);
            data.tex_coords.extend(ring.tex_coords);
        }

        data.indices = build_indices(ring_count, verts_per_ring, Winding::Canonical);
        let reversed_triangles = orient_triangles(&mut data);
        let winding = if reversed_triangles * 2 > data.triangle_count() {
            Winding::Reversed
        } else {
            Winding::Canonical
        };

        let vertices = data.pack()?;

        log::debug!(
            "Revolved surface: degree {} profile, {} rings x {} vertices, {} triangles ({} reversed)",
            profile.degree(),
            ring_count,
            verts_per_ring,
            data.triangle_count(),
            reversed_triangles
        );
        if fallback_normals > 0 {
            log::warn!(
                "Revolved surface has {} degenerate vertices; substituted axis-aligned normals",
                fallback_normals
            );
        }

        Ok(Self {
            profile,
            config,
            vertices,
            indices: data.indices,
            ring_count,
            verts_per_ring,
            winding,
            reversed_triangles,
            fallback_normals,
        })
    }

    pub fn profile(&self) -> &BezierProfile {
        &self.profile
    }

    pub fn config(&self) -> &RevolveConfig {
        &self.config
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertices of ring `i`, or `None` past the last ring
    pub fn ring(&self, i: usize) -> Option<&[Vertex3D]> {
        let start = i.checked_mul(self.verts_per_ring)?;
        self.vertices.get(start..start + self.verts_per_ring)
    }

    /// Interleaved `[x, y, z, nx, ny, nz, u, v]` floats
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Cast vertex slice to raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Cast index slice to raw bytes for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    pub fn verts_per_ring(&self) -> usize {
        self.verts_per_ring
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Order used by the majority of triangles
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Triangles stored in [`Winding::Reversed`] order
    pub fn reversed_triangle_count(&self) -> usize {
        self.reversed_triangles
    }

    /// Number of vertices whose normal came from the degenerate fallback
    pub fn fallback_normal_count(&self) -> usize {
        self.fallback_normals
    }
}
