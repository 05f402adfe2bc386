//! Reference control polygons for the auditorium's revolved ornaments.
//!
//! Points are flat `x, y, z` triples: `x` is the radius, `y` the height, and
//! `z` is authored as 1.0 throughout but never read.

/// Zig-zag trim swept into a full ring on top of the roof.
///
/// Pairs with [`RevolveConfig::roof_ornament`](super::RevolveConfig::roof_ornament).
#[rustfmt::skip]
pub const ROOF_ORNAMENT_PROFILE: &[f32] = &[
    0.0, 0.0, 1.0,
    0.25, 0.25, 1.0,
    0.5, 0.5, 1.0,
    0.75, 0.25, 1.0,
    1.0, 0.0, 1.0,
    1.25, -0.25, 1.0,
    1.50, -0.50, 1.0,
    1.75, -0.25, 1.0,
    2.0, 0.0, 1.0,
    2.25, 0.25, 1.0,
    2.50, 0.50, 1.0,
    2.75, 0.25, 1.0,
    3.0, 0.0, 1.0,
    3.25, -0.25, 1.0,
    3.50, -0.50, 1.0,
    3.75, -0.25, 1.0,
    4.0, 0.0, 1.0,
    3.75, -0.25, 1.0,
    3.5, -0.50, 1.0,
    3.25, -0.75, 1.0,
    3.0, -0.50, 1.0,
    2.75, -0.25, 1.0,
    2.5, 0.0, 1.0,
    2.25, 0.25, 1.0,
    2.0, 0.0, 1.0,
    1.75, -0.25, 1.0,
    1.5, -0.50, 1.0,
    1.25, -0.75, 1.0,
    1.0, -0.50, 1.0,
    0.75, -0.25, 1.0,
    0.5, 0.0, 1.0,
    0.25, 0.25, 1.0,
    0.0, 0.0, 1.0,
    -0.25, -0.25, 1.0,
];

/// Vase-like sculpture profile, swept through a third of a revolution.
///
/// Pairs with [`RevolveConfig::sculpture`](super::RevolveConfig::sculpture).
#[rustfmt::skip]
pub const SCULPTURE_PROFILE: &[f32] = &[
    -0.3, -1.8, 1.0,
    -0.8, -1.6, 1.0,
    -0.9, -1.2, 1.0,
    -0.8, -0.8, 1.0,
    -0.7, -0.4, 1.0,
    -0.2, -0.2, 1.0,
    0.0, -0.1, 1.0,
    0.2, 0.0, 1.0,
    0.7, 0.2, 1.0,
    0.8, 0.6, 1.0,
    0.9, 1.0, 1.0,
    0.8, 1.4, 1.0,
    0.3, 1.8, 1.0,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::BezierProfile;

    #[test]
    fn test_reference_profiles_parse() {
        let roof = BezierProfile::from_flat(ROOF_ORNAMENT_PROFILE).unwrap();
        assert_eq!(roof.control_points().len(), 34);
        assert_eq!(roof.degree(), 33);

        let sculpture = BezierProfile::from_flat(SCULPTURE_PROFILE).unwrap();
        assert_eq!(sculpture.control_points().len(), 13);
    }

    #[test]
    fn test_sculpture_endpoints() {
        let sculpture = BezierProfile::from_flat(SCULPTURE_PROFILE).unwrap();
        let bottom = sculpture.evaluate(0.0);
        let top = sculpture.evaluate(1.0);

        assert!((bottom.radius + 0.3).abs() < 1e-5 && (bottom.height + 1.8).abs() < 1e-5);
        assert!((top.radius - 0.3).abs() < 1e-5 && (top.height - 1.8).abs() < 1e-5);
    }
}
