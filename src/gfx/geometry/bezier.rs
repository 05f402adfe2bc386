//! # Bezier Profile Evaluation
//!
//! A profile is a single Bezier curve through every control point, evaluated
//! with Bernstein polynomials. Only the first two coordinates of each point
//! take part: the first is the distance from the revolution axis (radius), the
//! second the position along it (height). The third coordinate is carried so
//! that control data can be authored as plain `x, y, z` triples.

use super::GeometryError;

/// Highest curve degree whose binomial coefficients fit exactly in a `u64`.
pub const MAX_DEGREE: usize = 64;

/// Binomial coefficient `C(n, r)` using the multiplicative method.
///
/// Uses `C(n, r) == C(n, n - r)` to keep the loop short. Returns 0 when `r > n`.
pub fn binomial(n: usize, r: usize) -> u64 {
    if r > n {
        return 0;
    }
    let r = if r > n / 2 { n - r } else { r };

    // u128 keeps the intermediate product exact up to MAX_DEGREE
    let mut ans: u128 = 1;
    for i in 1..=r {
        ans *= (n - r + i) as u128;
        ans /= i as u128;
    }
    ans as u64
}

/// Position on the profile: distance from the axis and height along it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    pub radius: f32,
    pub height: f32,
}

/// First derivative of the profile with respect to the curve parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveTangent {
    pub d_radius: f32,
    pub d_height: f32,
}

/// An owned control polygon describing one Bezier profile curve.
///
/// The polygon is copied in at construction and validated once, so every
/// evaluation afterwards is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierProfile {
    points: Vec<[f32; 3]>,
}

impl BezierProfile {
    /// Build a profile from control points.
    ///
    /// # Errors
    /// Fails with fewer than 2 points, any non-finite radius or height, or
    /// more points than [`MAX_DEGREE`] + 1.
    pub fn new(points: Vec<[f32; 3]>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewControlPoints {
                count: points.len(),
            });
        }
        if points.len() - 1 > MAX_DEGREE {
            return Err(GeometryError::DegreeTooLarge {
                degree: points.len() - 1,
                max: MAX_DEGREE,
            });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p[0].is_finite() || !p[1].is_finite())
        {
            return Err(GeometryError::NonFiniteControlPoint { index });
        }

        Ok(Self { points })
    }

    /// Build a profile from a flat `[x0, y0, z0, x1, y1, z1, ...]` array.
    pub fn from_flat(control_points: &[f32]) -> Result<Self, GeometryError> {
        if control_points.len() % 3 != 0 {
            return Err(GeometryError::RaggedControlPoints {
                len: control_points.len(),
            });
        }

        let points = control_points
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::new(points)
    }

    /// Curve degree `L` (one less than the number of control points)
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    pub fn control_points(&self) -> &[[f32; 3]] {
        &self.points
    }

    /// Evaluate the profile at `t`.
    ///
    /// `t` is clamped into `[0, 1]`; anything above 1 evaluates the last
    /// control point.
    pub fn evaluate(&self, t: f64) -> CurveSample {
        let t = clamp_parameter(t);
        let l = self.degree();

        let mut radius = 0.0f64;
        let mut height = 0.0f64;
        for (i, p) in self.points.iter().enumerate() {
            let coef = bernstein(l, i, t);
            radius += coef * p[0] as f64;
            height += coef * p[1] as f64;
        }

        CurveSample {
            radius: radius as f32,
            height: height as f32,
        }
    }

    /// Derivative of the profile at `t`, from the degree `L - 1` hodograph
    /// scaled by `L`.
    pub fn derivative(&self, t: f64) -> CurveTangent {
        let t = clamp_parameter(t);
        let l = self.degree();

        let mut d_radius = 0.0f64;
        let mut d_height = 0.0f64;
        for (i, pair) in self.points.windows(2).enumerate() {
            let coef = l as f64 * bernstein(l - 1, i, t);
            d_radius += coef * (pair[1][0] as f64 - pair[0][0] as f64);
            d_height += coef * (pair[1][1] as f64 - pair[0][1] as f64);
        }

        CurveTangent {
            d_radius: d_radius as f32,
            d_height: d_height as f32,
        }
    }
}

fn clamp_parameter(t: f64) -> f64 {
    if t > 1.0 {
        1.0
    } else if t > 0.0 {
        t
    } else {
        0.0
    }
}

fn bernstein(degree: usize, i: usize, t: f64) -> f64 {
    binomial(degree, i) as f64 * (1.0 - t).powi((degree - i) as i32) * t.powi(i as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const ARC: [f32; 9] = [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.0, 1.0];

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_binomial_small_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(33, 1), 33);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn test_binomial_is_symmetric() {
        for n in 0..=40 {
            for r in 0..=n {
                assert_eq!(binomial(n, r), binomial(n, n - r));
            }
        }
    }

    #[test]
    fn test_binomial_at_max_degree() {
        // C(64, 32)
        assert_eq!(binomial(MAX_DEGREE, 32), 1_832_624_140_942_590_534);
        assert_eq!(binomial(33, 16), 1_166_803_110);
    }

    #[test]
    fn test_endpoint_interpolation() {
        let profile = BezierProfile::from_flat(&ARC).unwrap();

        let start = profile.evaluate(0.0);
        let end = profile.evaluate(1.0);
        assert!(close(start.radius, 0.0) && close(start.height, 0.0));
        assert!(close(end.radius, 2.0) && close(end.height, 0.0));
    }

    #[test]
    fn test_quadratic_midpoint() {
        let profile = BezierProfile::from_flat(&ARC).unwrap();
        let mid = profile.evaluate(0.5);

        // 0.25 * P0 + 0.5 * P1 + 0.25 * P2
        assert!(close(mid.radius, 1.0));
        assert!(close(mid.height, 0.5));
    }

    #[test]
    fn test_parameter_above_one_clamps_down() {
        let profile = BezierProfile::from_flat(&ARC).unwrap();
        assert_eq!(profile.evaluate(1.5), profile.evaluate(1.0));
        assert_eq!(profile.derivative(7.0), profile.derivative(1.0));
        assert_eq!(profile.evaluate(-0.25), profile.evaluate(0.0));
    }

    #[test]
    fn test_derivative_of_quadratic() {
        let profile = BezierProfile::from_flat(&ARC).unwrap();

        // B'(t) = 2(1-t)(P1-P0) + 2t(P2-P1)
        let d0 = profile.derivative(0.0);
        assert!(close(d0.d_radius, 2.0) && close(d0.d_height, 2.0));

        let d_mid = profile.derivative(0.5);
        assert!(close(d_mid.d_radius, 2.0) && close(d_mid.d_height, 0.0));

        let d1 = profile.derivative(1.0);
        assert!(close(d1.d_radius, 2.0) && close(d1.d_height, -2.0));
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let profile = BezierProfile::new(vec![
            [0.3, -1.8, 1.0],
            [0.8, -1.2, 1.0],
            [0.2, 0.0, 1.0],
            [0.9, 1.0, 1.0],
            [0.3, 1.8, 1.0],
        ])
        .unwrap();

        let h = 1e-4;
        for &t in &[0.1, 0.35, 0.6, 0.9] {
            let ahead = profile.evaluate(t + h);
            let behind = profile.evaluate(t - h);
            let numeric_r = (ahead.radius - behind.radius) / (2.0 * h as f32);
            let numeric_h = (ahead.height - behind.height) / (2.0 * h as f32);

            let d = profile.derivative(t);
            assert!((d.d_radius - numeric_r).abs() < 1e-2);
            assert!((d.d_height - numeric_h).abs() < 1e-2);
        }
    }

    #[test]
    fn test_samples_stay_inside_control_bounds() {
        // Convex control sets: samples must stay inside the hull, and in
        // particular inside its bounding box.
        let mut rng = rand::rng();

        for _ in 0..50 {
            let count = rng.random_range(3..10);
            let mut angles: Vec<f32> = (0..count)
                .map(|_| rng.random_range(0.0..std::f32::consts::TAU))
                .collect();
            angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let points: Vec<[f32; 3]> = angles
                .iter()
                .map(|a| [2.0 + a.cos(), 1.0 + a.sin(), 1.0])
                .collect();

            let profile = BezierProfile::new(points.clone()).unwrap();
            for step in 0..=32 {
                let sample = profile.evaluate(step as f64 / 32.0);
                assert!(inside_convex_polygon(&points, sample));
            }
        }
    }

    // Points on a circle in angular order form a convex polygon
    fn inside_convex_polygon(points: &[[f32; 3]], sample: CurveSample) -> bool {
        let n = points.len();
        (0..n).all(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let cross = (b[0] - a[0]) * (sample.height - a[1])
                - (b[1] - a[1]) * (sample.radius - a[0]);
            cross >= -1e-4
        })
    }

    #[test]
    fn test_single_point_is_rejected() {
        assert_eq!(
            BezierProfile::from_flat(&[1.0, 2.0, 3.0]),
            Err(GeometryError::TooFewControlPoints { count: 1 })
        );
        assert_eq!(
            BezierProfile::from_flat(&[]),
            Err(GeometryError::TooFewControlPoints { count: 0 })
        );
    }

    #[test]
    fn test_ragged_array_is_rejected() {
        assert_eq!(
            BezierProfile::from_flat(&[0.0, 0.0, 1.0, 1.0]),
            Err(GeometryError::RaggedControlPoints { len: 4 })
        );
    }

    #[test]
    fn test_non_finite_point_is_rejected() {
        let err = BezierProfile::new(vec![[0.0, 0.0, 0.0], [f32::NAN, 1.0, 0.0]]).unwrap_err();
        assert_eq!(err, GeometryError::NonFiniteControlPoint { index: 1 });

        // The unused third coordinate is not checked
        assert!(BezierProfile::new(vec![[0.0, 0.0, f32::INFINITY], [1.0, 1.0, 0.0]]).is_ok());
    }

    #[test]
    fn test_degree_limit() {
        let points = vec![[1.0, 0.0, 0.0]; MAX_DEGREE + 2];
        assert_eq!(
            BezierProfile::new(points).unwrap_err(),
            GeometryError::DegreeTooLarge {
                degree: MAX_DEGREE + 1,
                max: MAX_DEGREE
            }
        );
        assert!(BezierProfile::new(vec![[1.0, 0.0, 0.0]; MAX_DEGREE + 1]).is_ok());
    }
}
