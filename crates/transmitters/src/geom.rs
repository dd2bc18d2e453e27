//! Polar/Cartesian helpers shared by the generator and the GXL codec.
//!
//! Transmitter positions live in polar form around the city center (angle in degrees). The GXL
//! format stores Cartesian coordinates, so conversions go both ways.

use serde::{Deserialize, Serialize};

/// A position relative to the city center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarPoint {
    pub radius: f64,
    /// Degrees. Any real value; conceptually taken mod 360.
    pub angle: f64,
}

impl PolarPoint {
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    pub fn to_cartesian(self) -> Point {
        let theta = self.angle.to_radians();
        Point {
            x: self.radius * theta.cos(),
            y: self.radius * theta.sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Recovers the polar form; the angle lands in `(-180, 180]`.
    pub fn to_polar(self) -> PolarPoint {
        PolarPoint {
            radius: self.x.hypot(self.y),
            angle: self.y.atan2(self.x).to_degrees(),
        }
    }
}

/// Law-of-cosines distance between two polar points.
///
/// The radicand can dip slightly below zero for coincident points; it is clamped so the result is
/// `0.0` rather than NaN.
pub fn polar_distance(a: PolarPoint, b: PolarPoint) -> f64 {
    let d_theta = a.angle.to_radians() - b.angle.to_radians();
    let d2 = a.radius * a.radius + b.radius * b.radius - 2.0 * a.radius * b.radius * d_theta.cos();
    d2.max(0.0).sqrt()
}

/// Rounds to `decimals` fractional digits, ties to even.
///
/// Values too large to scale are already integral at this precision and are returned unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round_ties_even() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn polar_distance_matches_cartesian_distance() {
        let a = PolarPoint::new(10.0, 30.0);
        let b = PolarPoint::new(4.0, 250.0);
        let (pa, pb) = (a.to_cartesian(), b.to_cartesian());
        let expected = (pa.x - pb.x).hypot(pa.y - pb.y);
        assert!(approx(polar_distance(a, b), expected));
    }

    #[test]
    fn polar_distance_of_coincident_points_is_zero_not_nan() {
        let a = PolarPoint::new(37.123456789, 123.456);
        assert_eq!(polar_distance(a, a), 0.0);
        assert_eq!(
            polar_distance(PolarPoint::new(0.0, 0.0), PolarPoint::new(0.0, 90.0)),
            0.0
        );
    }

    #[test]
    fn cartesian_round_trip_recovers_polar_form() {
        let p = PolarPoint::new(5.0, 135.0);
        let back = p.to_cartesian().to_polar();
        assert!(approx(back.radius, 5.0));
        assert!(approx(back.angle, 135.0));

        // Angles past 180 come back negative but denote the same direction.
        let q = PolarPoint::new(2.0, 270.0).to_cartesian().to_polar();
        assert!(approx(q.angle, -90.0));
    }

    #[test]
    fn round_to_four_places() {
        assert_eq!(round_to(12.345_649, 4), 12.3456);
        assert_eq!(round_to(-7.890_06, 4), -7.8901);
        assert_eq!(round_to(-0.000_01, 4), 0.0);
        assert!(round_to(-0.000_01, 4).is_sign_positive());
    }

    #[test]
    fn round_to_keeps_huge_values_finite() {
        assert_eq!(round_to(1e305, 4), 1e305);
        assert_eq!(round_to(-f64::MAX, 4), -f64::MAX);
        assert!(round_to(f64::NAN, 4).is_nan());
    }
}
