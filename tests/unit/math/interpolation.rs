//! Tests for linear interpolation and range mapping

#[cfg(test)]
mod tests {
    use constellation::math::interpolation::{lerp, lerp_rgb, map_range};

    // Tests endpoints and midpoint of linear interpolation
    // Verified by swapping start and stop
    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert!((lerp(2.0_f64, 12.0, 0.0) - 2.0).abs() < f64::EPSILON);
        assert!((lerp(2.0_f64, 12.0, 1.0) - 12.0).abs() < f64::EPSILON);
        assert!((lerp(2.0_f64, 12.0, 0.5) - 7.0).abs() < f64::EPSILON);
        assert!((lerp(1.0_f32, 3.0, 0.25) - 1.5).abs() < f32::EPSILON);
    }

    // Tests range mapping including a degenerate source range
    // Verified by dividing by the target span
    #[test]
    fn test_map_range() {
        assert!((map_range(50.0_f64, 0.0, 100.0, 0.0, 1.0) - 0.5).abs() < f64::EPSILON);
        assert!((map_range(5.0_f64, 0.0, 10.0, 100.0, 200.0) - 150.0).abs() < 1e-12);
        assert!((map_range(3.0_f64, 4.0, 4.0, 9.0, 10.0) - 9.0).abs() < f64::EPSILON);
    }

    // Tests per-channel color interpolation rounds and clamps
    // Verified by truncating instead of rounding
    #[test]
    fn test_lerp_rgb() {
        let from = [7, 7, 9];
        let to = [117, 0, 0];

        assert_eq!(lerp_rgb(from, to, 0.0), from);
        assert_eq!(lerp_rgb(from, to, 1.0), to);
        assert_eq!(lerp_rgb(from, to, 0.5), [62, 4, 5]);
        assert_eq!(lerp_rgb(from, to, 2.0), to);
        assert_eq!(lerp_rgb(from, to, -1.0), from);
    }
}
