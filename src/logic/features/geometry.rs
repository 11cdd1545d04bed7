use super::EPSILON;

/// Ground footprint of a nadir camera: `(2h * tan(fov/2))^2` in m²
pub fn ground_area(height_m: f64, fov_rad: f64) -> f64 {
    let width = 2.0 * height_m * (fov_rad / 2.0).tan();
    width * width
}

/// People per square metre
pub fn crowd_density(people: u32, area_m2: f64) -> f64 {
    f64::from(people) / area_m2.max(EPSILON)
}

/// Planar speed between two positions
pub fn person_speed(prev: (f64, f64), curr: (f64, f64), delta_t: f64) -> f64 {
    let dx = curr.0 - prev.0;
    let dy = curr.1 - prev.1;
    dx.hypot(dy) / delta_t.max(EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_area_90_degree_fov() {
        // tan(45°) = 1 -> width = 2h
        let area = ground_area(10.0, std::f64::consts::FRAC_PI_2);
        assert!((area - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_guards_zero_area() {
        assert_eq!(crowd_density(42, 84.0), 0.5);
        assert!(crowd_density(1, 0.0).is_finite());
    }

    #[test]
    fn test_person_speed() {
        assert!((person_speed((0.0, 0.0), (3.0, 4.0), 2.0) - 2.5).abs() < 1e-12);
        assert!(person_speed((0.0, 0.0), (1.0, 0.0), 0.0).is_finite());
    }
}
