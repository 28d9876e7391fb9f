// src/math/geometry.rs

/// 平面上の点 [x, y] (km)
pub type Point = [f64; 2];

/// 2点間のユークリッド距離
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    ((p2[0] - p1[0]).powi(2) + (p2[1] - p1[1]).powi(2)).sqrt()
}

/// 両座標とも負でないか（地表より上、防衛側より前方）
pub fn is_non_negative(p: &Point) -> bool {
    p[0] >= 0.0 && p[1] >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance_345() {
        assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean_distance(&[3.0, 4.0], &[0.0, 0.0]), 5.0);
    }

    #[test]
    fn test_euclidean_distance_same_point() {
        assert_eq!(euclidean_distance(&[1.5, -2.0], &[1.5, -2.0]), 0.0);
    }

    #[test]
    fn test_is_non_negative() {
        assert!(is_non_negative(&[0.0, 0.0]));
        assert!(!is_non_negative(&[-0.1, 1.0]));
        assert!(!is_non_negative(&[1.0, -0.1]));
    }
}
