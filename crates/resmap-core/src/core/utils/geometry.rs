use nalgebra::{Point3, Vector3};

/// Euclidean distance between two points. Exactly zero for identical points.
#[inline]
pub fn euclidean_distance(p: &Point3<f64>, q: &Point3<f64>) -> f64 {
    (p - q).norm()
}

/// Arithmetic mean of a set of points, or `None` for an empty set.
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Smallest distance over every pair drawn from `a` × `b`.
///
/// Compares squared norms and takes a single square root at the end. Returns
/// `None` if either set is empty.
pub fn min_pairwise_distance(a: &[Point3<f64>], b: &[Point3<f64>]) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let mut best = f64::INFINITY;
    for p in a {
        for q in b {
            let d2 = (p - q).norm_squared();
            if d2 < best {
                best = d2;
            }
        }
    }
    Some(best.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn distance_is_symmetric() {
        let p = Point3::new(1.5, -2.0, 3.25);
        let q = Point3::new(-4.0, 0.5, 7.0);
        assert_eq!(euclidean_distance(&p, &q), euclidean_distance(&q, &p));
    }

    #[test]
    fn distance_to_self_is_exactly_zero() {
        let p = Point3::new(12.345, -6.789, 0.001);
        assert_eq!(euclidean_distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_matches_pythagoras() {
        let p = Point3::new(0.0, 0.0, 0.0);
        let q = Point3::new(3.0, 4.0, 0.0);
        assert!((euclidean_distance(&p, &q) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_two_points_is_their_midpoint() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        assert_eq!(centroid(&points), Some(Point3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn centroid_of_empty_set_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn min_pairwise_distance_is_bounded_by_every_pair() {
        let a = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
        let b = [Point3::new(4.0, 1.0, 0.0), Point3::new(0.0, 5.0, 0.0)];
        let min = min_pairwise_distance(&a, &b).unwrap();
        for p in &a {
            for q in &b {
                assert!(min <= euclidean_distance(p, q) + TOLERANCE);
            }
        }
        assert!((min - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn min_pairwise_distance_of_empty_set_is_none() {
        assert_eq!(min_pairwise_distance(&[], &[Point3::origin()]), None);
    }
}
