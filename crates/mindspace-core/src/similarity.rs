//! Vector similarity primitives.

/// Dot product over the common prefix of `a` and `b`.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// L2 norm of a vector.
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Squared Euclidean distance.
pub fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Cosine similarity, clamped to [-1, 1].
///
/// Returns `None` when the lengths differ, when either vector has zero norm,
/// or when the result is not finite. Callers treat `None` as "no match".
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() {
        return None;
    }
    let denom = l2_norm(a) * l2_norm(b);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let sim = dot(a, b) / denom;
    sim.is_finite().then(|| sim.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_norm() {
        assert!((l2_norm(&[3.0, 4.0]) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_self_is_one() {
        let vectors = [
            vec![1.0, 2.0, 3.0],
            vec![-0.3, 0.0, 7.5, 1e-3],
            vec![1e-4, 2e-4],
            vec![1234.5, -987.6],
        ];
        for v in &vectors {
            let sim = cosine_similarity(v, v).unwrap();
            assert!((sim - 1.0).abs() < 1e-6, "cosine(v, v) = {sim} for {v:?}");
        }
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap().abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-2.0, 0.0]).unwrap() + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_is_none() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), None);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]), None);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), None);
    }

    #[test]
    fn test_cosine_non_finite_is_none() {
        assert_eq!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 1.0]), None);
        assert_eq!(cosine_similarity(&[f32::INFINITY, 1.0], &[1.0, 1.0]), None);
    }

    #[test]
    fn test_cosine_length_mismatch_is_none() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), None);
    }

    #[test]
    fn test_squared_distance() {
        assert!((squared_distance(&[1.0, 1.0], &[4.0, 5.0]) - 25.0).abs() < 1e-6);
    }
}
