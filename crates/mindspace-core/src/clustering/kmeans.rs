//! Lloyd's k-means with k-means++ seeding.
//!
//! Deterministic for a fixed seed: the only randomness is the ChaCha RNG used
//! to pick initial centers.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::similarity::squared_distance;

/// Outcome of one k-means run.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    pub centroids: Vec<Vec<f32>>,
    /// Index into `centroids` for every input point.
    pub assignments: Vec<usize>,
    pub iterations: usize,
    /// Sum of squared distances from each point to its centroid.
    pub inertia: f32,
}

/// Cluster `points` into `k` groups.
///
/// Preconditions (checked by the centroid builder): `points` is non-empty,
/// `1 <= k <= points.len()`, and every point has the same length.
pub fn fit(points: &[Vec<f32>], k: usize, seed: u64, max_iterations: usize, tolerance: f32) -> KMeansFit {
    debug_assert!(!points.is_empty() && k >= 1 && k <= points.len());

    let dim = points[0].len();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut centroids = seed_centroids(points, k, &mut rng);

    let mut assignments = vec![usize::MAX; points.len()];
    let mut iterations = 0;

    for _ in 0..max_iterations.max(1) {
        iterations += 1;

        let mut changed = false;
        for (slot, point) in assignments.iter_mut().zip(points) {
            let nearest = nearest_centroid(point, &centroids);
            if *slot != nearest {
                *slot = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![vec![0.0f32; dim]; k];
        let mut counts = vec![0usize; k];
        for (point, &cluster) in points.iter().zip(&assignments) {
            counts[cluster] += 1;
            for (acc, x) in sums[cluster].iter_mut().zip(point) {
                *acc += x;
            }
        }

        let mut shift = 0.0f32;
        for ((centroid, sum), count) in centroids.iter_mut().zip(sums).zip(counts) {
            // Empty clusters keep their previous position.
            if count == 0 {
                continue;
            }
            let mean: Vec<f32> = sum.into_iter().map(|x| x / count as f32).collect();
            shift += squared_distance(centroid, &mean);
            *centroid = mean;
        }
        if shift <= tolerance {
            for (slot, point) in assignments.iter_mut().zip(points) {
                *slot = nearest_centroid(point, &centroids);
            }
            break;
        }
    }

    let inertia = points
        .iter()
        .zip(&assignments)
        .map(|(point, &cluster)| squared_distance(point, &centroids[cluster]))
        .sum();

    KMeansFit {
        centroids,
        assignments,
        iterations,
        inertia,
    }
}

/// k-means++: first center uniform, each next center drawn with probability
/// proportional to its squared distance from the nearest chosen center.
fn seed_centroids(points: &[Vec<f32>], k: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<f32>> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())].clone());

    let mut closest: Vec<f64> = points
        .iter()
        .map(|p| f64::from(squared_distance(p, &centroids[0])))
        .collect();

    while centroids.len() < k {
        let total: f64 = closest.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.r#gen::<f64>() * total;
            let mut chosen = closest.iter().rposition(|&d| d > 0.0).unwrap_or(0);
            for (i, &d) in closest.iter().enumerate() {
                if d > 0.0 && target < d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            // Every point coincides with a chosen center; duplicates are fine.
            rng.gen_range(0..points.len())
        };

        let center = points[next].clone();
        for (d, p) in closest.iter_mut().zip(points) {
            *d = d.min(f64::from(squared_distance(p, &center)));
        }
        centroids.push(center);
    }

    centroids
}

/// Index of the centroid nearest to `point`; the lowest index wins ties.
fn nearest_centroid(point: &[f32], centroids: &[Vec<f32>]) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let dist = squared_distance(point, centroid);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
