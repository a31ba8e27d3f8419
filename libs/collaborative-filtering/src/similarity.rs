// ============================================
// User-User Similarity
// ============================================
//
// A similarity score lies in [-1, 1]; exactly 0.0 means "no usable signal"
// (no common items, or zero variance over them).

use crate::config::DEFAULT_EPSILON;
use crate::types::RatingVector;
use std::sync::Arc;

/// Strategy for scoring how alike two users' rating vectors are
pub trait SimilarityCalculator: Send + Sync {
    fn calculate_similarity(&self, user1: &RatingVector, user2: &RatingVector) -> f64;
}

impl<T: SimilarityCalculator + ?Sized> SimilarityCalculator for Arc<T> {
    fn calculate_similarity(&self, user1: &RatingVector, user2: &RatingVector) -> f64 {
        (**self).calculate_similarity(user1, user2)
    }
}

impl<T: SimilarityCalculator + ?Sized> SimilarityCalculator for Box<T> {
    fn calculate_similarity(&self, user1: &RatingVector, user2: &RatingVector) -> f64 {
        (**self).calculate_similarity(user1, user2)
    }
}

/// Pearson correlation over the items both users rated
///
/// Formula: r = Σ(a_i - ā)(b_i - b̄) / sqrt(Σ(a_i - ā)² × Σ(b_i - b̄)²)
#[derive(Debug, Clone, Copy)]
pub struct PearsonSimilarity {
    epsilon: f64,
}

impl Default for PearsonSimilarity {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl PearsonSimilarity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Denominators at or below `epsilon` are treated as zero variance
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl SimilarityCalculator for PearsonSimilarity {
    fn calculate_similarity(&self, user1: &RatingVector, user2: &RatingVector) -> f64 {
        // Walk the smaller map, then sort so (a, b) and (b, a) sum in the same order
        let (smaller, larger) = if user1.len() <= user2.len() {
            (user1, user2)
        } else {
            (user2, user1)
        };

        let mut common_items: Vec<&str> = smaller
            .keys()
            .filter(|item| larger.contains_key(*item))
            .map(String::as_str)
            .collect();

        if common_items.is_empty() {
            return 0.0;
        }
        common_items.sort_unstable();

        let u1: Vec<f64> = common_items.iter().map(|item| user1[*item]).collect();
        let u2: Vec<f64> = common_items.iter().map(|item| user2[*item]).collect();

        let n = common_items.len() as f64;
        let avg1 = u1.iter().sum::<f64>() / n;
        let avg2 = u2.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut sum_sq1 = 0.0;
        let mut sum_sq2 = 0.0;

        for (&r1, &r2) in u1.iter().zip(u2.iter()) {
            let d1 = r1 - avg1;
            let d2 = r2 - avg2;
            numerator += d1 * d2;
            sum_sq1 += d1 * d1;
            sum_sq2 += d2 * d2;
        }

        let denominator = (sum_sq1 * sum_sq2).sqrt();
        if denominator <= self.epsilon {
            return 0.0;
        }

        // Rounding can push a perfect correlation a hair past ±1
        (numerator / denominator).clamp(-1.0, 1.0)
    }
}

/// Similarity strategy backed by a closure, see [`similarity_fn`]
#[derive(Clone, Copy)]
pub struct SimilarityFn<F> {
    f: F,
}

impl<F> std::fmt::Debug for SimilarityFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityFn").finish_non_exhaustive()
    }
}

/// Wrap a closure as a [`SimilarityCalculator`]
///
/// # Examples
///
/// ```
/// use collaborative_filtering::{similarity_fn, RatingPredictor, RatingVector, RatingsTable};
///
/// let ratings = RatingsTable::from([
///     ("alice".to_string(), RatingVector::from([("up".to_string(), 4.0)])),
///     ("bob".to_string(), RatingVector::from([("alien".to_string(), 2.0)])),
/// ]);
///
/// let predictor = RatingPredictor::new(similarity_fn(|_, _| 0.5));
/// assert_eq!(predictor.predict_rating("alien", "alice", &ratings), 2.0);
/// ```
pub fn similarity_fn<F>(f: F) -> SimilarityFn<F>
where
    F: Fn(&RatingVector, &RatingVector) -> f64 + Send + Sync,
{
    SimilarityFn { f }
}

impl<F> SimilarityCalculator for SimilarityFn<F>
where
    F: Fn(&RatingVector, &RatingVector) -> f64 + Send + Sync,
{
    fn calculate_similarity(&self, user1: &RatingVector, user2: &RatingVector) -> f64 {
        (self.f)(user1, user2)
    }
}
