use std::collections::HashMap;

/// One user's ratings: item id → rating
pub type RatingVector = HashMap<String, f64>;

/// The full rating corpus: user id → that user's ratings
pub type RatingsTable = HashMap<String, RatingVector>;

/// Similarity-weighted prediction together with the evidence behind it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Prediction {
    /// Predicted rating, `0.0` when there was not enough signal
    pub rating: f64,
    /// Neighbours that rated the target item
    pub neighbors_considered: usize,
    /// Neighbours with a non-zero similarity to the target user
    pub neighbors_used: usize,
    /// Σ |similarity| over the neighbours used
    pub total_abs_similarity: f64,
    /// False when the rating is the "not enough data" sentinel rather than a predicted zero
    pub has_signal: bool,
}
