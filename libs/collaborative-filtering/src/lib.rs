//! User-based collaborative filtering
//!
//! Predicts how a user would rate an item from the ratings of users who
//! rated it, weighted by how similar their tastes are.
//!
//! **Components**:
//! - [`SimilarityCalculator`]: pluggable user-user similarity (Pearson correlation shipped)
//! - [`RatingPredictor`]: similarity-weighted neighbour aggregation
//! - [`PredictorConfig`]: numeric thresholds, loadable from `CF_*` environment variables
//!
//! Missing data never fails a prediction: an unknown user, an item nobody
//! else rated, or neighbours with no usable similarity all yield `0.0`.
//!
//! # Example
//!
//! ```
//! use collaborative_filtering::{RatingPredictor, RatingVector, RatingsTable};
//!
//! let mut ratings = RatingsTable::new();
//! ratings.insert(
//!     "alice".to_string(),
//!     RatingVector::from([("dune".to_string(), 5.0), ("heat".to_string(), 1.0), ("up".to_string(), 4.0)]),
//! );
//! ratings.insert(
//!     "bob".to_string(),
//!     RatingVector::from([("dune".to_string(), 4.0), ("heat".to_string(), 2.0), ("alien".to_string(), 5.0)]),
//! );
//!
//! let predictor = RatingPredictor::pearson();
//! let rating = predictor.predict_rating("alien", "alice", &ratings);
//! assert!((rating - 5.0).abs() < 1e-9);
//!
//! // Only bob rated "alien", so there is nobody to learn that rating from
//! assert_eq!(predictor.predict_rating("alien", "bob", &ratings), 0.0);
//! ```

pub mod config;
pub mod error;
pub mod predictor;
pub mod similarity;
pub mod types;

// Re-export main types for convenience
pub use config::PredictorConfig;
pub use error::{CfError, Result};
pub use predictor::{RatingPredictor, RatingPredictorBuilder};
pub use similarity::{similarity_fn, PearsonSimilarity, SimilarityCalculator, SimilarityFn};
pub use types::{Prediction, RatingVector, RatingsTable};
