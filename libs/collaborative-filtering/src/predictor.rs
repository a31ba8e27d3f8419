// ============================================
// User-Based Rating Prediction
// ============================================
//
// predicted = Σ sim(u, v) × rating(v, item) / Σ |sim(u, v)|
//
// over every neighbour v ≠ u who rated the item and has a non-zero
// similarity to u. The denominator uses absolute similarity so positive and
// negative neighbours cannot cancel it out, while the numerator keeps the
// sign so negatively correlated neighbours pull the prediction down.

use crate::config::PredictorConfig;
use crate::error::{CfError, Result};
use crate::similarity::{PearsonSimilarity, SimilarityCalculator};
use crate::types::{Prediction, RatingVector, RatingsTable};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Predicts a user's rating for an item from similar users' ratings
#[derive(Clone)]
pub struct RatingPredictor {
    similarity_calculator: Arc<dyn SimilarityCalculator>,
    config: PredictorConfig,
}

impl fmt::Debug for RatingPredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingPredictor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RatingPredictor {
    /// Create a predictor around a similarity strategy with default thresholds
    pub fn new<S>(similarity_calculator: S) -> Self
    where
        S: SimilarityCalculator + 'static,
    {
        Self {
            similarity_calculator: Arc::new(similarity_calculator),
            config: PredictorConfig::default(),
        }
    }

    /// Predictor using Pearson correlation with default thresholds
    pub fn pearson() -> Self {
        let config = PredictorConfig::default();
        Self {
            similarity_calculator: Arc::new(PearsonSimilarity::with_epsilon(
                config.similarity_epsilon,
            )),
            config,
        }
    }

    /// Pearson predictor configured from `CF_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = PredictorConfig::from_env()?;

        info!(
            similarity_epsilon = config.similarity_epsilon,
            weight_epsilon = config.weight_epsilon,
            "Rating predictor configured from environment"
        );

        Self::builder().pearson().config(config).build()
    }

    pub fn builder() -> RatingPredictorBuilder {
        RatingPredictorBuilder::default()
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Pearson correlation between two users under the configured `similarity_epsilon`
    ///
    /// Independent of the injected strategy, so it stays testable on its own.
    pub fn similarity(&self, user1: &RatingVector, user2: &RatingVector) -> f64 {
        PearsonSimilarity::with_epsilon(self.config.similarity_epsilon)
            .calculate_similarity(user1, user2)
    }

    /// Predict `target_user`'s rating of `target_item`
    ///
    /// Returns `0.0` when the user is unknown or no neighbour provides signal;
    /// callers must read that as "not enough data", not as a predicted zero.
    pub fn predict_rating(
        &self,
        target_item: &str,
        target_user: &str,
        ratings: &RatingsTable,
    ) -> f64 {
        self.predict(target_item, target_user, ratings).rating
    }

    /// Same as [`predict_rating`](Self::predict_rating), with the aggregation evidence
    pub fn predict(
        &self,
        target_item: &str,
        target_user: &str,
        ratings: &RatingsTable,
    ) -> Prediction {
        let Some(target_ratings) = ratings.get(target_user) else {
            debug!(target_user, target_item, "Unknown target user, no prediction");
            return Prediction::default();
        };

        let mut prediction = Prediction::default();
        let mut weighted_sum = 0.0;

        for (other_user, other_ratings) in ratings {
            if other_user == target_user {
                continue;
            }

            // Neighbours who never rated the item carry no signal for it
            let Some(&neighbor_rating) = other_ratings.get(target_item) else {
                continue;
            };
            prediction.neighbors_considered += 1;

            let sim = self
                .similarity_calculator
                .calculate_similarity(target_ratings, other_ratings);

            if sim == 0.0 {
                continue;
            }

            prediction.neighbors_used += 1;
            prediction.total_abs_similarity += sim.abs();
            weighted_sum += sim * neighbor_rating;
        }

        if prediction.total_abs_similarity <= self.config.weight_epsilon {
            debug!(
                target_user,
                target_item,
                neighbors_considered = prediction.neighbors_considered,
                "No neighbour provided usable signal"
            );
            return prediction;
        }

        prediction.rating = weighted_sum / prediction.total_abs_similarity;
        prediction.has_signal = true;

        trace!(
            target_user,
            target_item,
            rating = prediction.rating,
            neighbors_used = prediction.neighbors_used,
            "Rating predicted"
        );

        prediction
    }
}

/// Builder that validates its inputs before producing a [`RatingPredictor`]
#[derive(Default)]
pub struct RatingPredictorBuilder {
    similarity_calculator: Option<Arc<dyn SimilarityCalculator>>,
    pearson: bool,
    config: PredictorConfig,
}

impl RatingPredictorBuilder {
    pub fn similarity<S>(self, similarity_calculator: S) -> Self
    where
        S: SimilarityCalculator + 'static,
    {
        self.shared_similarity(Arc::new(similarity_calculator))
    }

    /// Reuse a strategy already shared with other predictors
    pub fn shared_similarity(
        mut self,
        similarity_calculator: Arc<dyn SimilarityCalculator>,
    ) -> Self {
        self.similarity_calculator = Some(similarity_calculator);
        self.pearson = false;
        self
    }

    /// Use Pearson correlation with the config's `similarity_epsilon`
    pub fn pearson(mut self) -> Self {
        self.similarity_calculator = None;
        self.pearson = true;
        self
    }

    /// `similarity_epsilon` also feeds the strategy chosen with [`pearson`](Self::pearson);
    /// an explicitly supplied strategy keeps its own thresholds
    pub fn config(mut self, config: PredictorConfig) -> Self {
        self.config = config;
        self
    }

    /// Fails with [`CfError::InvalidArgument`] when no similarity strategy was set
    pub fn build(self) -> Result<RatingPredictor> {
        self.config.validate()?;

        let similarity_calculator = match self.similarity_calculator {
            Some(similarity_calculator) => similarity_calculator,
            None if self.pearson => Arc::new(PearsonSimilarity::with_epsilon(
                self.config.similarity_epsilon,
            )),
            None => {
                return Err(CfError::InvalidArgument(
                    "similarity_calculator".to_string(),
                ))
            }
        };

        Ok(RatingPredictor {
            similarity_calculator,
            config: self.config,
        })
    }
}
