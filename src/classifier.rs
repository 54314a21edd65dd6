//! The k-nearest-neighbor classifier engine.
//!
//! [`KnnClassifier`] owns learned memory, the record-number tracker, and the
//! pattern history. Inference is exact brute force: every stored observation
//! is measured against the query, ranked, and the `k` nearest vote.
//!
//! # Example
//!
//! ```rust
//! use knn_memory::{KnnClassifier, Pattern};
//!
//! let mut classifier = KnnClassifier::new(1).unwrap();
//! classifier.learn(Pattern::new(vec![1, 1, 0, 0]).unwrap(), "left");
//! classifier.learn(Pattern::new(vec![0, 0, 1, 1]).unwrap(), "right");
//!
//! let probe = Pattern::new(vec![0, 1, 1, 1]).unwrap();
//! let result = classifier.infer(&probe).unwrap().unwrap();
//! assert_eq!(*result.winner(), "right");
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::config::KnnConfig;
use crate::distance::Distance;
use crate::error::{KnnError, Result};
use crate::history::PatternHistory;
use crate::iteration::IterationTracker;
use crate::memory::{LearnedMemory, Observation};
use crate::pattern::Pattern;
use crate::result::KnnResult;

/// Classification metadata supplied alongside a pattern by the encoder.
///
/// `bucket_idx` signals that a usable actual value exists for this sample;
/// without it, `compute` never learns.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification<C> {
    pub bucket_idx: Option<usize>,
    pub act_value: Option<C>,
}

impl<C> Classification<C> {
    pub fn new(bucket_idx: usize, act_value: C) -> Self {
        Self {
            bucket_idx: Some(bucket_idx),
            act_value: Some(act_value),
        }
    }

    /// Metadata with no bucket, which suppresses learning.
    pub fn none() -> Self {
        Self {
            bucket_idx: None,
            act_value: None,
        }
    }
}

impl<C> Default for Classification<C> {
    fn default() -> Self {
        Self::none()
    }
}

/// Online k-NN classifier over activation patterns.
#[derive(Clone, Debug)]
pub struct KnnClassifier<C> {
    config: KnnConfig,
    memory: LearnedMemory<C>,
    tracker: IterationTracker,
    history: PatternHistory,
}

impl<C: Clone + Eq + Hash> KnnClassifier<C> {
    /// Create a classifier with `k` voting neighbors and default settings.
    pub fn new(k: usize) -> Result<Self> {
        Self::with_config(KnnConfig::default().with_k(k))
    }

    /// Create a classifier from a full configuration.
    pub fn with_config(config: KnnConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            memory: LearnedMemory::new(config.max_observations, config.eviction),
            tracker: IterationTracker::new(),
            history: PatternHistory::new(config.max_steps),
            config,
        })
    }

    /// Process one sample from a record stream.
    ///
    /// Records the pattern in history, infers if asked, then learns if asked
    /// and the metadata carries a bucket index. Inference runs before
    /// learning, so a pattern is never its own neighbor within one call.
    ///
    /// Returns the inference result, or `None` when `infer` is false or
    /// memory was empty.
    pub fn compute(
        &mut self,
        record_num: i64,
        classification: &Classification<C>,
        pattern: Pattern,
        learn: bool,
        infer: bool,
    ) -> Result<Option<KnnResult<C>>> {
        let category = match (learn, classification.bucket_idx) {
            (true, Some(bucket_idx)) => Some(
                classification
                    .act_value
                    .clone()
                    .ok_or(KnnError::MissingActualValue(bucket_idx))?,
            ),
            _ => None,
        };
        if infer {
            self.check_width(&pattern)?;
        }

        let learn_iteration = self.tracker.normalize(record_num);
        debug!(
            record_num,
            learn_iteration,
            width = pattern.width(),
            nnz = pattern.nnz(),
            learn,
            infer,
            "compute"
        );

        self.history.push(learn_iteration, pattern.clone());

        let result = if infer { self.infer(&pattern)? } else { None };

        if let Some(category) = category {
            self.learn(pattern, category);
        }

        Ok(result)
    }

    /// Store a labeled pattern.
    pub fn learn(&mut self, pattern: Pattern, category: C) {
        trace!(width = pattern.width(), stored = self.memory.len(), "learn");

        if self.memory.insert(Observation::new(pattern, category)).is_some() {
            debug!(
                capacity = ?self.memory.capacity(),
                policy = ?self.memory.eviction(),
                seen = self.memory.seen(),
                "learned memory full, observation evicted"
            );
        }
    }

    /// Classify `pattern` against everything learned so far.
    ///
    /// Returns `Ok(None)` when memory is empty, and
    /// [`KnnError::DimensionMismatch`] if any stored pattern differs in width.
    ///
    /// Equal distances keep memory order. When categories tie on votes, the
    /// one whose nearest voting neighbor ranks first wins.
    pub fn infer(&self, pattern: &Pattern) -> Result<Option<KnnResult<C>>> {
        if self.memory.is_empty() {
            return Ok(None);
        }
        self.check_width(pattern)?;

        let metric = self.config.metric;
        let mut ranked: Vec<(&Observation<C>, f64)> = self
            .memory
            .iter()
            .map(|o| (o, Distance::compute(o.pattern(), pattern, metric)))
            .collect();
        // sort_by is stable: ties stay in memory order
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut votes: HashMap<C, usize> = HashMap::new();
        let mut vote_order: Vec<&C> = Vec::new();
        let mut closest: HashMap<C, f64> = HashMap::new();
        let mut distances = Vec::with_capacity(ranked.len());

        for (rank, (observation, distance)) in ranked.iter().enumerate() {
            let category = observation.category();
            distances.push(*distance);

            if rank < self.config.k {
                let count = votes.entry(category.clone()).or_insert(0);
                if *count == 0 {
                    vote_order.push(category);
                }
                *count += 1;
            }

            // Ascending order, so the first sighting is the minimum.
            closest.entry(category.clone()).or_insert(*distance);
        }

        let mut best: Option<(&C, usize)> = None;
        for category in vote_order {
            let count = votes.get(category).copied().unwrap_or(0);
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((category, count));
            }
        }
        let Some((winner, _)) = best else {
            return Ok(None);
        };

        trace!(
            stored = distances.len(),
            nearest = distances[0],
            categories = closest.len(),
            "infer"
        );

        Ok(Some(KnnResult::new(
            winner.clone(),
            votes,
            closest,
            distances,
        )))
    }

    fn check_width(&self, pattern: &Pattern) -> Result<()> {
        match self
            .memory
            .iter()
            .find(|o| o.pattern().width() != pattern.width())
        {
            Some(o) => Err(KnnError::DimensionMismatch {
                expected: o.pattern().width(),
                got: pattern.width(),
            }),
            None => Ok(()),
        }
    }

    pub fn k(&self) -> usize {
        self.config.k
    }

    pub fn config(&self) -> &KnnConfig {
        &self.config
    }

    /// Number of stored observations.
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Stored observations in memory order.
    pub fn observations(&self) -> impl Iterator<Item = &Observation<C>> {
        self.memory.iter()
    }

    /// Iteration assigned to the most recent `compute` call.
    pub fn learn_iteration(&self) -> i64 {
        self.tracker.learn_iteration()
    }

    pub fn history(&self) -> &PatternHistory {
        &self.history
    }

    /// Pattern seen at `iteration`, if it is still in history.
    pub fn pattern_at(&self, iteration: i64) -> Option<&Pattern> {
        self.history.get(iteration)
    }
}
