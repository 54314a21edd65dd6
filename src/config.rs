//! Classifier configuration.
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```rust
//! use knn_memory::{KnnConfig, Metric};
//!
//! let config = KnnConfig::from_json(r#"{"k": 3, "metric": "manhattan"}"#).unwrap();
//! assert_eq!(config.k, 3);
//! assert_eq!(config.metric, Metric::Manhattan);
//! assert_eq!(config.max_observations, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::distance::Metric;
use crate::error::{KnnError, Result};

/// What to drop once learned memory reaches `max_observations`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Drop the oldest observation.
    #[default]
    Fifo,
    /// Keep a uniform random sample of everything seen (Algorithm R).
    ///
    /// The RNG is seeded, so the retained sample is reproducible.
    Reservoir {
        /// Seed for the replacement RNG
        seed: u64,
    },
}

/// Classifier configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnnConfig {
    /// Number of nearest neighbors that vote
    pub k: usize,
    /// Distance metric used for ranking
    pub metric: Metric,
    /// Capacity of the pattern history
    pub max_steps: usize,
    /// Upper bound on stored observations (`None` = unbounded)
    pub max_observations: Option<usize>,
    /// Eviction policy applied when `max_observations` is reached
    pub eviction: EvictionPolicy,
}

impl KnnConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(KnnError::InvalidK(self.k));
        }
        if self.max_steps == 0 {
            return Err(KnnError::InvalidConfig(
                "max_steps must be at least 1".into(),
            ));
        }
        if self.max_observations == Some(0) {
            return Err(KnnError::InvalidConfig(
                "max_observations must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Bound learned memory, evicting with `eviction` once full.
    pub fn with_max_observations(mut self, max: usize, eviction: EvictionPolicy) -> Self {
        self.max_observations = Some(max);
        self.eviction = eviction;
        self
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self {
            k: 1,
            metric: Metric::Euclidean,
            max_steps: 1,
            max_observations: None,
            eviction: EvictionPolicy::Fifo,
        }
    }
}
