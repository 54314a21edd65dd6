//! # knn-memory: Online k-Nearest-Neighbor Classification
//!
//! An incremental k-NN classifier for sparse binary activation patterns.
//! Labeled patterns are learned one at a time; inference measures a query
//! against every stored pattern and lets the `k` nearest vote.
//!
//! ## Quick Start
//!
//! ```rust
//! use knn_memory::{KnnClassifier, Pattern};
//!
//! let mut classifier = KnnClassifier::new(3)?;
//!
//! classifier.learn(Pattern::new(vec![0, 0, 0, 0, 1, 1, 1, 1])?, "one");
//! classifier.learn(Pattern::new(vec![0, 0, 0, 0, 1, 1, 0, 1])?, "one");
//! classifier.learn(Pattern::new(vec![0, 0, 0, 1, 1, 1, 1, 0])?, "one");
//! classifier.learn(Pattern::new(vec![1, 1, 1, 1, 0, 0, 0, 0])?, "two");
//!
//! let result = classifier
//!     .infer(&Pattern::new(vec![0, 0, 0, 0, 1, 1, 1, 1])?)?
//!     .expect("memory is not empty");
//!
//! assert_eq!(*result.winner(), "one");
//! assert_eq!(result.votes(&"one"), Some(3));
//! # Ok::<(), knn_memory::KnnError>(())
//! ```
//!
//! ## Streaming
//!
//! [`KnnClassifier::compute`] takes samples from a record stream. Record
//! numbers may start anywhere and skip values; they are mapped onto a
//! zero-based learning iteration, and each pattern is kept in a bounded
//! [`PatternHistory`] so a label arriving later can be matched back to it.
//!
//! ## Core Concepts
//!
//! - **Observation**: a stored (pattern, category) pair
//! - **Learned memory**: all observations, insertion ordered, optionally bounded
//! - **Result**: winner, votes among the top k, nearest distance per category,
//!   and the sorted distances to every observation

pub mod classifier;
pub mod config;
pub mod distance;
pub mod error;
pub mod history;
pub mod iteration;
pub mod memory;
pub mod pattern;
pub mod result;

// Re-exports for convenience
pub use classifier::{Classification, KnnClassifier};
pub use config::{EvictionPolicy, KnnConfig};
pub use distance::{Distance, Metric};
pub use error::{KnnError, Result};
pub use history::{HistoryEntry, PatternHistory};
pub use iteration::IterationTracker;
pub use memory::{LearnedMemory, Observation};
pub use pattern::Pattern;
pub use result::KnnResult;
