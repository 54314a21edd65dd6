//! Inference result snapshot.

use std::collections::HashMap;
use std::hash::Hash;

/// Outcome of one inference call.
///
/// Holds its own copies of everything it reports, so later learning never
/// changes a result already handed out.
#[derive(Clone, Debug, PartialEq)]
pub struct KnnResult<C: Eq + Hash> {
    /// Category with the most votes among the top-k neighbors
    winner: C,
    /// Votes per category among the top-k neighbors
    votes: HashMap<C, usize>,
    /// Nearest distance per category across all stored observations
    closest: HashMap<C, f64>,
    /// Distance to every stored observation, ascending
    distances: Vec<f64>,
}

impl<C: Eq + Hash> KnnResult<C> {
    pub(crate) fn new(
        winner: C,
        votes: HashMap<C, usize>,
        closest: HashMap<C, f64>,
        distances: Vec<f64>,
    ) -> Self {
        Self {
            winner,
            votes,
            closest,
            distances,
        }
    }

    pub fn winner(&self) -> &C {
        &self.winner
    }

    /// Votes `category` received among the top-k neighbors.
    pub fn votes(&self, category: &C) -> Option<usize> {
        self.votes.get(category).copied()
    }

    pub fn vote_counts(&self) -> &HashMap<C, usize> {
        &self.votes
    }

    /// Distance to the nearest stored observation of `category`, or `None`
    /// if memory held no such observation.
    pub fn closest_distance(&self, category: &C) -> Option<f64> {
        self.closest.get(category).copied()
    }

    /// Distances to all stored observations, sorted ascending.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Number of neighbors that voted (`min(k, memory size)`).
    pub fn num_neighbors(&self) -> usize {
        self.votes.values().sum()
    }
}
