//! Learned memory: the stored (pattern, category) observations.
//!
//! Memory is append-only and insertion-ordered. By default it grows without
//! bound; with a capacity set, each insert past the bound drops one
//! observation according to the configured [`EvictionPolicy`].

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::EvictionPolicy;
use crate::pattern::Pattern;

/// A stored training example. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation<C> {
    pattern: Pattern,
    category: C,
}

impl<C> Observation<C> {
    pub fn new(pattern: Pattern, category: C) -> Self {
        Self { pattern, category }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn category(&self) -> &C {
        &self.category
    }
}

/// Ordered store of observations, optionally bounded.
#[derive(Clone, Debug)]
pub struct LearnedMemory<C> {
    observations: VecDeque<Observation<C>>,
    capacity: Option<usize>,
    eviction: EvictionPolicy,
    /// Replacement RNG, present only for reservoir eviction
    rng: Option<ChaCha8Rng>,
    /// Total observations ever offered, including dropped ones
    seen: u64,
}

impl<C> LearnedMemory<C> {
    /// Create a memory holding at most `capacity` observations when set.
    pub fn new(capacity: Option<usize>, eviction: EvictionPolicy) -> Self {
        let rng = match eviction {
            EvictionPolicy::Reservoir { seed } => Some(ChaCha8Rng::seed_from_u64(seed)),
            EvictionPolicy::Fifo => None,
        };

        Self {
            observations: VecDeque::new(),
            capacity,
            eviction,
            rng,
            seen: 0,
        }
    }

    /// Store an observation.
    ///
    /// Returns the observation that was dropped to stay within capacity,
    /// which under reservoir sampling may be the one just offered.
    pub fn insert(&mut self, observation: Observation<C>) -> Option<Observation<C>> {
        self.seen += 1;

        let capacity = match self.capacity {
            Some(capacity) if self.observations.len() >= capacity => capacity,
            _ => {
                self.observations.push_back(observation);
                return None;
            }
        };

        match self.rng.as_mut() {
            None => {
                let evicted = self.observations.pop_front();
                self.observations.push_back(observation);
                evicted
            }
            Some(rng) => {
                // Algorithm R: keep the newcomer with probability capacity / seen.
                let slot = rng.gen_range(0..self.seen);
                if slot < capacity as u64 {
                    let stored = &mut self.observations[slot as usize];
                    Some(std::mem::replace(stored, observation))
                } else {
                    Some(observation)
                }
            }
        }
    }

    /// Number of stored observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Total observations ever offered to this memory.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn eviction(&self) -> EvictionPolicy {
        self.eviction
    }

    /// Iterate stored observations in memory order.
    pub fn iter(&self) -> impl Iterator<Item = &Observation<C>> {
        self.observations.iter()
    }
}
