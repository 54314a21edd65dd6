//! Record number to learning iteration mapping.
//!
//! Callers number their records with an arbitrary base and may skip values.
//! The tracker pins the offset between the caller's numbering and a
//! zero-based internal iteration on the first call, then keeps it fixed, so
//! a gap in record numbers becomes the same gap in iterations.

/// Maps caller record numbers onto internal learning iterations.
#[derive(Clone, Debug, Default)]
pub struct IterationTracker {
    learn_iteration: i64,
    /// `record_num - learn_iteration`, fixed by the first call
    offset: Option<i64>,
}

impl IterationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `record_num` into a learning iteration and remember it.
    ///
    /// The first call always yields iteration 0.
    ///
    /// # Example
    /// ```rust
    /// use knn_memory::IterationTracker;
    ///
    /// let mut tracker = IterationTracker::new();
    /// assert_eq!(tracker.normalize(1000), 0);
    /// assert_eq!(tracker.normalize(1001), 1);
    /// assert_eq!(tracker.normalize(1005), 5);
    /// ```
    pub fn normalize(&mut self, record_num: i64) -> i64 {
        let offset = match self.offset {
            Some(offset) => offset,
            None => {
                let offset = record_num - self.learn_iteration;
                self.offset = Some(offset);
                offset
            }
        };
        self.learn_iteration = record_num - offset;
        self.learn_iteration
    }

    /// Iteration produced by the most recent call (0 before any call).
    pub fn learn_iteration(&self) -> i64 {
        self.learn_iteration
    }

    /// The fixed record-number offset, once established.
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }
}
