use knn_memory::{Distance, IterationTracker, KnnClassifier, Pattern, PatternHistory};
use proptest::prelude::*;

fn pattern_pair(max_width: usize) -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    (1..=max_width).prop_flat_map(|width| {
        (
            prop::collection::vec(any::<u32>(), width),
            prop::collection::vec(any::<u32>(), width),
        )
    })
}

fn labeled_patterns() -> impl Strategy<Value = Vec<(Vec<u32>, u8)>> {
    (1usize..12).prop_flat_map(|width| {
        prop::collection::vec((prop::collection::vec(0u32..2, width), 0u8..4), 1..40)
    })
}

proptest! {
    #[test]
    fn prop_distance_to_self_is_zero(data in prop::collection::vec(0u32..100, 1..64)) {
        let a = Pattern::new(data).unwrap();
        prop_assert_eq!(Distance::euclidean(&a, &a), 0.0);
        prop_assert_eq!(Distance::manhattan(&a, &a), 0.0);
    }

    #[test]
    fn prop_euclidean_symmetric_and_exact((x, y) in pattern_pair(32)) {
        let expected = x
            .iter()
            .zip(y.iter())
            .map(|(&a, &b)| (a as f64 - b as f64).powi(2))
            .sum::<f64>()
            .sqrt();
        let a = Pattern::new(x).unwrap();
        let b = Pattern::new(y).unwrap();

        prop_assert_eq!(Distance::euclidean(&a, &b), Distance::euclidean(&b, &a));
        prop_assert!((Distance::euclidean(&a, &b) - expected).abs() <= 1e-12 * expected.max(1.0));
    }

    #[test]
    fn prop_distances_sorted_and_complete(
        samples in labeled_patterns(),
        k in 1usize..6,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut classifier = KnnClassifier::new(k).unwrap();
        for (data, label) in &samples {
            classifier.learn(Pattern::new(data.clone()).unwrap(), *label);
        }

        let (query, label) = &samples[pick.index(samples.len())];
        let query = Pattern::new(query.clone()).unwrap();
        let result = classifier.infer(&query).unwrap().unwrap();

        let distances = result.distances();
        prop_assert_eq!(distances.len(), samples.len());
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(distances[0], 0.0);
        prop_assert_eq!(result.closest_distance(label), Some(0.0));
        prop_assert_eq!(result.num_neighbors(), k.min(samples.len()));
    }

    #[test]
    fn prop_history_bounded_fifo(capacity in 1usize..10, pushes in 0i64..50) {
        let mut history = PatternHistory::new(capacity);
        for i in 0..pushes {
            history.push(i, Pattern::from_active_indices(4, &[(i % 4) as usize]).unwrap());
            prop_assert!(history.len() <= capacity);
        }

        let retained: Vec<i64> = history.iter().map(|e| e.iteration).collect();
        let start = (pushes - capacity as i64).max(0);
        prop_assert_eq!(retained, (start..pushes).collect::<Vec<_>>());
    }

    #[test]
    fn prop_tracker_constant_offset(
        base in -1_000_000i64..1_000_000,
        gaps in prop::collection::vec(0i64..100, 0..30),
    ) {
        let mut tracker = IterationTracker::new();
        prop_assert_eq!(tracker.normalize(base), 0);

        let mut record_num = base;
        for gap in gaps {
            record_num += gap;
            prop_assert_eq!(tracker.normalize(record_num), record_num - base);
        }
    }
}
