use std::sync::{Arc, Mutex};
use std::thread;

use knn_memory::{Classification, EvictionPolicy, KnnClassifier, KnnConfig, Pattern};

fn p(data: &[u32]) -> Pattern {
    Pattern::new(data.to_vec()).unwrap()
}

fn trained_one_two() -> KnnClassifier<&'static str> {
    let mut classifier = KnnClassifier::new(3).unwrap();
    classifier.learn(p(&[0, 0, 0, 0, 1, 1, 1, 1]), "one");
    classifier.learn(p(&[0, 0, 0, 0, 1, 1, 0, 1]), "one");
    classifier.learn(p(&[0, 0, 0, 1, 1, 1, 1, 0]), "one");
    classifier.learn(p(&[1, 1, 1, 1, 0, 0, 0, 0]), "two");
    classifier.learn(p(&[1, 1, 1, 1, 1, 0, 0, 0]), "two");
    classifier.learn(p(&[0, 1, 1, 1, 0, 0, 0, 0]), "two");
    classifier.learn(p(&[1, 0, 1, 1, 0, 0, 0, 0]), "two");
    classifier
}

#[test]
fn test_one_versus_two() {
    let classifier = trained_one_two();

    let result = classifier
        .infer(&p(&[0, 0, 0, 0, 1, 1, 1, 1]))
        .unwrap()
        .unwrap();

    assert_eq!(*result.winner(), "one");
    assert!((result.closest_distance(&"two").unwrap() - 7.0_f64.sqrt()).abs() < 0.0001);
    assert_eq!(result.votes(&"one"), Some(3));
    assert_eq!(result.votes(&"two"), None);
    assert_eq!(result.closest_distance(&"one"), Some(0.0));

    let expected = [
        0.0,
        1.0,
        2.0_f64.sqrt(),
        7.0_f64.sqrt(),
        7.0_f64.sqrt(),
        7.0_f64.sqrt(),
        8.0_f64.sqrt(),
    ];
    assert_eq!(result.distances().len(), expected.len());
    for (got, want) in result.distances().iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-10);
    }
}

#[test]
fn test_results_survive_later_learning() {
    let mut classifier = trained_one_two();
    let query = p(&[1, 1, 1, 1, 0, 0, 0, 0]);

    let before = classifier.infer(&query).unwrap().unwrap();
    let snapshot = before.clone();

    for _ in 0..5 {
        classifier.learn(query.clone(), "three");
    }
    let after = classifier.infer(&query).unwrap().unwrap();

    assert_eq!(before, snapshot);
    assert_eq!(*before.winner(), "two");
    assert_eq!(*after.winner(), "three");
    assert_eq!(before.distances().len(), 7);
    assert_eq!(after.distances().len(), 12);
}

#[test]
fn test_stream_with_record_gaps() {
    let config = KnnConfig::default().with_k(1).with_max_steps(3);
    let mut classifier = KnnClassifier::with_config(config).unwrap();

    let stream = [
        (500, [1, 1, 0, 0], 0usize, "low"),
        (501, [0, 0, 1, 1], 1, "high"),
        (507, [1, 0, 0, 0], 0, "low"),
        (510, [0, 0, 0, 1], 1, "high"),
    ];

    let mut predictions = Vec::new();
    for (record_num, bits, bucket, label) in stream {
        let info = Classification::new(bucket, label);
        let result = classifier
            .compute(record_num, &info, p(&bits), true, true)
            .unwrap();
        predictions.push(result.map(|r| *r.winner()));
        assert_eq!(classifier.learn_iteration(), record_num - 500);
    }

    assert_eq!(predictions, vec![None, Some("low"), Some("low"), Some("high")]);
    assert_eq!(classifier.len(), 4);

    // Capacity 3: iteration 0 has been evicted.
    assert_eq!(classifier.history().len(), 3);
    assert!(classifier.pattern_at(0).is_none());
    assert_eq!(classifier.pattern_at(7), Some(&p(&[1, 0, 0, 0])));
    assert_eq!(classifier.pattern_at(10), Some(&p(&[0, 0, 0, 1])));
}

#[test]
fn test_infer_only_stream_leaves_memory_alone() {
    let mut classifier = trained_one_two();
    let info = Classification::new(0, "one");

    for record_num in 0..10 {
        classifier
            .compute(record_num, &info, p(&[0, 0, 0, 0, 1, 1, 1, 1]), false, true)
            .unwrap()
            .unwrap();
    }
    assert_eq!(classifier.len(), 7);
}

#[test]
fn test_reservoir_bounded_classifier() {
    let config = KnnConfig::default()
        .with_k(3)
        .with_max_observations(20, EvictionPolicy::Reservoir { seed: 3 });
    let mut classifier = KnnClassifier::with_config(config).unwrap();

    for i in 0..200u32 {
        let label = i % 2;
        let bits = if label == 0 { [1, 1, 0, 0] } else { [0, 0, 1, 1] };
        classifier.learn(p(&bits), label);
    }

    assert_eq!(classifier.len(), 20);
    let result = classifier.infer(&p(&[1, 1, 0, 0])).unwrap().unwrap();
    assert_eq!(result.distances().len(), 20);
}

#[test]
fn test_shared_behind_mutex() {
    let classifier = Arc::new(Mutex::new(KnnClassifier::<u32>::new(1).unwrap()));

    let handles: Vec<_> = (0..4u32)
        .map(|label| {
            let classifier = Arc::clone(&classifier);
            thread::spawn(move || {
                let pattern = Pattern::from_active_indices(4, &[label as usize]).unwrap();
                classifier.lock().unwrap().learn(pattern, label);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let classifier = classifier.lock().unwrap();
    assert_eq!(classifier.len(), 4);
    let probe = Pattern::from_active_indices(4, &[2]).unwrap();
    let result = classifier.infer(&probe).unwrap().unwrap();
    assert_eq!(*result.winner(), 2);
}
