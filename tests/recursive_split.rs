use approx::assert_abs_diff_eq;
use infosplit::prelude::*;
use infosplit_datasets::{generate, tennis};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Leaves of a tree grown by splitting until no candidate reduces the entropy
fn grow<L: Label>(dataset: Dataset<f64, L>, depth: usize, leaves: &mut Vec<Dataset<f64, L>>) {
    let parent = dataset.outcomes().entropy::<f64>();

    if depth == 0 || parent == 0. {
        leaves.push(dataset);
        return;
    }

    match dataset.best_single_attribute_splitter() {
        Some(splitter) if dataset.splitter_entropy(&splitter) < parent => {
            for (_, child) in dataset.split_on(&splitter) {
                grow(child, depth - 1, leaves);
            }
        }
        _ => leaves.push(dataset),
    }
}

#[test]
fn traffic_lights_threshold_then_category() {
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = generate::traffic_lights(200, &mut rng);

    let top = dataset.best_single_attribute_splitter().unwrap();
    assert_eq!(top.feature(), 0);
    assert!(
        (top.value() - 0.5).abs() < 0.05,
        "Expected a threshold near 0.5, got {}",
        top.value()
    );

    let children = dataset.split_on(&top);
    assert_eq!(children.len(), 2);
    let (outcome, below) = &children[0];
    assert!(!*outcome);

    let next = below.best_single_attribute_splitter().unwrap();
    assert_eq!(next.feature(), 1);
}

#[test]
fn traffic_lights_category_separates_exactly() {
    let mut rng = SmallRng::seed_from_u64(7);
    let dataset = generate::traffic_lights(200, &mut rng);

    let below = dataset
        .sample_iter()
        .enumerate()
        .filter(|(_, (row, _))| row[0] < 0.5)
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    let below = dataset.take(&below);

    let splitter = below.best_single_attribute_splitter().unwrap();
    assert_eq!(splitter, IsEqualSplitter::new(1, 0.).into());
    assert_abs_diff_eq!(below.splitter_entropy(&splitter), 0.);

    let children = below.split_on(&splitter);
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].1.outcomes().most_common_label(), Some(&"Yellow"));
    assert_eq!(children[1].1.outcomes().most_common_label(), Some(&"Red"));
    assert!(children
        .iter()
        .all(|(_, child)| child.outcomes().len() == 1));
}

#[test]
fn traffic_lights_recursion_fits_training_data() {
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = generate::traffic_lights(200, &mut rng);

    let mut leaves = Vec::new();
    grow(dataset.clone(), 8, &mut leaves);

    // leaves partition the dataset
    assert_eq!(
        leaves.iter().map(|leaf| leaf.nsamples()).sum::<usize>(),
        dataset.nsamples()
    );
    assert!(leaves.iter().all(|leaf| leaf.shares_attribute_types(&dataset)));

    let correct = leaves
        .iter()
        .filter_map(|leaf| leaf.most_common_outcomes(1).into_iter().next())
        .map(|(_, count)| count)
        .sum::<usize>();
    let accuracy = correct as f64 / dataset.nsamples() as f64;
    assert!(
        accuracy >= 0.95,
        "Expected >=95% training accuracy, got {:.2}",
        accuracy
    );
}

#[test]
fn parallel_search_on_traffic_lights() {
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = generate::traffic_lights(500, &mut rng);

    let params = SplitSearchParams::new().parallel(true).check().unwrap();
    assert_eq!(
        dataset.best_single_attribute_splitter_with(&params),
        dataset.best_single_attribute_splitter()
    );
}

#[test]
fn informative_feature_is_selected() {
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = generate::single_informative(100, 6, &mut rng);

    let splitter = dataset.best_single_attribute_splitter().unwrap();
    assert_eq!(splitter.feature(), 6);
    assert_abs_diff_eq!(dataset.splitter_entropy(&splitter), 0.);
}

#[test]
fn coin_flips_split() {
    let dataset = generate::coin_flips();

    assert_abs_diff_eq!(dataset.splitter_entropy(&IsEqualSplitter::new(1, 0.)), 0.);
    assert_abs_diff_eq!(dataset.splitter_entropy(&IsEqualSplitter::new(0, 0.)), 1.);
    assert_eq!(
        dataset.best_single_attribute_splitter().unwrap().to_string(),
        "x[1] == 0"
    );
}

#[test]
fn tennis_attribute_entropies() {
    let dataset = tennis();

    // unweighted sums of bucket entropies favour humidity with its two buckets
    assert_abs_diff_eq!(dataset.entropy_of(0), 1.9419, epsilon = 1e-4);
    assert_abs_diff_eq!(dataset.entropy_of(1), 2.7296, epsilon = 1e-4);
    assert_abs_diff_eq!(dataset.entropy_of(2), 1.5769, epsilon = 1e-4);
    assert_abs_diff_eq!(dataset.entropy_of(3), 1.8113, epsilon = 1e-4);
    assert_eq!(dataset.best_attribute(), Some(2));
    assert_eq!(dataset.best_attribute_among(&[0, 1, 3]), Some(3));
    assert_eq!(dataset.best_attribute_among(&[1, 3]), Some(3));

    // the size weighted multi-way split still ranks outlook first
    assert_abs_diff_eq!(
        dataset.splitter_entropy(&dataset.attribute_splitter(0)),
        0.6935,
        epsilon = 1e-4
    );
}

#[test]
fn tennis_overcast_is_best_binary_split() {
    let dataset = tennis();

    // overcast days are always played
    let splitter = dataset.best_single_attribute_splitter().unwrap();
    assert_eq!(splitter, IsEqualSplitter::new(0, 1.).into());
    assert_abs_diff_eq!(dataset.splitter_entropy(&splitter), 10. / 14., epsilon = 1e-12);
}

#[test]
fn tennis_multiway_split() {
    let dataset = tennis();
    let children = dataset.split_on(&dataset.attribute_splitter(0));

    let sizes = children
        .iter()
        .map(|(bucket, child)| (*bucket, child.nsamples()))
        .collect::<Vec<_>>();
    assert_eq!(sizes, vec![(0, 5), (1, 4), (2, 5)]);
    assert_eq!(children[1].1.most_common_outcome(), Some(true));
    assert_eq!(children[0].1.most_common_outcome(), Some(false));
}

#[test]
fn bootstrap_covers_small_dataset() {
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = tennis();

    let sample = dataset.bootstrap_with_size(2000, &mut rng).unwrap();
    assert_eq!(sample.nsamples(), 2000);

    // every original row appears in the sample
    for row in dataset.records().rows() {
        assert!(sample.records().rows().into_iter().any(|drawn| drawn == row));
    }
}

#[test]
fn split_on_is_exhaustive_and_disjoint() {
    let mut rng = SmallRng::seed_from_u64(42);
    let dataset = generate::single_informative(50, 3, &mut rng);

    for splitter in dataset.each_single_attribute_splitter() {
        let children = dataset.split_on(&splitter);
        assert!(children.len() <= 2);
        assert_eq!(
            children.iter().map(|(_, c)| c.nsamples()).sum::<usize>(),
            dataset.nsamples()
        );
        for (outcome, child) in &children {
            assert!(child.records().rows().into_iter().all(|row| splitter.split(row) == *outcome));
        }
    }
}

#[test]
fn malformed_input_fails_at_construction() {
    let err = Dataset::from_rows(vec![vec![0., 1.], vec![1., 0.], vec![1., 1.]], vec![true, false])
        .unwrap_err();
    assert!(matches!(err, Error::LabelCount { rows: 3, labels: 2 }));
    assert_eq!(
        err.to_string(),
        "number of labels (2) does not match number of rows (3)"
    );

    let err = Dataset::from_rows(vec![vec![0., 1.], vec![1.]], vec![true, false]).unwrap_err();
    assert!(matches!(
        err,
        Error::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        }
    ));
}
