use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_forest::{NodeId, RbTree};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// Sorted multiset used as the reference model.
fn model_insert(model: &mut Vec<i32>, v: i32) {
    let at = model.partition_point(|&x| x <= v);
    model.insert(at, v);
}

fn model_remove(model: &mut Vec<i32>, v: i32) -> Option<i32> {
    let at = model.binary_search(&v).ok()?;
    Some(model.remove(at))
}

fn height_bound(n: usize) -> isize {
    2 * ((n + 1) as f64).log2().floor() as isize
}

fn run_trace(seed: u64, steps: usize, key_space: i32, insert_bias: f64) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut tree = RbTree::new();
    let mut model = Vec::new();

    for step in 0..steps {
        let key = rng.gen_range(0..key_space);
        if rng.gen_bool(insert_bias) {
            tree.insert(key);
            model_insert(&mut model, key);
        } else {
            assert_eq!(
                tree.remove(&key),
                model_remove(&mut model, key),
                "seed {seed} step {step}: remove {key}"
            );
        }

        if let Err(err) = tree.assert_valid() {
            panic!("seed {seed} step {step} (key {key}): {err}\n{}", tree.print(""));
        }
        assert_eq!(tree.len(), model.len());
        assert!(tree.tree_height() <= height_bound(tree.len()));
    }

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model);
    for v in &model {
        assert!(tree.contains(v));
    }
}

#[test]
fn random_insert_only_trace_matrix() {
    init_logging();
    for seed in 0..4 {
        run_trace(seed, 400, 1_000, 1.0);
    }
}

#[test]
fn random_mixed_trace_matrix() {
    init_logging();
    for seed in 10..18 {
        run_trace(seed, 1_500, 200, 0.55);
    }
}

#[test]
fn random_dense_duplicates_trace_matrix() {
    init_logging();
    for seed in 100..104 {
        run_trace(seed, 1_000, 16, 0.5);
    }
}

#[test]
fn grow_then_drain_matrix() {
    init_logging();
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);
    let mut tree = RbTree::new();
    let mut values: Vec<u32> = (0..2_000).map(|_| rng.gen_range(0..10_000)).collect();
    tree.extend(values.iter().copied());
    assert!(tree.tree_height() <= height_bound(values.len()));
    tree.assert_valid().unwrap();

    // Drain in an order unrelated to insertion.
    values.sort_unstable_by_key(|v| v.wrapping_mul(2_654_435_761));
    for (i, v) in values.iter().enumerate() {
        assert_eq!(tree.remove(v), Some(*v));
        if i % 50 == 0 {
            tree.assert_valid().unwrap();
        }
    }
    assert!(tree.is_empty());
    tree.assert_valid().unwrap();
}

#[test]
fn random_handle_removal_trace_matrix() {
    init_logging();
    for seed in 200..210 {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = RbTree::new();
        let mut live: Vec<(NodeId, i32)> = Vec::new();

        for step in 0..1_000 {
            if live.is_empty() || rng.gen_bool(0.55) {
                let key = rng.gen_range(0..24);
                live.push((tree.insert(key), key));
            } else {
                let (id, key) = live.swap_remove(rng.gen_range(0..live.len()));
                assert_eq!(tree.remove_node(id), Some(key), "seed {seed} step {step}");
                assert_eq!(tree.remove_node(id), None);
            }

            if let Err(err) = tree.assert_valid() {
                panic!("seed {seed} step {step}: {err}\n{}", tree.print(""));
            }
            // Surviving handles never move.
            for &(id, key) in &live {
                assert_eq!(tree.value(id), Some(&key), "seed {seed} step {step}: {id}");
            }
            assert_eq!(tree.len(), live.len());
        }
    }
}
