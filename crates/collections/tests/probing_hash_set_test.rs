use std::collections::HashSet;

use collections::probing::{ProbeSetError, ProbingHashSet, Slot, is_prime};

/// Small deterministic key stream so runs are reproducible
fn keys(seed: u64, n: usize) -> Vec<i32> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as i32
        })
        .collect()
}

#[test]
fn test_scenario_growth_at_ninth_key() {
    let mut set = ProbingHashSet::new(10).unwrap();
    assert_eq!(set.capacity(), 11);

    for k in 1..=8 {
        set.insert(k).unwrap();
        assert_eq!(set.capacity(), 11);
    }

    set.insert(9).unwrap();
    assert_eq!(set.capacity(), 23);
    assert!(set.search(9).is_some());
}

#[test]
fn test_scenario_same_residue() {
    let mut set = ProbingHashSet::new(5).unwrap();
    assert_eq!(set.capacity(), 5);

    let slots: Vec<usize> = [0, 5, 10]
        .into_iter()
        .map(|k| set.insert(k).unwrap())
        .collect();
    let distinct: HashSet<usize> = slots.iter().copied().collect();
    assert_eq!(distinct.len(), 3);

    for (k, slot) in [0, 5, 10].into_iter().zip(slots) {
        assert_eq!(set.search(k), Some(slot));
    }
}

#[test]
fn test_remove_on_empty_table() {
    let mut set = ProbingHashSet::new(1).unwrap();
    for k in [-5, 0, 1, 7, i32::MAX] {
        assert_eq!(set.remove(k), Err(ProbeSetError::KeyNotFound { key: k }));
    }
    assert!(set.is_empty());
}

#[test]
fn test_every_inserted_key_is_found_and_dumped_once() {
    // at half load a prime table always has a free slot on the probe chain
    let mut set = ProbingHashSet::with_load_factor(3, 0.5).unwrap();
    let mut expected = HashSet::new();

    for k in keys(7, 2_000) {
        match set.insert(k) {
            Ok(_) => assert!(expected.insert(k)),
            Err(ProbeSetError::DuplicateKey { .. }) => assert!(expected.contains(&k)),
            Err(e) => panic!("unexpected error {e}"),
        }
    }
    assert_eq!(set.len(), expected.len());

    for k in &expected {
        assert!(set.contains(*k), "missing {k}");
    }

    let dump = set.dump();
    assert_eq!(dump.len(), set.capacity());
    for k in &expected {
        let token = k.to_string();
        assert_eq!(dump.iter().filter(|t| **t == token).count(), 1);
    }
    assert_eq!(
        dump.iter().filter(|t| t.as_str() != "-").count(),
        expected.len()
    );
}

#[test]
fn test_duplicate_does_not_change_len() {
    let mut set = ProbingHashSet::new(10).unwrap();
    set.insert(42).unwrap();
    let before = set.slots().to_vec();

    let err = set.insert(42).unwrap_err();
    assert!(matches!(err, ProbeSetError::DuplicateKey { key: 42, .. }));
    assert_eq!(set.len(), 1);
    assert_eq!(set.slots(), &before[..]);
}

#[test]
fn test_remove_then_reinsert() {
    let mut set = ProbingHashSet::new(7).unwrap();
    for k in [3, 10, 17] {
        set.insert(k).unwrap();
    }

    set.remove(10).unwrap();
    assert_eq!(set.search(10), None);
    assert_eq!(set.len(), 2);
    assert!(set.contains(17));

    assert_eq!(set.remove(10), Err(ProbeSetError::KeyNotFound { key: 10 }));
    assert_eq!(set.len(), 2);

    set.insert(10).unwrap();
    assert!(set.search(10).is_some());
    assert_eq!(set.len(), 3);
}

#[test]
fn test_rehash_preserves_keys() {
    let mut set = ProbingHashSet::with_load_factor(2, 0.5).unwrap();
    let mut present: Vec<i32> = Vec::new();

    for k in keys(11, 500) {
        if set.contains(k) {
            continue;
        }
        let capacity = set.capacity();
        set.insert(k).unwrap();
        present.push(k);

        if set.capacity() != capacity {
            assert!(is_prime(set.capacity()));
            assert!(set.capacity() >= 2 * capacity);
            assert_eq!(set.tombstones(), 0);
            for p in &present {
                assert!(set.contains(*p), "{p} lost growing from {capacity}");
            }
        }
        assert!(set.load_factor() <= set.max_load_factor());
    }
}

#[test]
fn test_mixed_workload_with_tombstones() {
    let mut set = ProbingHashSet::with_load_factor(16, 0.5).unwrap();
    let mut model = HashSet::new();

    for (n, k) in keys(3, 5_000).into_iter().enumerate() {
        let k = k % 300;
        if n % 3 == 0 {
            assert_eq!(set.remove(k).is_ok(), model.remove(&k));
        } else {
            assert_eq!(set.insert(k).is_ok(), model.insert(k));
        }
        assert_eq!(set.len(), model.len());
    }

    for k in -300..300 {
        assert_eq!(set.contains(k), model.contains(&k), "key {k}");
    }
    let live = set
        .slots()
        .iter()
        .filter(|s| matches!(s, Slot::Occupied(_)))
        .count();
    assert_eq!(live, set.len());
}

#[test]
fn test_probe_limit_with_full_load_factor() {
    // mod 7 the quadratic probes only reach offsets {0, 1, 2, 4}
    let mut set = ProbingHashSet::with_load_factor(7, 1.0).unwrap();
    for k in [0, 1, 2, 4] {
        set.insert(k).unwrap();
    }

    let before = set.slots().to_vec();
    assert_eq!(
        set.insert(7),
        Err(ProbeSetError::ProbeLimitReached { key: 7, probes: 7 })
    );
    assert_eq!(set.slots(), &before[..]);

    // a key homed elsewhere still fits
    set.insert(3).unwrap();
    assert_eq!(set.len(), 5);
}
