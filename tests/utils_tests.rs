use cmdwire::utils::{increment_u32_id, next_nonzero_u32};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

#[test]
fn test_increment_u32_id_is_increasing() {
    let first = increment_u32_id();
    let second = increment_u32_id();

    assert!(second > first, "Id did not increase: {} -> {}", first, second);
    assert_ne!(first, 0);
}

#[test]
fn test_increment_u32_id_uniqueness_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| (0..2_500).map(|_| increment_u32_id()).collect::<Vec<_>>()))
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "Duplicate ID generated: {}", id);
        }
    }
    assert_eq!(seen.len(), 10_000);
}

#[test]
fn test_counter_skips_zero_on_wrap() {
    let counter = AtomicU32::new(u32::MAX);

    assert_eq!(next_nonzero_u32(&counter), u32::MAX);
    assert_eq!(next_nonzero_u32(&counter), 1);
    assert_eq!(counter.load(Ordering::Relaxed), 2);
}
