use std::collections::HashSet;
use std::sync::Barrier;
use std::sync::atomic::{AtomicUsize, Ordering};

use colle_sync_map::{SyncMap, SyncMapConfig};
use parking_lot as _;
use rustc_hash as _;
use tracing as _;

const THREADS: usize = 16;

#[test]
fn load_or_store_has_single_winner() {
	for _ in 0..50 {
		let map: SyncMap<&str, usize> = SyncMap::new();
		let barrier = Barrier::new(THREADS);
		let stored = AtomicUsize::new(0);

		let observed: Vec<usize> = std::thread::scope(|scope| {
			let handles: Vec<_> = (0..THREADS)
				.map(|i| {
					let (map, barrier, stored) = (&map, &barrier, &stored);
					scope.spawn(move || {
						barrier.wait();
						let (actual, loaded) = map.load_or_store("key", i);
						if !loaded {
							assert_eq!(actual, i);
							stored.fetch_add(1, Ordering::SeqCst);
						}
						actual
					})
				})
				.collect();
			handles.into_iter().map(|h| h.join().expect("worker thread panicked")).collect()
		});

		assert_eq!(stored.load(Ordering::SeqCst), 1, "exactly one caller must store");
		let winner = map.load(&"key").expect("winner value stored");
		assert!(observed.iter().all(|v| *v == winner), "all callers observe the winner: {observed:?}");
	}
}

#[test]
fn compare_and_swap_counter_loses_no_updates() {
	let map: SyncMap<u8, u64> = SyncMap::with_config(SyncMapConfig { shards: 4 });
	map.store(0, 0);

	std::thread::scope(|scope| {
		for _ in 0..8 {
			scope.spawn(|| {
				for _ in 0..500 {
					loop {
						let current = map.load(&0).expect("counter present");
						if map.compare_and_swap(&0, &current, current + 1) {
							break;
						}
					}
				}
			});
		}
	});

	assert_eq!(map.load(&0), Some(8 * 500));
}

#[test]
fn compare_and_swap_rejects_stale_value_after_racing_write() {
	let map: SyncMap<&str, u32> = SyncMap::new();
	map.store("k", 1);
	let stale = map.load(&"k").expect("present");

	std::thread::scope(|scope| {
		scope.spawn(|| map.store("k", 2));
	});

	assert!(!map.compare_and_swap(&"k", &stale, 10));
	assert_eq!(map.load(&"k"), Some(2));
}

#[test]
fn concurrent_writers_on_distinct_keys() {
	let map: SyncMap<usize, usize> = SyncMap::new();
	std::thread::scope(|scope| {
		for t in 0..THREADS {
			let map = &map;
			scope.spawn(move || {
				for i in 0..100 {
					map.store(t * 100 + i, i);
				}
			});
		}
	});
	assert_eq!(map.len(), THREADS * 100);

	let mut total = 0;
	map.range(|_, v| {
		total += v;
		true
	});
	assert_eq!(total, THREADS * (0..100).sum::<usize>());
}

#[test]
fn range_never_repeats_a_key_under_concurrent_writes() {
	let map: SyncMap<u32, u32> = SyncMap::with_config(SyncMapConfig { shards: 8 });
	for key in 0..4000 {
		map.store(key, key);
	}

	std::thread::scope(|scope| {
		scope.spawn(|| {
			for key in 1000..5000 {
				map.store(key, key + 1);
			}
		});
		scope.spawn(|| {
			for key in 0..4000 {
				map.delete(&key);
			}
		});

		for _ in 0..20 {
			let mut seen = HashSet::new();
			map.range(|key, _| {
				assert!(seen.insert(*key), "key {key} visited twice in one range call");
				true
			});
		}
	});

	assert!((0..1000).all(|key| !map.contains_key(&key)), "deleted keys stay gone");
	assert!((4000..5000).all(|key| map.load(&key) == Some(key + 1)), "late stores all land");
}
