use proptest::prelude::*;

use super::*;

#[test]
fn transform_by_maps_in_order() {
	let out = transform_by(&[1, 2, 3, 4], |n| (n * n).to_string());
	assert_eq!(out, ["1", "4", "9", "16"]);
}

#[test]
fn transform_by_empty_is_empty_vec() {
	let out: Vec<String> = transform_by(&[] as &[i32], i32::to_string);
	assert!(out.is_empty());
}

#[test]
fn transform_many_by_flattens() {
	let out = transform_many_by(&["ab", "cd"], |s| s.bytes().map(u32::from).collect::<Vec<_>>());
	assert_eq!(out, [97, 98, 99, 100]);

	let positions = transform_many_by(&["abc", "xyz"], |s| s.bytes().map(|b| b - b'a' + 1).collect::<Vec<_>>());
	assert_eq!(positions, [1, 2, 3, 24, 25, 26]);
}

#[test]
fn transform_many_by_allows_empty_outputs() {
	let out = transform_many_by(&[0usize, 2, 1], |n| std::iter::repeat_n(*n, *n));
	assert_eq!(out, [2, 2, 1]);
}

#[test]
fn try_transform_by_collects_successes() {
	let out = try_transform_by(&["1", "2", "3"], |s| s.parse::<i32>());
	assert_eq!(out, Ok(vec![1, 2, 3]));
}

#[test]
fn try_transform_by_stops_at_first_error() {
	let mut calls = 0;
	let out = try_transform_by(&["1", "a", "3"], |s| {
		calls += 1;
		s.parse::<i32>()
	});
	let err = out.unwrap_err();
	assert_eq!(err.to_string(), "invalid digit found in string");
	assert_eq!(calls, 2);
}

#[test]
fn filter_by_keeps_order() {
	assert_eq!(filter_by(&[5, 1, 4, 2, 3], |n| n % 2 == 1), [5, 1, 3]);
}

#[test]
fn aggregate_folds_left() {
	let joined = aggregate(&["a", "b", "c"], String::new(), |mut acc, s| {
		acc.push_str(s);
		acc
	});
	assert_eq!(joined, "abc");
	assert_eq!(aggregate(&[1, 2, 3], 10, |acc, n| acc - n), 4);
}

#[test]
fn group_by_preserves_relative_order() {
	let groups = group_by(&["apple", "bob", "avocado", "banana", "cat"], |s| s.as_bytes()[0]);
	assert_eq!(groups.len(), 3);
	assert_eq!(groups[&b'a'], ["apple", "avocado"]);
	assert_eq!(groups[&b'b'], ["bob", "banana"]);
	assert_eq!(groups[&b'c'], ["cat"]);
}

#[test]
fn chunk_by_splits_with_short_tail() {
	let chunks = chunk_by(&[1, 2, 3, 4, 5], 2).unwrap();
	assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);

	let whole = chunk_by(&[1, 2], 8).unwrap();
	assert_eq!(whole, vec![vec![1, 2]]);

	assert!(chunk_by(&[] as &[u8], 3).unwrap().is_empty());
}

#[test]
fn chunk_by_rejects_zero_size() {
	let err = chunk_by(&[1, 2, 3], 0).unwrap_err();
	assert!(matches!(err, CollectionError::InvalidArgument { name: "size", .. }));
}

#[test]
fn distinct_keeps_first_occurrence() {
	assert_eq!(distinct(&[3, 1, 3, 2, 1]), [3, 1, 2]);
}

#[test]
fn duplicates_reports_each_repeat_once() {
	assert!(duplicates::<&str>(&[]).is_empty());
	assert_eq!(duplicates(&["a", "b", "a", "a"]), ["a"]);
	assert_eq!(duplicates(&[1, 2, 2, 1, 3]), [2, 1]);
}

#[test]
fn intersection_follows_left_order() {
	assert_eq!(intersection(&[4, 1, 2, 1, 3], &[3, 1, 9]), [1, 3]);
	assert!(intersection(&[1, 2], &[]).is_empty());
}

#[test]
fn difference_follows_left_order() {
	assert_eq!(difference(&[4, 1, 2, 4, 3], &[1, 3]), [4, 2]);
	assert_eq!(difference(&[1, 2], &[]), [1, 2]);
}

proptest! {
	#[test]
	fn prop_identity_transform(source in proptest::collection::vec(any::<i64>(), 0..64)) {
		prop_assert_eq!(transform_by(&source, |n| *n), source);
	}

	#[test]
	fn prop_filter_is_complete_subsequence(source in proptest::collection::vec(any::<i16>(), 0..64)) {
		let keep = |n: &i16| n % 3 == 0;
		let filtered = filter_by(&source, keep);

		prop_assert!(filtered.iter().all(keep));
		prop_assert_eq!(filtered.len(), source.iter().filter(|n| keep(*n)).count());

		let mut rest = source.iter();
		for item in &filtered {
			prop_assert!(rest.any(|candidate| candidate == item), "filtered output must be a subsequence");
		}
	}
}
