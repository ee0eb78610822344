use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Order-sensitive slice equality.
pub fn equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
	a == b
}

/// Order-sensitive slice equality under a caller-supplied comparison.
pub fn equal_func<A, B>(a: &[A], b: &[B], mut eq: impl FnMut(&A, &B) -> bool) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(lhs, rhs)| eq(lhs, rhs))
}

/// Map equality, independent of insertion order and hasher.
pub fn map_equal<K, V, S1, S2>(a: &HashMap<K, V, S1>, b: &HashMap<K, V, S2>) -> bool
where
	K: Hash + Eq,
	V: PartialEq,
	S1: BuildHasher,
	S2: BuildHasher,
{
	map_equal_func(a, b, |lhs, rhs| lhs == rhs)
}

/// Map equality with values compared by `eq`. Keys must match exactly.
pub fn map_equal_func<K, A, B, S1, S2>(a: &HashMap<K, A, S1>, b: &HashMap<K, B, S2>, mut eq: impl FnMut(&A, &B) -> bool) -> bool
where
	K: Hash + Eq,
	S1: BuildHasher,
	S2: BuildHasher,
{
	a.len() == b.len() && a.iter().all(|(key, lhs)| b.get(key).is_some_and(|rhs| eq(lhs, rhs)))
}

/// The smaller of two values; `a` on ties.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
	if b < a { b } else { a }
}

/// The larger of two values; `a` on ties.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
	if b > a { b } else { a }
}

/// Smallest element of `items`, or `T::default()` when `items` is empty.
pub fn min_of<T: PartialOrd + Clone + Default>(items: &[T]) -> T {
	extreme_of(items, min)
}

/// Largest element of `items`, or `T::default()` when `items` is empty.
pub fn max_of<T: PartialOrd + Clone + Default>(items: &[T]) -> T {
	extreme_of(items, max)
}

fn extreme_of<T: Clone + Default>(items: &[T], pick: impl Fn(T, T) -> T) -> T {
	let mut iter = items.iter().cloned();
	match iter.next() {
		Some(first) => iter.fold(first, pick),
		None => T::default(),
	}
}
