use std::collections::HashMap;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::CollectionError;

/// Maps every element through `f`, preserving length and order.
pub fn transform_by<T, R>(source: &[T], f: impl FnMut(&T) -> R) -> Vec<R> {
	source.iter().map(f).collect()
}

/// Maps every element to zero or more outputs and concatenates them in order.
pub fn transform_many_by<T, I>(source: &[T], f: impl FnMut(&T) -> I) -> Vec<I::Item>
where
	I: IntoIterator,
{
	source.iter().flat_map(f).collect()
}

/// Fallible [`transform_by`].
///
/// Stops at the first error and returns it unchanged; outputs produced before
/// the failure are dropped.
pub fn try_transform_by<T, R, E>(source: &[T], f: impl FnMut(&T) -> Result<R, E>) -> Result<Vec<R>, E> {
	source.iter().map(f).collect()
}

/// Keeps the elements matching `predicate`, in their original order.
pub fn filter_by<T: Clone>(source: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
	source.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Left fold: `f(f(f(init, a), b), c)`.
pub fn aggregate<T, A>(source: &[T], init: A, f: impl FnMut(A, &T) -> A) -> A {
	source.iter().fold(init, f)
}

/// Buckets elements by `key_fn`. Each bucket keeps the input's relative order.
pub fn group_by<T, K>(source: &[T], mut key_fn: impl FnMut(&T) -> K) -> HashMap<K, Vec<T>>
where
	T: Clone,
	K: Hash + Eq,
{
	let mut groups: HashMap<K, Vec<T>> = HashMap::new();
	for item in source {
		groups.entry(key_fn(item)).or_default().push(item.clone());
	}
	groups
}

/// Splits `source` into consecutive chunks of at most `size` elements.
///
/// The last chunk holds the remainder and may be shorter. A `size` of zero is
/// rejected with [`CollectionError::InvalidArgument`].
pub fn chunk_by<T: Clone>(source: &[T], size: usize) -> Result<Vec<Vec<T>>, CollectionError> {
	if size == 0 {
		return Err(CollectionError::InvalidArgument {
			name: "size",
			reason: "chunk size must be greater than zero",
		});
	}
	Ok(source.chunks(size).map(<[T]>::to_vec).collect())
}

/// First occurrence of every distinct value, in input order.
pub fn distinct<T>(source: &[T]) -> Vec<T>
where
	T: Clone + Hash + Eq,
{
	let mut seen = FxHashSet::default();
	source.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

/// Values occurring more than once, each reported once at its first repeat.
pub fn duplicates<T>(source: &[T]) -> Vec<T>
where
	T: Clone + Hash + Eq,
{
	let mut counts: FxHashMap<&T, usize> = FxHashMap::default();
	let mut out = Vec::new();
	for item in source {
		let count = counts.entry(item).or_insert(0);
		*count += 1;
		if *count == 2 {
			out.push(item.clone());
		}
	}
	out
}

/// Distinct elements of `a` that also appear in `b`, in `a`'s order.
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
	T: Clone + Hash + Eq,
{
	let other: FxHashSet<&T> = b.iter().collect();
	let mut seen = FxHashSet::default();
	a.iter().filter(|item| other.contains(item) && seen.insert(*item)).cloned().collect()
}

/// Distinct elements of `a` that do not appear in `b`, in `a`'s order.
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
	T: Clone + Hash + Eq,
{
	let other: FxHashSet<&T> = b.iter().collect();
	let mut seen = FxHashSet::default();
	a.iter().filter(|item| !other.contains(item) && seen.insert(*item)).cloned().collect()
}

#[cfg(test)]
mod tests;
