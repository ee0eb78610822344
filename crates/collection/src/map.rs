//! Map transforms and first-match queries.
//!
//! None of these functions impose an order: anything that walks a map visits
//! entries in the map's own iteration order.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::KeyValue;

/// All keys of `source`, in unspecified order.
pub fn map_keys<K: Clone, V, S>(source: &HashMap<K, V, S>) -> Vec<K> {
	source.keys().cloned().collect()
}

/// All values of `source`, in unspecified order.
pub fn map_values<K, V: Clone, S>(source: &HashMap<K, V, S>) -> Vec<V> {
	source.values().cloned().collect()
}

/// Same keys, each value replaced by `f(value)`.
pub fn map_transform_by<K, V, R, S>(source: &HashMap<K, V, S>, mut f: impl FnMut(&V) -> R) -> HashMap<K, R, S>
where
	K: Clone + Hash + Eq,
	S: BuildHasher + Clone,
{
	let mut out = HashMap::with_capacity_and_hasher(source.len(), source.hasher().clone());
	for (key, value) in source {
		out.insert(key.clone(), f(value));
	}
	out
}

/// Fallible [`map_transform_by`]. The first error is returned as-is and no
/// partial map is produced.
pub fn try_map_transform_by<K, V, R, E, S>(
	source: &HashMap<K, V, S>,
	mut f: impl FnMut(&V) -> Result<R, E>,
) -> Result<HashMap<K, R, S>, E>
where
	K: Clone + Hash + Eq,
	S: BuildHasher + Clone,
{
	let mut out = HashMap::with_capacity_and_hasher(source.len(), source.hasher().clone());
	for (key, value) in source {
		out.insert(key.clone(), f(value)?);
	}
	Ok(out)
}

/// Entries for which `predicate(key, value)` holds.
pub fn map_filter_by<K, V, S>(source: &HashMap<K, V, S>, mut predicate: impl FnMut(&K, &V) -> bool) -> HashMap<K, V, S>
where
	K: Clone + Hash + Eq,
	V: Clone,
	S: BuildHasher + Clone,
{
	let mut out = HashMap::with_hasher(source.hasher().clone());
	out.extend(
		source
			.iter()
			.filter(|(key, value)| predicate(key, value))
			.map(|(key, value)| (key.clone(), value.clone())),
	);
	out
}

/// `f(key, value)` for every entry, in the map's iteration order.
pub fn map_to_slice<K, V, R, S>(source: &HashMap<K, V, S>, mut f: impl FnMut(&K, &V) -> R) -> Vec<R> {
	source.iter().map(|(key, value)| f(key, value)).collect()
}

/// Indexes `source` by `key_fn`. On key collision the later element wins.
pub fn slice_to_map<T, K>(source: &[T], mut key_fn: impl FnMut(&T) -> K) -> HashMap<K, T>
where
	T: Clone,
	K: Hash + Eq,
{
	let mut out = HashMap::with_capacity(source.len());
	for item in source {
		out.insert(key_fn(item), item.clone());
	}
	out
}

/// Some entry matching `predicate`, or [`KeyValue::default`] when none does.
///
/// "First" means whichever match the map yields first; with several matches
/// the result is arbitrary. Prefer [`map_try_first`] when the default pair is
/// itself a valid entry.
pub fn map_first<K, V, S>(source: &HashMap<K, V, S>, predicate: impl FnMut(&K, &V) -> bool) -> KeyValue<K, V>
where
	K: Clone + Default,
	V: Clone + Default,
{
	map_try_first(source, predicate).unwrap_or_default()
}

/// Some entry matching `predicate`, or `None`.
pub fn map_try_first<K, V, S>(source: &HashMap<K, V, S>, mut predicate: impl FnMut(&K, &V) -> bool) -> Option<KeyValue<K, V>>
where
	K: Clone,
	V: Clone,
{
	source
		.iter()
		.find(|(key, value)| predicate(key, value))
		.map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
}

/// Whether any entry matches `predicate`.
pub fn map_any<K, V, S>(source: &HashMap<K, V, S>, mut predicate: impl FnMut(&K, &V) -> bool) -> bool {
	source.iter().any(|(key, value)| predicate(key, value))
}
