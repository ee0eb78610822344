//! Sharded concurrent hash map.
//!
//! [`SyncMap`] splits its entries across a fixed number of lock-guarded shards.
//! Every operation on a key runs entirely under that key's shard lock, so all
//! operations on the same key are linearizable: of several racing
//! [`SyncMap::load_or_store`] calls on an absent key, exactly one stores.
//!
//! Absence is always reported through `Option` or `bool`; no operation fails.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Shard layout for a [`SyncMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncMapConfig {
	/// Number of lock shards. Rounded up to a power of two, minimum 1.
	pub shards: usize,
}

impl Default for SyncMapConfig {
	fn default() -> Self {
		Self { shards: 16 }
	}
}

impl SyncMapConfig {
	fn shard_count(self) -> usize {
		self.shards.max(1).next_power_of_two()
	}
}

/// Concurrent map with per-key atomic load/store/swap/compare operations.
pub struct SyncMap<K, V> {
	shards: Box<[RwLock<FxHashMap<K, V>>]>,
	hasher: FxBuildHasher,
}

impl<K, V> Default for SyncMap<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V> fmt::Debug for SyncMap<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SyncMap")
			.field("shards", &self.shards.len())
			.field("len", &self.shards.iter().map(|s| s.read().len()).sum::<usize>())
			.finish()
	}
}

impl<K, V> SyncMap<K, V> {
	/// Creates an empty map with the default shard layout.
	pub fn new() -> Self {
		Self::with_config(SyncMapConfig::default())
	}

	/// Creates an empty map with an explicit shard layout.
	pub fn with_config(config: SyncMapConfig) -> Self {
		let shards = config.shard_count();
		tracing::trace!(shards, "sync_map.new");
		Self {
			shards: (0..shards).map(|_| RwLock::new(HashMap::default())).collect(),
			hasher: FxBuildHasher,
		}
	}

	/// Number of entries across all shards.
	///
	/// Shards are read one after another, so under concurrent writes the
	/// result is not a point-in-time count.
	pub fn len(&self) -> usize {
		self.shards.iter().map(|s| s.read().len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.shards.iter().all(|s| s.read().is_empty())
	}

	/// Removes every entry.
	pub fn clear(&self) {
		for shard in self.shards.iter() {
			shard.write().clear();
		}
	}
}

impl<K, V> SyncMap<K, V>
where
	K: Hash + Eq,
{
	fn shard<Q>(&self, key: &Q) -> &RwLock<FxHashMap<K, V>>
	where
		Q: Hash + ?Sized,
	{
		let hash = self.hasher.hash_one(key) as usize;
		&self.shards[hash & (self.shards.len() - 1)]
	}

	/// Sets the value for `key`, replacing any existing value.
	pub fn store(&self, key: K, value: V) {
		self.shard(&key).write().insert(key, value);
	}

	/// Returns a clone of the value for `key`.
	pub fn load<Q>(&self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
		V: Clone,
	{
		self.shard(key).read().get(key).cloned()
	}

	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.shard(key).read().contains_key(key)
	}

	/// Returns the existing value for `key` if present; otherwise stores and
	/// returns `value`.
	///
	/// The flag is `true` when an existing value was loaded and `false` when
	/// `value` was stored.
	pub fn load_or_store(&self, key: K, value: V) -> (V, bool)
	where
		V: Clone,
	{
		let mut shard = self.shard(&key).write();
		match shard.entry(key) {
			Entry::Occupied(slot) => (slot.get().clone(), true),
			Entry::Vacant(slot) => (slot.insert(value).clone(), false),
		}
	}

	/// Removes `key`. Absent keys are ignored.
	pub fn delete<Q>(&self, key: &Q)
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.shard(key).write().remove(key);
	}

	/// Removes `key` and returns its value, if it was present.
	pub fn load_and_delete<Q>(&self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.shard(key).write().remove(key)
	}

	/// Stores `value` and returns the previous value, if any.
	pub fn swap(&self, key: K, value: V) -> Option<V> {
		self.shard(&key).write().insert(key, value)
	}

	/// Replaces the value for `key` with `new` only if it currently equals `old`.
	///
	/// Returns whether the replacement happened. An absent key never matches.
	pub fn compare_and_swap<Q>(&self, key: &Q, old: &V, new: V) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
		V: PartialEq,
	{
		let mut shard = self.shard(key).write();
		match shard.get_mut(key) {
			Some(current) if *current == *old => {
				*current = new;
				true
			}
			_ => false,
		}
	}

	/// Removes `key` only if its value currently equals `old`.
	pub fn compare_and_delete<Q>(&self, key: &Q, old: &V) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
		V: PartialEq,
	{
		let mut shard = self.shard(key).write();
		if shard.get(key).is_some_and(|current| current == old) {
			shard.remove(key);
			true
		} else {
			false
		}
	}

	/// Calls `visit` for each entry until it returns `false`.
	///
	/// Each shard is copied under its read lock and visited after the lock is
	/// released, so `visit` may freely call back into the map. Entries written
	/// to a shard after it was copied are not seen; no entry is visited twice.
	pub fn range(&self, mut visit: impl FnMut(&K, &V) -> bool)
	where
		K: Clone,
		V: Clone,
	{
		for shard in self.shards.iter() {
			let entries: Vec<(K, V)> = shard.read().iter().map(|(k, v)| (k.clone(), v.clone())).collect();
			for (key, value) in &entries {
				if !visit(key, value) {
					return;
				}
			}
		}
	}
}
