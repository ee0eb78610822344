/// One entry of a map, returned by first-match queries.
///
/// The [`Default`] value (default key, default value) is what
/// [`map_first`](crate::map_first) reports when nothing matched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyValue<K, V> {
	pub key: K,
	pub value: V,
}

impl<K, V> KeyValue<K, V> {
	pub const fn new(key: K, value: V) -> Self {
		Self { key, value }
	}

	/// Splits the entry into a `(key, value)` tuple.
	pub fn into_tuple(self) -> (K, V) {
		(self.key, self.value)
	}
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
	fn from((key, value): (K, V)) -> Self {
		Self { key, value }
	}
}

/// Generic two-field record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
	pub first: A,
	pub second: B,
}

impl<A, B> Pair<A, B> {
	pub const fn new(first: A, second: B) -> Self {
		Self { first, second }
	}

	pub fn into_tuple(self) -> (A, B) {
		(self.first, self.second)
	}
}

impl<A, B> From<(A, B)> for Pair<A, B> {
	fn from((first, second): (A, B)) -> Self {
		Self { first, second }
	}
}
