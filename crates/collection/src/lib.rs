//! Functional-style transforms over slices and hash maps.
//!
//! Every function borrows its input and allocates a fresh output; nothing is
//! mutated in place. Iteration order over a [`HashMap`](std::collections::HashMap)
//! is unspecified, so map-derived sequences carry no ordering guarantee.

/// Slice and map equality plus min/max helpers.
pub mod compare;
/// Error types for fallible collection operations.
pub mod error;
/// Key-value and pair record types.
pub mod kv;
/// Hash map transforms and queries.
pub mod map;
/// Slice transforms, grouping, and set operations.
pub mod slice;

pub use compare::{equal, equal_func, map_equal, map_equal_func, max, max_of, min, min_of};
pub use error::CollectionError;
pub use kv::{KeyValue, Pair};
pub use map::{
	map_any, map_filter_by, map_first, map_keys, map_to_slice, map_transform_by, map_try_first, map_values, slice_to_map,
	try_map_transform_by,
};
pub use slice::{
	aggregate, chunk_by, difference, distinct, duplicates, filter_by, group_by, intersection, transform_by, transform_many_by,
	try_transform_by,
};
