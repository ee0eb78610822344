use thiserror::Error;

/// Errors returned by fallible collection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
	/// An argument was outside the domain the operation accepts.
	#[error("invalid argument `{name}`: {reason}")]
	InvalidArgument {
		/// Name of the offending parameter.
		name: &'static str,
		/// Why the value was rejected.
		reason: &'static str,
	},
}
