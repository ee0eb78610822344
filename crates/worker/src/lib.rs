//! Cancellable fan-out transforms.
//!
//! [`try_transform_by`] runs one task per input element on the worker runtime
//! and gathers the results in input order, or stops at the first failure.

mod error;
mod join_set;
mod spawn;
mod transform;

pub use error::TransformError;
pub use join_set::WorkerJoinSet;
pub use tokio_util::sync::CancellationToken;
pub use transform::{TransformOptions, block_try_transform_by, try_transform_by, try_transform_by_with};
