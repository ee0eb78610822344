use std::future::Future;

use tokio::task::{JoinError, JoinSet};

/// Tokio [`JoinSet`] that spawns onto the worker runtime.
///
/// Tasks land on the current runtime when there is one and on the global
/// worker runtime otherwise. Every trace event carries the set's batch label.
/// Dropping the set aborts whatever is still running.
#[derive(Debug)]
pub struct WorkerJoinSet<T> {
	label: &'static str,
	inner: JoinSet<T>,
}

impl<T> WorkerJoinSet<T>
where
	T: Send + 'static,
{
	/// Creates an empty join set whose tasks are traced under `label`.
	pub fn new(label: &'static str) -> Self {
		Self { label, inner: JoinSet::new() }
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of tasks not yet joined.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Spawns a future into the set.
	#[allow(clippy::disallowed_methods)]
	pub fn spawn<F>(&mut self, fut: F)
	where
		F: Future<Output = T> + Send + 'static,
	{
		tracing::trace!(batch = self.label, pending = self.inner.len(), "worker.join_set.spawn");
		let handle = crate::spawn::runtime_handle();
		self.inner.spawn_on(fut, &handle);
	}

	/// Waits for the next completed task. `None` once the set is empty.
	pub async fn join_next(&mut self) -> Option<Result<T, JoinError>> {
		self.inner.join_next().await
	}

	/// Waits for every remaining task and discards the outputs.
	///
	/// Tasks are awaited, never aborted. Returns how many were joined.
	pub async fn drain(&mut self) -> usize {
		let mut joined = 0;
		while self.inner.join_next().await.is_some() {
			joined += 1;
		}
		tracing::trace!(batch = self.label, joined, "worker.join_set.drained");
		joined
	}
}
