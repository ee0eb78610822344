use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::{TransformError, WorkerJoinSet};

/// Knobs for [`try_transform_by_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
	/// Label attached to every trace event of the batch.
	pub label: &'static str,
}

impl Default for TransformOptions {
	fn default() -> Self {
		Self { label: "transform" }
	}
}

/// Applies `f` to every element of `source` concurrently.
///
/// One task is spawned per element with no throttling; callers needing bounded
/// parallelism must limit it inside `f`. Each call receives a child of `cancel`.
///
/// On success the output is index-aligned with `source`. The batch fails on
/// the first callback error, task panic, or cancellation of `cancel`. When it
/// fails the child token is cancelled, the remaining tasks are awaited (not
/// aborted) and their outputs discarded. Cancellation is cooperative: a
/// callback that never observes its token delays the return until it finishes.
///
/// When several callbacks fail concurrently, which error is reported depends
/// on completion order and is not deterministic. Cancellation of `cancel` is
/// always checked ahead of task completions, so an already-cancelled token
/// yields [`TransformError::Cancelled`].
pub async fn try_transform_by<T, R, E, F, Fut>(cancel: &CancellationToken, source: Vec<T>, f: F) -> Result<Vec<R>, TransformError<E>>
where
	T: Send + 'static,
	R: Send + 'static,
	E: Send + 'static,
	F: Fn(CancellationToken, T) -> Fut,
	Fut: Future<Output = Result<R, E>> + Send + 'static,
{
	try_transform_by_with(cancel, source, TransformOptions::default(), f).await
}

/// [`try_transform_by`] with explicit [`TransformOptions`].
pub async fn try_transform_by_with<T, R, E, F, Fut>(
	cancel: &CancellationToken,
	source: Vec<T>,
	options: TransformOptions,
	f: F,
) -> Result<Vec<R>, TransformError<E>>
where
	T: Send + 'static,
	R: Send + 'static,
	E: Send + 'static,
	F: Fn(CancellationToken, T) -> Fut,
	Fut: Future<Output = Result<R, E>> + Send + 'static,
{
	if cancel.is_cancelled() {
		return Err(TransformError::Cancelled);
	}

	let len = source.len();
	let batch = cancel.child_token();
	let mut tasks = WorkerJoinSet::new(options.label);
	for (index, item) in source.into_iter().enumerate() {
		let fut = f(batch.clone(), item);
		tasks.spawn(async move { (index, fut.await) });
	}

	let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(len).collect();

	let failure = loop {
		let joined = tokio::select! {
			biased;
			_ = cancel.cancelled() => break TransformError::Cancelled,
			joined = tasks.join_next() => joined,
		};
		match joined {
			None => return Ok(slots.into_iter().flatten().collect()),
			Some(Ok((index, Ok(value)))) => slots[index] = Some(value),
			Some(Ok((index, Err(err)))) => {
				tracing::debug!(batch = options.label, index, "worker.transform.failed");
				break TransformError::Failed(err);
			}
			Some(Err(err)) => break TransformError::from_join(err),
		}
	};

	tracing::debug!(batch = options.label, pending = tasks.len(), cancelled = failure.is_cancelled(), "worker.transform.abort");
	batch.cancel();
	tasks.drain().await;
	Err(failure)
}

/// Blocking form of [`try_transform_by`] for synchronous callers.
///
/// Runs the batch on the global worker runtime and parks the calling thread
/// until it settles.
///
/// # Panics
///
/// Panics when called from inside an async execution context.
pub fn block_try_transform_by<T, R, E, F, Fut>(cancel: &CancellationToken, source: Vec<T>, f: F) -> Result<Vec<R>, TransformError<E>>
where
	T: Send + 'static,
	R: Send + 'static,
	E: Send + 'static,
	F: Fn(CancellationToken, T) -> Fut,
	Fut: Future<Output = Result<R, E>> + Send + 'static,
{
	crate::spawn::global_runtime().block_on(try_transform_by(cancel, source, f))
}
