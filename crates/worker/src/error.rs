use std::any::Any;

use thiserror::Error;
use tokio::task::JoinError;

/// Failure of a fan-out transform batch.
#[derive(Debug, Error)]
pub enum TransformError<E> {
	/// The caller's cancellation token fired before every task completed.
	#[error("transform cancelled")]
	Cancelled,
	/// A callback returned an error. The error is carried unchanged.
	#[error(transparent)]
	Failed(E),
	/// A callback panicked.
	#[error("transform task panicked: {0}")]
	Panicked(String),
	/// A task could not be joined for a reason other than a panic.
	#[error("transform task join failed: {0}")]
	JoinFailed(String),
}

impl<E> TransformError<E> {
	/// Returns true if the batch stopped because the caller cancelled it.
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}

	/// Returns the callback's own error, if that is what stopped the batch.
	pub fn into_failure(self) -> Option<E> {
		match self {
			Self::Failed(err) => Some(err),
			_ => None,
		}
	}

	pub(crate) fn from_join(err: JoinError) -> Self {
		if err.is_panic() {
			Self::Panicked(panic_message(err.into_panic()))
		} else {
			Self::JoinFailed(err.to_string())
		}
	}
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
	match payload.downcast::<String>() {
		Ok(msg) => *msg,
		Err(payload) => match payload.downcast::<&'static str>() {
			Ok(msg) => (*msg).to_string(),
			Err(_) => "non-string panic payload".to_string(),
		},
	}
}
