use std::sync::OnceLock;

use tokio::runtime::{Handle, Runtime};

const GLOBAL_WORKER_THREADS: usize = 2;

/// Runtime used when the caller is not inside a Tokio runtime.
pub(crate) fn global_runtime() -> &'static Runtime {
	static GLOBAL_RT: OnceLock<Runtime> = OnceLock::new();
	GLOBAL_RT.get_or_init(|| {
		tracing::debug!(worker_threads = GLOBAL_WORKER_THREADS, "worker.global_runtime.init");
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.worker_threads(GLOBAL_WORKER_THREADS)
			.thread_name("colle-worker-global")
			.build()
			.expect("failed to build colle-worker global tokio runtime")
	})
}

/// Handle of the current Tokio runtime, falling back to the global one.
pub(crate) fn runtime_handle() -> Handle {
	Handle::try_current().unwrap_or_else(|_| global_runtime().handle().clone())
}
