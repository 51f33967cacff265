// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Caller-supplied cancellation and deadline for a single lifecycle operation.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why [`OperationContext::run`] gave up on a future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupted {
	Cancelled,
	DeadlineExceeded,
}

/// Carried through every client call so the orchestrator can abort an
/// in-flight request.
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
	cancellation: CancellationToken,
	deadline: Option<Instant>,
}

impl OperationContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shares the caller's token; cancelling it aborts operations run with
	/// this context.
	pub fn with_cancellation(cancellation: CancellationToken) -> Self {
		Self {
			cancellation,
			deadline: None,
		}
	}

	pub fn with_deadline(mut self, deadline: Instant) -> Self {
		self.deadline = Some(deadline);
		self
	}

	pub fn with_timeout(self, timeout: Duration) -> Self {
		self.with_deadline(Instant::now() + timeout)
	}

	/// Drives `fut` until it completes, the token is cancelled, or the
	/// deadline passes. The future is dropped on interruption.
	pub async fn run<F>(&self, fut: F) -> Result<F::Output, Interrupted>
	where
		F: Future,
	{
		if self.cancellation.is_cancelled() {
			return Err(Interrupted::Cancelled);
		}

		let deadline = async {
			match self.deadline {
				Some(deadline) => tokio::time::sleep_until(deadline).await,
				None => std::future::pending::<()>().await,
			}
		};

		tokio::select! {
			biased;
			_ = self.cancellation.cancelled() => Err(Interrupted::Cancelled),
			_ = deadline => Err(Interrupted::DeadlineExceeded),
			output = fut => Ok(output),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicBool, Ordering};

	#[tokio::test]
	async fn completes_when_not_interrupted() {
		let ctx = OperationContext::new();
		assert_eq!(ctx.run(async { 7 }).await, Ok(7));
	}

	#[tokio::test]
	async fn already_cancelled_context_does_not_poll() {
		let token = CancellationToken::new();
		token.cancel();
		let ctx = OperationContext::with_cancellation(token);

		let polled = AtomicBool::new(false);
		let result = ctx
			.run(async {
				polled.store(true, Ordering::SeqCst);
			})
			.await;
		assert_eq!(result, Err(Interrupted::Cancelled));
		assert!(!polled.load(Ordering::SeqCst));
	}

	#[tokio::test]
	async fn cancellation_aborts_pending_future() {
		let token = CancellationToken::new();
		let ctx = OperationContext::with_cancellation(token.clone());

		let canceller = tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(20)).await;
			token.cancel();
		});

		let result = ctx.run(std::future::pending::<()>()).await;
		assert_eq!(result, Err(Interrupted::Cancelled));
		canceller.await.unwrap();
	}

	#[tokio::test(start_paused = true)]
	async fn deadline_aborts_pending_future() {
		let ctx = OperationContext::new().with_timeout(Duration::from_secs(5));
		let result = ctx.run(std::future::pending::<()>()).await;
		assert_eq!(result, Err(Interrupted::DeadlineExceeded));
	}
}
