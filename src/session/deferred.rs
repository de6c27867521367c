//! One-shot delayed jobs bound to a session.
//!
//! Every job gets an absolute deadline when it is scheduled. A single worker
//! drains the queue and sleeps until each deadline in turn, so jobs run in
//! the order they were scheduled. Cancelling the queue stops the worker and
//! drops every job that has not run yet.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Scheduled {
    deadline: Instant,
    job: Job,
}

/// Handle to a session's deferred-job worker.
#[derive(Debug, Clone)]
pub struct DeferredQueue {
    tx: mpsc::UnboundedSender<Scheduled>,
    token: CancellationToken,
}

impl DeferredQueue {
    /// Spawn the worker on the current Tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        tokio::spawn(run(rx, token.clone()));
        Self { tx, token }
    }

    /// Run `job` once, `delay` from now.
    ///
    /// Returns `false` when the queue has been cancelled; the job is dropped.
    pub fn schedule(&self, delay: Duration, job: impl FnOnce() + Send + 'static) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        self.tx
            .send(Scheduled {
                deadline: Instant::now() + delay,
                job: Box::new(job),
            })
            .is_ok()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

async fn run(mut rx: mpsc::UnboundedReceiver<Scheduled>, token: CancellationToken) {
    loop {
        let next = tokio::select! {
            biased;
            () = token.cancelled() => break,
            next = rx.recv() => next,
        };
        let Some(Scheduled { deadline, job }) = next else {
            break;
        };

        tokio::select! {
            biased;
            () = token.cancelled() => break,
            () = tokio::time::sleep_until(deadline) => job(),
        }
    }

    rx.close();
    let mut discarded = 0usize;
    while rx.try_recv().is_ok() {
        discarded += 1;
    }
    tracing::trace!(discarded, "Deferred worker stopped");
}
