//! The background worker dispatcher.
//!
//! One long-lived thread owns a receive channel; submission is a channel
//! send from the interactive context, and the dispatcher never owns job
//! results. The lifecycle is explicit:
//!
//! ```text
//! Created -> Running -> FinishRequested -> Stopped
//! ```
//!
//! `start` is one-shot, `submit` is rejected outside `Running`, and
//! `shutdown` closes the channel, lets the thread drain everything already
//! queued, joins it, and only then releases the thread handle.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// A unit of work handed off to the dispatcher.
///
/// Jobs run to completion on the worker thread; any result travels back
/// through whatever channel the submitter baked into the closure.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Errors from dispatcher lifecycle misuse.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// `start` was called on a dispatcher that already ran.
    #[error("dispatcher already started")]
    AlreadyStarted,
    /// `submit` was called before `start` or after shutdown was requested.
    #[error("dispatcher is not running")]
    NotRunning,
    /// The worker thread ended without being asked to; the queue is gone.
    #[error("worker thread disconnected")]
    Disconnected,
}

/// Observable dispatcher lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    /// Constructed, not yet started.
    Created,
    /// Thread running, accepting submissions.
    Running,
    /// Shutdown requested; no new submissions, queued work draining.
    FinishRequested,
    /// Thread joined and resources released.
    Stopped,
}

/// The single background execution context of the application.
///
/// Created once, started once, shut down once at process teardown. Lives on
/// the interactive context; only the jobs themselves execute on the worker
/// thread.
#[derive(Debug)]
pub struct Dispatcher {
    /// Current lifecycle state.
    state: DispatcherState,
    /// Submission side of the job channel while running.
    tx: Option<Sender<Job>>,
    /// Join handle of the worker thread while it exists.
    handle: Option<JoinHandle<()>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher in the `Created` state.
    pub fn new() -> Self {
        Self {
            state: DispatcherState::Created,
            tx: None,
            handle: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Spawn the worker thread, already bound to its receive channel.
    ///
    /// One-shot: a second call is an error regardless of the current state.
    pub fn start(&mut self) -> Result<(), DispatchError> {
        if self.state != DispatcherState::Created {
            return Err(DispatchError::AlreadyStarted);
        }
        let (tx, rx): (Sender<Job>, Receiver<Job>) = unbounded();
        let handle = thread::Builder::new()
            .name("vidra-worker".into())
            .spawn(move || {
                trace!("worker thread up");
                // Runs until every sender is dropped, draining whatever is
                // still queued at that point.
                for job in rx {
                    job();
                }
                trace!("worker thread drained");
            })
            .map_err(|e| {
                warn!("failed to spawn worker thread: {e}");
                DispatchError::NotRunning
            })?;
        self.tx = Some(tx);
        self.handle = Some(handle);
        self.state = DispatcherState::Running;
        debug!("worker dispatcher running");
        Ok(())
    }

    /// Hand a job to the worker thread. Never blocks.
    pub fn submit(&self, job: Job) -> Result<(), DispatchError> {
        if self.state != DispatcherState::Running {
            return Err(DispatchError::NotRunning);
        }
        let tx = self.tx.as_ref().ok_or(DispatchError::NotRunning)?;
        tx.send(job).map_err(|_| DispatchError::Disconnected)
    }

    /// Stop accepting submissions, drain queued work, and join the thread.
    ///
    /// Resources are released in reverse-acquisition order: the submission
    /// channel closes first, then the thread is joined, then the handle is
    /// dropped. Idempotent once stopped; an error before `start` mirrors
    /// `submit`.
    pub fn shutdown(&mut self) -> Result<(), DispatchError> {
        match self.state {
            DispatcherState::Created => return Err(DispatchError::NotRunning),
            DispatcherState::Stopped => return Ok(()),
            DispatcherState::Running | DispatcherState::FinishRequested => {}
        }
        self.state = DispatcherState::FinishRequested;
        // Closing the channel is the finish signal; the thread exits its
        // receive loop once the queue is empty.
        drop(self.tx.take());
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            warn!("worker thread panicked before shutdown");
        }
        self.state = DispatcherState::Stopped;
        debug!("worker dispatcher stopped");
        Ok(())
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        if self.state == DispatcherState::Running {
            let _ = self.shutdown();
        }
    }
}
