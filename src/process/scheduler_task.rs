/*!
 * Scheduler Task - Message-Passing Front-End
 *
 * A tokio task that owns a `Scheduler` exclusively and applies requests
 * one at a time, in arrival order. Clients hold a cloneable
 * `SchedulerHandle` and await a oneshot reply per request.
 */

use super::scheduler::Scheduler;
use super::types::{ProcessRecord, SchedulerSnapshot, SchedulerStats};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, Priority};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

type Reply<T> = oneshot::Sender<T>;

/// Requests understood by the scheduler task
#[derive(Debug)]
enum SchedulerCommand {
    Create {
        name: String,
        priority: Option<Priority>,
        reply: Reply<SchedulerResult<ProcessRecord>>,
    },
    Dispatch {
        reply: Reply<SchedulerResult<ProcessRecord>>,
    },
    Block {
        pid: Pid,
        reason: Option<String>,
        reply: Reply<SchedulerResult<ProcessRecord>>,
    },
    Unblock {
        reply: Reply<SchedulerResult<ProcessRecord>>,
    },
    Terminate {
        pid: Option<Pid>,
        reply: Reply<SchedulerResult<ProcessRecord>>,
    },
    RunToCompletion {
        reply: Reply<SchedulerResult<Vec<Pid>>>,
    },
    Inspect {
        pid: Pid,
        reply: Reply<SchedulerResult<ProcessRecord>>,
    },
    List {
        listing: Listing,
        reply: Reply<Vec<ProcessRecord>>,
    },
    Snapshot {
        reply: Reply<SchedulerSnapshot>,
    },
    Stats {
        reply: Reply<SchedulerStats>,
    },
    Shutdown,
}

#[derive(Debug, Clone, Copy)]
enum Listing {
    All,
    Ready,
    Blocked,
}

/// Handle to the scheduler background task
pub struct SchedulerTask {
    handle: SchedulerHandle,
    join: tokio::task::JoinHandle<Scheduler>,
}

impl SchedulerTask {
    /// Spawn a task owning `scheduler` on the current runtime
    pub fn spawn(scheduler: Scheduler, capacity: usize) -> Self {
        let (command_tx, command_rx) = mpsc::channel(capacity.max(1));
        let join = tokio::spawn(run_scheduler_loop(scheduler, command_rx));

        info!(capacity, "Scheduler task spawned");

        Self {
            handle: SchedulerHandle { command_tx },
            join,
        }
    }

    /// Cloneable client for this task
    pub fn handle(&self) -> SchedulerHandle {
        self.handle.clone()
    }

    /// Stop accepting requests and hand back the final scheduler state.
    ///
    /// Requests already queued ahead of the shutdown are still served.
    pub async fn shutdown(self) -> SchedulerResult<Scheduler> {
        if self
            .handle
            .command_tx
            .send(SchedulerCommand::Shutdown)
            .await
            .is_err()
        {
            debug!("Scheduler task already stopped");
        }

        match self.join.await {
            Ok(scheduler) => {
                info!("Scheduler task shutdown complete");
                Ok(scheduler)
            }
            Err(e) => {
                warn!(error = %e, "Scheduler task shutdown error");
                Err(SchedulerError::Unavailable)
            }
        }
    }
}

/// Async client for a running `SchedulerTask`
#[derive(Debug, Clone)]
pub struct SchedulerHandle {
    command_tx: mpsc::Sender<SchedulerCommand>,
}

impl SchedulerHandle {
    async fn request<T>(
        &self,
        build: impl FnOnce(Reply<T>) -> SchedulerCommand,
    ) -> SchedulerResult<T> {
        let (reply, response) = oneshot::channel();
        self.command_tx
            .send(build(reply))
            .await
            .map_err(|_| SchedulerError::Unavailable)?;
        response.await.map_err(|_| SchedulerError::Unavailable)
    }

    pub async fn create_process(
        &self,
        name: impl Into<String>,
        priority: Priority,
    ) -> SchedulerResult<ProcessRecord> {
        let name = name.into();
        self.request(|reply| SchedulerCommand::Create {
            name,
            priority: Some(priority),
            reply,
        })
        .await?
    }

    pub async fn create_process_default(
        &self,
        name: impl Into<String>,
    ) -> SchedulerResult<ProcessRecord> {
        let name = name.into();
        self.request(|reply| SchedulerCommand::Create {
            name,
            priority: None,
            reply,
        })
        .await?
    }

    pub async fn dispatch(&self) -> SchedulerResult<ProcessRecord> {
        self.request(|reply| SchedulerCommand::Dispatch { reply })
            .await?
    }

    pub async fn block(
        &self,
        pid: Pid,
        reason: impl Into<String>,
    ) -> SchedulerResult<ProcessRecord> {
        let reason = reason.into();
        self.request(|reply| SchedulerCommand::Block {
            pid,
            reason: Some(reason),
            reply,
        })
        .await?
    }

    pub async fn block_default(&self, pid: Pid) -> SchedulerResult<ProcessRecord> {
        self.request(|reply| SchedulerCommand::Block {
            pid,
            reason: None,
            reply,
        })
        .await?
    }

    pub async fn unblock(&self) -> SchedulerResult<ProcessRecord> {
        self.request(|reply| SchedulerCommand::Unblock { reply })
            .await?
    }

    pub async fn terminate(&self, pid: Option<Pid>) -> SchedulerResult<ProcessRecord> {
        self.request(|reply| SchedulerCommand::Terminate { pid, reply })
            .await?
    }

    pub async fn run_to_completion(&self) -> SchedulerResult<Vec<Pid>> {
        self.request(|reply| SchedulerCommand::RunToCompletion { reply })
            .await?
    }

    pub async fn inspect(&self, pid: Pid) -> SchedulerResult<ProcessRecord> {
        self.request(|reply| SchedulerCommand::Inspect { pid, reply })
            .await?
    }

    /// Every record, by PID
    pub async fn list_all(&self) -> SchedulerResult<Vec<ProcessRecord>> {
        self.list(Listing::All).await
    }

    /// Ready processes in dispatch order
    pub async fn list_ready(&self) -> SchedulerResult<Vec<ProcessRecord>> {
        self.list(Listing::Ready).await
    }

    /// Blocked processes, oldest first
    pub async fn list_blocked(&self) -> SchedulerResult<Vec<ProcessRecord>> {
        self.list(Listing::Blocked).await
    }

    async fn list(&self, listing: Listing) -> SchedulerResult<Vec<ProcessRecord>> {
        self.request(|reply| SchedulerCommand::List { listing, reply })
            .await
    }

    pub async fn snapshot(&self) -> SchedulerResult<SchedulerSnapshot> {
        self.request(|reply| SchedulerCommand::Snapshot { reply })
            .await
    }

    pub async fn stats(&self) -> SchedulerResult<SchedulerStats> {
        self.request(|reply| SchedulerCommand::Stats { reply })
            .await
    }
}

/// Core task loop: one request at a time until shutdown or all handles drop
async fn run_scheduler_loop(
    mut scheduler: Scheduler,
    mut command_rx: mpsc::Receiver<SchedulerCommand>,
) -> Scheduler {
    info!("Scheduler loop started");

    while let Some(command) = command_rx.recv().await {
        // A dropped reply receiver only means the caller stopped waiting
        match command {
            SchedulerCommand::Create {
                name,
                priority,
                reply,
            } => {
                let result = match priority {
                    Some(priority) => scheduler.create_process(name, priority),
                    None => scheduler.create_process_default(name),
                };
                let _ = reply.send(result);
            }
            SchedulerCommand::Dispatch { reply } => {
                let _ = reply.send(scheduler.dispatch());
            }
            SchedulerCommand::Block { pid, reason, reply } => {
                let result = match reason {
                    Some(reason) => scheduler.block(pid, reason),
                    None => scheduler.block_default(pid),
                };
                let _ = reply.send(result);
            }
            SchedulerCommand::Unblock { reply } => {
                let _ = reply.send(scheduler.unblock());
            }
            SchedulerCommand::Terminate { pid, reply } => {
                let _ = reply.send(scheduler.terminate(pid));
            }
            SchedulerCommand::RunToCompletion { reply } => {
                let _ = reply.send(scheduler.run_to_completion());
            }
            SchedulerCommand::Inspect { pid, reply } => {
                let _ = reply.send(scheduler.inspect(pid));
            }
            SchedulerCommand::List { listing, reply } => {
                let records = match listing {
                    Listing::All => scheduler.list_all(),
                    Listing::Ready => scheduler.list_ready(),
                    Listing::Blocked => scheduler.list_blocked(),
                };
                let _ = reply.send(records);
            }
            SchedulerCommand::Snapshot { reply } => {
                let _ = reply.send(scheduler.snapshot());
            }
            SchedulerCommand::Stats { reply } => {
                let _ = reply.send(scheduler.stats());
            }
            SchedulerCommand::Shutdown => {
                info!("Scheduler loop received shutdown");
                break;
            }
        }
    }

    scheduler
}
