/*!
 * Process Scheduler - Demonstration Entry Point
 *
 * Drives a scheduler task through a typical lifecycle:
 * - Create processes with mixed priorities
 * - Dispatch, block, terminate, and unblock
 * - Drain the ready queue and print the final state as JSON
 */

use miette::{IntoDiagnostic, Result};
use tracing::info;

use procsched_kernel::{init_tracing, ProcessManager, ProcessRecord, SchedulerHandle};

fn log_ready(label: &str, ready: &[ProcessRecord]) {
    info!("{} ({} ready):", label, ready.len());
    for process in ready {
        info!("  PID {} {} priority={}", process.pid, process.name, process.priority);
    }
}

async fn log_blocked(handle: &SchedulerHandle) -> Result<()> {
    let blocked = handle.list_blocked().await?;
    info!("Blocked processes, oldest first ({}):", blocked.len());
    for (i, process) in blocked.iter().enumerate() {
        info!(
            "  {}. PID {} {} reason={}",
            i + 1,
            process.pid,
            process.name,
            process.block_reason.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Process scheduler demo starting...");
    info!("================================================");

    let task = ProcessManager::builder().with_env_config().spawn_task();
    let handle = task.handle();

    info!("--- Creating processes ---");
    for (name, priority) in [
        ("Editor", 2),
        ("Browser", 3),
        ("Player", 1),
        ("AV", 5),
        ("Downloader", 2),
    ] {
        let process = handle.create_process(name, priority).await?;
        info!("Created {}", process);
    }
    log_ready("Ready queue", &handle.list_ready().await?);

    info!("--- Dispatching next process ---");
    let running = handle.dispatch().await?;
    info!("Running {}", running);

    info!("--- Blocking the running process ---");
    handle.block(running.pid, "Waiting for definitions update").await?;
    log_blocked(&handle).await?;

    info!("--- Dispatching next process ---");
    let running = handle.dispatch().await?;
    info!("Running {}", running);

    info!("--- Terminating the running process ---");
    let done = handle.terminate(None).await?;
    info!("Terminated {}", done);

    info!("--- Unblocking ---");
    let unblocked = handle.unblock().await?;
    info!("Unblocked {}", unblocked);
    log_ready("Ready queue", &handle.list_ready().await?);

    info!("--- All processes ---");
    for process in handle.list_all().await? {
        info!("{}", process);
    }

    info!("--- Running remaining processes to completion ---");
    let order = handle.run_to_completion().await?;
    info!(?order, "All processes executed and terminated");

    let scheduler = task.shutdown().await?;
    let snapshot = scheduler.snapshot();
    let json = serde_json::to_string_pretty(&snapshot).into_diagnostic()?;
    println!("{}", json);

    info!("================================================");
    Ok(())
}
