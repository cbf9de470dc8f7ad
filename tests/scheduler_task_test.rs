/*!
 * Scheduler Task Tests
 * The message-passing front-end over a tokio runtime
 */

use pretty_assertions::assert_eq;
use procsched_kernel::{
    ManualClock, Pid, ProcessManager, ProcessState, SchedulerConfig, SchedulerError,
};
use std::collections::HashSet;
use std::sync::Arc;

fn spawn() -> procsched_kernel::SchedulerTask {
    ProcessManager::builder()
        .with_clock(Arc::new(ManualClock::new(0)))
        .spawn_task()
}

#[tokio::test]
async fn test_end_to_end_through_task() {
    let task = spawn();
    let handle = task.handle();

    let mut pids = Vec::new();
    for (name, priority) in [
        ("Editor", 2),
        ("Browser", 3),
        ("Player", 1),
        ("AV", 5),
        ("Downloader", 2),
    ] {
        pids.push(handle.create_process(name, priority).await.unwrap().pid);
    }
    let (editor, browser, player, av, downloader) = (pids[0], pids[1], pids[2], pids[3], pids[4]);

    assert_eq!(handle.dispatch().await.unwrap().pid, av);
    handle.block(av, "update").await.unwrap();
    assert_eq!(handle.dispatch().await.unwrap().pid, browser);
    assert_eq!(handle.terminate(None).await.unwrap().pid, browser);
    assert_eq!(handle.unblock().await.unwrap().pid, av);

    let ready: Vec<Pid> = handle
        .list_ready()
        .await
        .unwrap()
        .iter()
        .map(|p| p.pid)
        .collect();
    assert_eq!(ready, vec![av, editor, downloader, player]);
    assert!(handle.list_blocked().await.unwrap().is_empty());
    assert_eq!(handle.list_all().await.unwrap().len(), 5);

    let scheduler = task.shutdown().await.unwrap();
    assert_eq!(scheduler.inspect(browser).unwrap().state, ProcessState::Terminated);
    assert_eq!(scheduler.ready_len(), 4);
}

#[tokio::test]
async fn test_listings_through_task() {
    let task = spawn();
    let handle = task.handle();

    let low = handle.create_process("low", 1).await.unwrap().pid;
    let high = handle.create_process("high", 8).await.unwrap().pid;
    let mid = handle.create_process("mid", 4).await.unwrap().pid;

    handle.dispatch().await.unwrap();
    handle.block(high, "io").await.unwrap();

    let pids = |records: Vec<procsched_kernel::ProcessRecord>| -> Vec<Pid> {
        records.iter().map(|p| p.pid).collect()
    };
    assert_eq!(pids(handle.list_ready().await.unwrap()), vec![mid, low]);
    assert_eq!(pids(handle.list_blocked().await.unwrap()), vec![high]);
    assert_eq!(pids(handle.list_all().await.unwrap()), vec![low, high, mid]);

    task.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_errors_propagate() {
    let task = spawn();
    let handle = task.handle();

    assert_eq!(handle.dispatch().await, Err(SchedulerError::EmptyQueue));
    assert_eq!(handle.unblock().await, Err(SchedulerError::NothingBlocked));
    assert_eq!(handle.terminate(None).await, Err(SchedulerError::NothingRunning));
    assert_eq!(handle.inspect(5).await, Err(SchedulerError::UnknownProcess(5)));

    task.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_defaults_through_task() {
    let task = ProcessManager::builder()
        .with_config(
            SchedulerConfig::default()
                .with_default_priority(4)
                .with_default_block_reason("timer"),
        )
        .spawn_task();
    let handle = task.handle();

    let p = handle.create_process_default("cron").await.unwrap();
    assert_eq!(p.priority, 4);
    handle.dispatch().await.unwrap();
    let blocked = handle.block_default(p.pid).await.unwrap();
    assert_eq!(blocked.block_reason.as_deref(), Some("timer"));
    assert_eq!(handle.stats().await.unwrap().blocked, 1);

    task.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_clients_get_unique_ids() {
    let task = spawn();

    let mut joins = Vec::new();
    for t in 0..8 {
        let handle = task.handle();
        joins.push(tokio::spawn(async move {
            let mut pids = Vec::new();
            for i in 0..25 {
                let name = format!("t{}-{}", t, i);
                pids.push(handle.create_process(name, i % 3).await.unwrap().pid);
            }
            pids
        }));
    }

    let mut seen = HashSet::new();
    for join in joins {
        for pid in join.await.unwrap() {
            assert!(seen.insert(pid));
        }
    }
    assert_eq!(seen.len(), 200);

    let handle = task.handle();
    let order = handle.run_to_completion().await.unwrap();
    assert_eq!(order.len(), 200);
    assert_eq!(handle.stats().await.unwrap().live_processes, 0);

    task.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_handle_after_shutdown_is_unavailable() {
    let task = spawn();
    let handle = task.handle();
    handle.create_process("a", 1).await.unwrap();

    let scheduler = task.shutdown().await.unwrap();
    assert_eq!(scheduler.len(), 1);

    assert_eq!(
        handle.create_process("b", 1).await,
        Err(SchedulerError::Unavailable)
    );
}
