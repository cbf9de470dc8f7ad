/*!
 * Scheduler Benchmarks
 *
 * Dispatch throughput and the cost of forced termination by PID
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use procsched_kernel::{ManualClock, Pid, ProcessManager, Scheduler};
use std::sync::Arc;

fn populated(count: usize) -> (Scheduler, Vec<Pid>) {
    let mut scheduler = ProcessManager::builder()
        .with_clock(Arc::new(ManualClock::new(0)))
        .build_scheduler();
    let pids = (0..count)
        .map(|i| {
            scheduler
                .create_process(format!("p{}", i), (i % 16) as i32)
                .map(|record| record.pid)
                .unwrap()
        })
        .collect();
    (scheduler, pids)
}

fn bench_dispatch_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_cycle");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || populated(size).0,
                |mut scheduler| black_box(scheduler.run_to_completion().unwrap()),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_block_unblock(c: &mut Criterion) {
    let (mut scheduler, _) = populated(1024);

    c.bench_function("block_unblock_round_trip", |b| {
        b.iter(|| {
            let running = scheduler.dispatch().unwrap();
            scheduler.block(running.pid, "io").unwrap();
            black_box(scheduler.unblock().unwrap());
        });
    });
}

fn bench_terminate_by_pid(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminate_by_pid");

    // Removal from the ready heap is a linear filter and rebuild
    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || populated(size),
                |(mut scheduler, pids)| {
                    black_box(scheduler.terminate(Some(pids[pids.len() / 2])).unwrap())
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dispatch_cycle,
    bench_block_unblock,
    bench_terminate_by_pid
);
criterion_main!(benches);
