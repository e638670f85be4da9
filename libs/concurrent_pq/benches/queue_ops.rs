use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use concurrent_pq::{ConcurrentPriorityQueue, MaxFirst, test::Job};
use criterion::{Criterion, criterion_group, criterion_main};

fn create_job(priority: u64) -> Job {
    Job::without_payload("", priority, 0)
}

fn push_pop(c: &mut Criterion) {
    let queue = ConcurrentPriorityQueue::with_capacity(50_000, MaxFirst);

    c.bench_function("push_pop", |b| {
        b.iter(|| {
            queue.push(create_job(black_box(100)));
            let popped = queue.pop();
            assert_eq!(popped.map(|job| job.priority), Some(100));
        })
    });
}

fn push_high_priority_on_large_queue(c: &mut Criterion) {
    let queue = ConcurrentPriorityQueue::with_capacity(500_000, MaxFirst);
    // -- Prepare large queue
    let mut priority = 0;
    for _ in 0..50_000 {
        queue.push(black_box(create_job(priority)));

        priority += 1;
    }

    c.bench_function("push_high_priority_on_large_queue", |b| {
        b.iter(|| {
            queue.push(create_job(black_box(priority)));

            let popped = queue.pop();
            assert_eq!(popped.map(|job| job.priority), Some(priority)); //<-- highest priority added last
        });
    });
}

/// One thread pushes, a second one blocks in `await_pop` and hands the job back over a second
/// queue.
fn blocking_hand_off(c: &mut Criterion) {
    let requests = Arc::new(ConcurrentPriorityQueue::with_capacity(16, MaxFirst));
    let replies = Arc::new(ConcurrentPriorityQueue::with_capacity(16, MaxFirst));

    let echo = {
        let requests = Arc::clone(&requests);
        let replies = Arc::clone(&replies);
        thread::spawn(move || {
            while let Some(job) = requests.await_pop() {
                replies.push(job);
            }
        })
    };

    c.bench_function("blocking_hand_off", |b| {
        b.iter(|| {
            requests.push(create_job(black_box(1)));
            let reply = replies.await_pop();
            assert!(reply.is_some());
        })
    });

    requests.close();
    echo.join().expect("echo thread does not panic");
}

criterion_group!(
    benches,
    push_pop,
    push_high_priority_on_large_queue,
    blocking_hand_off
);
criterion_main!(benches);
