use std::sync::Arc;

use anyhow::{Context, bail, ensure};
use cfg::{Cfg, Order};
use clap::Parser;
use concurrent_pq::{
    Compare, ConcurrentPriorityQueue, MaxFirst, MinFirst,
    test::{
        Job,
        stress::{StressTestConfig, run_stress_test},
    },
};
use tracing_subscriber::EnvFilter;

pub mod cfg;

const LATENCY_PERCENTILES: [f64; 4] = [50.0, 90.0, 99.0, 99.9];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Cfg::parse();
    println!("Running configuration:\n{cfg:#?}");

    let res = match cfg.order {
        Order::Max => run(&cfg, MaxFirst),
        Order::Min => run(&cfg, MinFirst),
    };
    if let Err(e) = res {
        tracing::error!("stress test failed: {e:?}");
        std::process::exit(1);
    }
}

fn run<C>(cfg: &Cfg, cmp: C) -> anyhow::Result<()>
where
    C: Compare<Job> + Send + 'static,
{
    ensure!(
        cfg.min_payload <= cfg.max_payload,
        "payload range {}..={} is empty",
        cfg.min_payload,
        cfg.max_payload
    );
    ensure!(
        cfg.min_priority <= cfg.max_priority,
        "priority range {}..={} is empty",
        cfg.min_priority,
        cfg.max_priority
    );

    let capacity = match cfg.capacity {
        Some(capacity) => capacity,
        None => cfg
            .job_num
            .checked_mul(cfg.producer_num)
            .context("overflow while calculating queue capacity")?,
    };

    tracing::info!(order = %cfg.order, capacity, "starting queue");
    let queue = Arc::new(ConcurrentPriorityQueue::with_capacity(capacity, cmp));
    let config = StressTestConfig {
        num_producers: cfg.producer_num,
        num_jobs: cfg.job_num,
        num_consumers: cfg.consumer_num,
        payload_size_range: (cfg.min_payload, cfg.max_payload),
        priority_range: (cfg.min_priority, cfg.max_priority),
        run_duration_seconds: cfg.run_duration_seconds,
    };
    let results = run_stress_test(queue, config)?;
    results.print_summary(&LATENCY_PERCENTILES);

    if !results.is_consistent() {
        bail!(
            "delivery integrity violated: {} duplicated, {} lost",
            results.duplicates(),
            results.lost()
        );
    }
    Ok(())
}
