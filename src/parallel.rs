/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel solution runner (G8): produces `k` independent PRRP solutions
//! concurrently, each on its own worker-private adjacency clone and RNG
//! stream.

use std::sync::atomic::{AtomicU64, Ordering};

use dsi_progress_logger::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::driver::{run_prrp, Region};
use crate::error::Result;
use crate::graph::Adjacency;

/// Runs `k` independent spatial PRRP solutions using a pool of `workers`
/// threads (0 lets rayon pick based on available parallelism, matching
/// `num_cpus::get`).
///
/// Each solution gets a distinct RNG seed derived from `root_seed` via an
/// atomic counter, and runs against its own clone of `adj` — so a worker's
/// internal dual-merge edge insertion is never visible to another worker or
/// to the caller's `adj`. A single worker's failure is captured as that
/// slot's `Err` and does not abort the others.
pub fn run_parallel_prrp(
    adj: &Adjacency,
    p: usize,
    cardinalities: &[usize],
    max_retries: usize,
    k: usize,
    workers: usize,
    root_seed: u64,
) -> Vec<Result<Vec<Region>>> {
    let seed_counter = AtomicU64::new(root_seed);
    let workers = if workers == 0 { num_cpus::get() } else { workers };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .expect("failed to build the PRRP worker pool");

    let mut pl = concurrent_progress_logger![item_name = "solution", expected_updates = Some(k)];
    pl.start("Dispatching PRRP solutions...");

    let results = pool.install(|| {
        (0..k)
            .into_par_iter()
            .map(|slot| {
                let seed = seed_counter.fetch_add(1, Ordering::Relaxed);
                let worker_adj = adj.clone();
                let mut rng = SmallRng::seed_from_u64(seed);
                log::info!("worker {slot}: starting with seed {seed}");
                let result = run_prrp(&worker_adj, p, cardinalities, max_retries, &mut rng);
                match &result {
                    Ok(regions) => log::info!("worker {slot}: produced {} regions", regions.len()),
                    Err(e) => log::warn!("worker {slot}: failed with {e}"),
                }
                pl.clone().update();
                result
            })
            .collect()
    });
    pl.done();
    results
}
