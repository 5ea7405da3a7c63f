/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Thin demonstration binary: reads a METIS graph, runs one of the PRRP
//! drivers, and prints the resulting region membership.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use prrp::{metis, run_graph_prrp, run_parallel_prrp, run_prrp};

#[derive(Parser, Debug)]
#[command(about = "Partition a METIS graph into connected regions", long_about = None)]
struct Args {
    /// Path to a METIS-format graph file.
    graph: PathBuf,

    /// Root RNG seed; omit for a nondeterministic run.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Spatial variant: partition into regions of pre-specified sizes.
    Spatial {
        /// Comma-separated region cardinalities, must sum to the vertex count.
        #[arg(long, value_delimiter = ',')]
        cardinalities: Vec<usize>,

        /// Max retries per region before failing with Infeasible.
        #[arg(long, default_value_t = 50)]
        max_retries: usize,

        /// Produce this many independent solutions in parallel (0 = sequential).
        #[arg(long, default_value_t = 0)]
        solutions: usize,

        /// Worker threads for --solutions > 0 (0 = use all available cores).
        #[arg(long, default_value_t = 0)]
        workers: usize,

        /// Number of regions (must match the number of cardinalities given).
        #[arg(long)]
        p: usize,
    },
    /// Graph variant: grow regions towards a single target size.
    Graph {
        /// Maximum number of regions to grow before the finishing pass takes over.
        #[arg(long)]
        p: usize,

        /// Target region size.
        #[arg(long)]
        target_size: usize,

        /// Max retries per region before giving up on growth.
        #[arg(long, default_value_t = 50)]
        max_retries: usize,

        /// A region larger than this is recursively split.
        #[arg(long)]
        split_threshold: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let input = std::fs::read_to_string(&args.graph)
        .with_context(|| format!("reading graph file {}", args.graph.display()))?;
    let adj = metis::parse(&input).with_context(|| format!("parsing {}", args.graph.display()))?;

    match args.mode {
        Mode::Spatial {
            cardinalities,
            max_retries,
            solutions,
            workers,
            p,
        } => {
            if solutions > 0 {
                let results = run_parallel_prrp(&adj, p, &cardinalities, max_retries, solutions, workers, args.seed);
                for (slot, result) in results.into_iter().enumerate() {
                    match result {
                        Ok(regions) => print_regions(slot, &regions),
                        Err(e) => eprintln!("solution {slot}: failed: {e}"),
                    }
                }
            } else {
                let mut rng = SmallRng::seed_from_u64(args.seed);
                let regions = run_prrp(&adj, p, &cardinalities, max_retries, &mut rng)
                    .context("running spatial PRRP")?;
                print_regions(0, &regions);
            }
        }
        Mode::Graph {
            p,
            target_size,
            max_retries,
            split_threshold,
        } => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            let regions = run_graph_prrp(&adj, p, target_size, max_retries, split_threshold, &mut rng)
                .context("running graph PRRP")?;
            for (id, region) in &regions {
                let mut members: Vec<_> = region.iter().copied().collect();
                members.sort_unstable();
                println!("{id}: {members:?}");
            }
        }
    }

    Ok(())
}

fn print_regions(solution: usize, regions: &[prrp::Region]) {
    for (id, region) in regions.iter().enumerate() {
        let mut members: Vec<_> = region.iter().copied().collect();
        members.sort_unstable();
        println!("solution {solution}, region {id}: {members:?}");
    }
}
