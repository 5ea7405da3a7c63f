/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! P-Regionalization through Recursive Partitioning.
//!
//! Partitions a graph into `p` connected regions. Two entry points are
//! offered: [`run_prrp`] takes a pre-specified cardinality for every region
//! (the "spatial" variant, used when region sizes are known up front, e.g.
//! from population targets); [`run_graph_prrp`] instead grows regions of a
//! single target size, recursively splitting anything that overshoots a
//! threshold and handing leftovers to a finishing pass (the "graph"
//! variant, used when only an approximate region size is known). A third
//! entry point, [`run_parallel_prrp`], produces several independent spatial
//! solutions concurrently.
//!
//! ```no_run
//! use prrp::{metis, run_prrp};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! # fn main() -> prrp::Result<()> {
//! let adj = metis::parse("4 4\n2 4\n1 3\n2 4\n1 3\n")?;
//! let mut rng = SmallRng::seed_from_u64(0);
//! let regions = run_prrp(&adj, 2, &[2, 2], 10, &mut rng)?;
//! assert_eq!(regions.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod grow;
pub mod merge;
pub mod metis;
pub mod parallel;
pub mod seed;
pub mod split;

mod driver;

pub use driver::{run_graph_prrp, run_prrp, Region};
pub use error::{PrrpError, Result};
pub use graph::{AreaId, Adjacency};
pub use parallel::run_parallel_prrp;

/// Re-exports the crate's public surface for glob-importing callers.
pub mod prelude {
    pub use crate::{
        run_graph_prrp, run_parallel_prrp, run_prrp, Adjacency, AreaId, PrrpError, Region, Result,
    };
}
