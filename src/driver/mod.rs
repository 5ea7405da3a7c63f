/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The two driver entry points (G6, G7) that sequence seed/grow/merge/split
//! over a whole adjacency.

mod graph;
mod spatial;

pub use graph::run_graph_prrp;
pub use spatial::run_prrp;

use std::collections::HashSet;

use crate::error::{PrrpError, Result};
use crate::graph::AreaId;

/// A connected set of area ids, as produced by a single pass of the driver.
pub type Region = HashSet<AreaId>;

/// Checks the shared spatial/graph driver precondition that cardinalities
/// sum to `|V|` and are each at least 1.
fn validate_cardinalities(num_vertices: usize, cardinalities: &[usize]) -> Result<()> {
    if cardinalities.iter().any(|&c| c == 0) {
        return Err(PrrpError::BadCardinality(
            "every cardinality must be at least 1".into(),
        ));
    }
    let sum: usize = cardinalities.iter().sum();
    if sum != num_vertices {
        return Err(PrrpError::BadCardinality(format!(
            "cardinalities sum to {sum} but the graph has {num_vertices} vertices"
        )));
    }
    Ok(())
}
