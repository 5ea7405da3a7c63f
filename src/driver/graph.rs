/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph PRRP driver (G7): recursive variant driven by a single target
//! cardinality, a retry bound, and a split threshold, with a finishing pass
//! that absorbs whatever growth/merge/split leaves behind.

use std::collections::{BTreeMap, HashSet};

use dsi_progress_logger::prelude::*;
use rand::Rng;

use super::Region;
use crate::error::{PrrpError, Result};
use crate::graph::{articulation_points, connected_components, AreaId, Adjacency};
use crate::grow::grow_partition;
use crate::merge::link_region_fragments;
use crate::split::split_partition;

/// Runs the graph PRRP driver.
///
/// Grows regions of target size `target_size` until the unassigned pool is
/// exhausted or `p` regions have been emitted, splitting any region larger
/// than `split_threshold` into multiple sub-regions. Leftover vertices (past
/// the `p`-region budget, or stranded by splits) are assigned in a finishing
/// pass to the region maximizing shared-edge count; any region left
/// internally disconnected by that pass is repaired by edge insertion on a
/// private copy of `adj`.
///
/// The `adj` the caller passed in is never mutated; all graph-repair
/// mutation happens on an internal copy.
pub fn run_graph_prrp(
    adj: &Adjacency,
    p: usize,
    target_size: usize,
    max_retries: usize,
    split_threshold: usize,
    rng: &mut impl Rng,
) -> Result<BTreeMap<usize, Region>> {
    if target_size == 0 {
        return Err(PrrpError::BadCardinality("target size must be at least 1".into()));
    }

    let mut local_adj = adj.clone();
    let full_induced = local_adj.induced(&local_adj.vertices().collect());
    let articulation = articulation_points(&full_induced);

    let mut u: HashSet<AreaId> = local_adj.vertices().collect();
    let mut regions: BTreeMap<usize, Region> = BTreeMap::new();
    let mut next_id = 0usize;

    let mut pl = ProgressLogger::default();
    pl.item_name("region");
    pl.expected_updates(Some(p));
    pl.start("Growing regions...");

    while !u.is_empty() && next_id < p {
        let mut region = grow_partition(&local_adj, &mut u, target_size, max_retries, &articulation, rng)?;
        link_region_fragments(&mut local_adj, &region);

        if region.len() > split_threshold {
            let excess_target = target_size.min(region.len());
            let (kept, fragments) = split_partition(next_id, &region, excess_target, &local_adj, rng)
                .map_err(PrrpError::surface)?;
            region = kept;
            log::debug!(
                "region {next_id}: split into a kept region of {} and {} fragment(s)",
                region.len(),
                fragments.len()
            );
            regions.insert(next_id, region);
            next_id += 1;
            pl.light_update();
            for fragment in fragments {
                if next_id >= p {
                    // No more region slots: the finishing pass will pick
                    // these vertices up instead of creating a new region.
                    for v in fragment {
                        u.insert(v);
                    }
                    continue;
                }
                regions.insert(next_id, fragment);
                next_id += 1;
                pl.light_update();
            }
        } else {
            log::debug!("region {next_id}: emitted at {} vertices", region.len());
            regions.insert(next_id, region);
            next_id += 1;
            pl.light_update();
        }
    }
    pl.done();

    finishing_pass(&local_adj, &mut regions, u);
    post_fixup(&mut local_adj, &mut regions);

    Ok(regions)
}

/// Assigns every remaining vertex to the region with the most edges into it,
/// breaking ties by smallest region size then smallest region id.
fn finishing_pass(adj: &Adjacency, regions: &mut BTreeMap<usize, Region>, leftover: HashSet<AreaId>) {
    if regions.is_empty() {
        // No region slot was ever opened (p == 0, or the graph was empty);
        // nothing to assign leftovers to.
        return;
    }
    for v in leftover {
        let choice = regions
            .iter()
            .map(|(&id, region)| {
                let shared = adj.neighbors(v).iter().filter(|n| region.contains(n)).count();
                (shared, std::cmp::Reverse(region.len()), std::cmp::Reverse(id))
            })
            .enumerate()
            .max_by_key(|(_, key)| *key)
            .map(|(idx, _)| idx);

        if let Some(idx) = choice {
            let id = *regions.keys().nth(idx).expect("idx is in range");
            regions.get_mut(&id).expect("id exists").insert(v);
        }
        log::trace!("finishing pass: assigned leftover vertex {v}");
    }
}

/// Repairs any region left internally disconnected by the finishing pass.
fn post_fixup(adj: &mut Adjacency, regions: &mut BTreeMap<usize, Region>) {
    for region in regions.values() {
        let induced = adj.induced(region);
        let comps = connected_components(&induced);
        if comps.len() > 1 {
            link_region_fragments(adj, region);
        }
    }
}
