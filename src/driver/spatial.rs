/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Spatial PRRP driver (G6): grow exactly `p` regions of pre-specified
//! cardinalities from a single adjacency.

use std::collections::HashSet;

use dsi_progress_logger::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{validate_cardinalities, Region};
use crate::error::{PrrpError, Result};
use crate::graph::{AreaId, Adjacency};
use crate::grow::grow_region;
use crate::merge::merge_disconnected_areas;
use crate::split::split_region;

/// Runs the spatial PRRP driver: partitions all of `adj`'s vertices into
/// `p` connected regions whose sizes match `cardinalities` (order
/// unspecified — cardinalities are permuted once per call so the "last
/// region gets the remainder" step doesn't consistently starve one size).
///
/// Fails with [`PrrpError::BadCardinality`] if `p != cardinalities.len()` or
/// `cardinalities` does not sum to `adj.num_vertices()`, and with
/// [`PrrpError::Infeasible`] if any region's growth exhausts its retries.
pub fn run_prrp(
    adj: &Adjacency,
    p: usize,
    cardinalities: &[usize],
    max_retries: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Region>> {
    if p != cardinalities.len() {
        return Err(PrrpError::BadCardinality(format!(
            "p={p} does not match cardinalities.len()={}",
            cardinalities.len()
        )));
    }
    validate_cardinalities(adj.num_vertices(), cardinalities)?;

    let mut order: Vec<usize> = (0..cardinalities.len()).collect();
    order.shuffle(rng);

    let mut available: HashSet<AreaId> = adj.vertices().collect();
    let mut regions = Vec::with_capacity(p);

    let mut pl = ProgressLogger::default();
    pl.item_name("region");
    pl.expected_updates(Some(p));
    pl.start("Growing regions...");

    for (pass, &idx) in order.iter().enumerate() {
        let target = cardinalities[idx];
        if pass == order.len() - 1 {
            // Last region in the permuted order takes exactly what remains;
            // this is forced by the cardinality sum invariant.
            log::info!("region {idx}: assigned remaining {} vertices", available.len());
            regions.push((idx, std::mem::take(&mut available)));
            pl.light_update();
            break;
        }

        let mut region = grow_region(adj, &mut available, idx, target, max_retries, rng)?;
        merge_disconnected_areas(adj, &mut available, &mut region)?;
        if region.len() > target {
            let grown = region.clone();
            region = split_region(idx, &region, target, adj, rng).map_err(PrrpError::surface)?;
            // The splitter only ever drops vertices it decided not to keep
            // (excess boundary vertices, or minor components shed when a
            // removal disconnected the region); they belong back in the
            // pool, not nowhere, or the partition stops covering `V`.
            let dropped: HashSet<AreaId> = grown.difference(&region).copied().collect();
            available.extend(dropped);
        }
        log::debug!("region {idx}: grown to {} vertices (target {target})", region.len());
        regions.push((idx, region));
        pl.light_update();
    }
    pl.done();

    regions.sort_by_key(|(idx, _)| *idx);
    Ok(regions.into_iter().map(|(_, r)| r).collect())
}
