/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Region splitting (G5): shrinking an oversized region back to its target
//! cardinality by repeatedly removing a non-articulation boundary vertex.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{PrrpError, Result};
use crate::graph::{articulation_points, connected_components, AreaId, Adjacency};

/// Shrinks `region` towards `target` size, preserving connectivity.
///
/// Removes `|region| - target` boundary vertices one at a time, preferring
/// non-articulation vertices of the region's own induced subgraph. If a
/// removal disconnects the region, only the largest remaining component is
/// kept (the region may end up smaller than `target` as a result; the driver
/// is responsible for noticing and deciding what to do about it).
///
/// Fails with [`PrrpError::NoBoundary`] if, partway through, no removable
/// vertex can be found at all (region has collapsed to a single vertex).
/// Gives up after `10 * excess` removal attempts and returns whatever
/// remains.
pub fn split_region(
    region_id: usize,
    region: &HashSet<AreaId>,
    target: usize,
    adj: &Adjacency,
    rng: &mut impl Rng,
) -> Result<HashSet<AreaId>> {
    let mut region = region.clone();
    if region.len() <= target {
        return Ok(region);
    }
    let excess = region.len() - target;
    let max_attempts = 10 * excess;

    let mut attempts = 0;
    while region.len() > target && attempts < max_attempts {
        attempts += 1;
        let Some(victim) = pick_removable(adj, &region, rng) else {
            return Err(PrrpError::NoBoundary {
                region_id,
                current: region.len(),
                target,
            });
        };
        region.remove(&victim);
        retain_largest_component(adj, &mut region);
    }

    Ok(region)
}

/// Graph-variant splitter: removes the same excess as [`split_region`], but
/// decomposes the removed vertices by connected component and returns each
/// component as its own candidate region alongside the shrunk original.
///
/// The caller (the graph driver) is responsible for assigning fresh region
/// ids to the returned fragments.
pub fn split_partition(
    region_id: usize,
    region: &HashSet<AreaId>,
    target: usize,
    adj: &Adjacency,
    rng: &mut impl Rng,
) -> Result<(HashSet<AreaId>, Vec<HashSet<AreaId>>)> {
    if region.len() <= target {
        return Ok((region.clone(), Vec::new()));
    }
    let excess = region.len() - target;
    let max_attempts = 10 * excess;

    let mut kept = region.clone();
    let mut removed: HashSet<AreaId> = HashSet::new();

    let mut attempts = 0;
    while kept.len() > target && attempts < max_attempts {
        attempts += 1;
        let Some(victim) = pick_removable(adj, &kept, rng) else {
            return Err(PrrpError::NoBoundary {
                region_id,
                current: kept.len(),
                target,
            });
        };
        kept.remove(&victim);
        removed.insert(victim);
        retain_largest_component(adj, &mut kept);
    }

    let fragments = if removed.is_empty() {
        Vec::new()
    } else {
        let induced = adj.induced(&removed);
        connected_components(&induced)
    };

    Ok((kept, fragments))
}

fn pick_removable(adj: &Adjacency, region: &HashSet<AreaId>, rng: &mut impl Rng) -> Option<AreaId> {
    let boundary = adj.boundary(region);
    if boundary.is_empty() {
        return None;
    }
    let induced = adj.induced(region);
    let articulation = articulation_points(&induced);

    let non_articulation: Vec<AreaId> = boundary
        .iter()
        .copied()
        .filter(|v| !articulation.contains(v))
        .collect();

    let candidates: Vec<AreaId> = if non_articulation.is_empty() {
        boundary.into_iter().collect()
    } else {
        non_articulation
    };
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

fn retain_largest_component(adj: &Adjacency, region: &mut HashSet<AreaId>) {
    let induced = adj.induced(region);
    let mut components = connected_components(&induced);
    if components.len() <= 1 {
        return;
    }
    let (largest_idx, _) = components
        .iter()
        .enumerate()
        .max_by_key(|(_, c)| c.len())
        .expect("components is non-empty");
    *region = components.swap_remove(largest_idx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn lattice_12() -> Adjacency {
        let mut edges = Vec::new();
        for r in 0..3 {
            for c in 0..4 {
                let id = r * 4 + c;
                if c + 1 < 4 {
                    edges.push((id, id + 1));
                }
                if r + 1 < 3 {
                    edges.push((id, id + 4));
                }
            }
        }
        Adjacency::from_edges(12, edges)
    }

    #[test]
    fn split_region_noop_when_already_at_target() {
        let adj = lattice_12();
        let region: HashSet<_> = [0, 1, 2].into_iter().collect();
        let mut rng = SmallRng::seed_from_u64(0);
        let result = split_region(0, &region, 3, &adj, &mut rng).unwrap();
        assert_eq!(result, region);
    }

    #[test]
    fn split_region_shrinks_to_target_and_stays_connected() {
        let adj = lattice_12();
        // a 2x4 block (rows 0-1), 8 vertices, shrink to 5
        let region: HashSet<_> = (0..8).collect();
        let mut rng = SmallRng::seed_from_u64(5);
        let result = split_region(0, &region, 5, &adj, &mut rng).unwrap();
        assert!(result.len() <= 5);
        assert!(!result.is_empty());

        let induced = adj.induced(&result);
        let comps = connected_components(&induced);
        assert_eq!(comps.len(), 1);
    }

    #[test]
    fn split_region_fails_on_singleton() {
        let adj = lattice_12();
        let region: HashSet<_> = [0].into_iter().collect();
        let mut rng = SmallRng::seed_from_u64(0);
        // target 0 on a singleton region: excess is 1, but there is no
        // boundary vertex to remove without leaving an empty region; the
        // loop should fail fast via NoBoundary once the boundary is checked
        // against an already-minimal region. With a true singleton the
        // boundary is itself (its neighbors are all outside), so one
        // removal is in fact possible; exercise a genuinely stuck case
        // instead: a region with no internal boundary notion breaks only
        // when isolated from adj entirely.
        let isolated_adj = Adjacency::from_edges(1, []);
        let isolated_region: HashSet<_> = [0].into_iter().collect();
        let result = split_region(0, &isolated_region, 0, &isolated_adj, &mut rng);
        assert!(matches!(result, Err(PrrpError::NoBoundary { .. })));
        let _ = region;
    }

    #[test]
    fn split_partition_returns_removed_fragments() {
        let adj = lattice_12();
        let region: HashSet<_> = (0..8).collect();
        let mut rng = SmallRng::seed_from_u64(3);
        let (kept, fragments) = split_partition(0, &region, 5, &adj, &mut rng).unwrap();
        assert!(kept.len() <= 5);
        let total: usize = fragments.iter().map(|f| f.len()).sum::<usize>() + kept.len();
        assert_eq!(total, 8);
    }
}
