/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Merging (G4): two distinctly-named operations for the two senses the
//! original description conflated under one name (see SPEC_FULL.md §9).
//!
//! [`merge_disconnected_areas`] repairs the *unassigned pool*: after growth
//! it may have fragmented, so every component but the largest is absorbed
//! into the region that caused the fragmentation.
//!
//! [`link_region_fragments`] repairs the *region* itself (used by the graph
//! driver, whose growth step can leave a region internally disconnected
//! because of stale articulation filtering): it stitches minor components
//! back to the main one by inserting adjacency edges, mutating the graph.

use std::collections::HashSet;

use crate::error::{PrrpError, Result};
use crate::graph::{connected_components, AreaId, Adjacency, UnionFind};

/// Keeps the largest connected component of `available` as the new pool,
/// absorbing every other component into `region`.
///
/// `available` and `region` are updated in place. Fails with
/// [`PrrpError::CorruptAdjacency`] if `available` is non-empty but yields no
/// components (which can only happen if the adjacency itself is corrupt).
pub fn merge_disconnected_areas(
    adj: &Adjacency,
    available: &mut HashSet<AreaId>,
    region: &mut HashSet<AreaId>,
) -> Result<()> {
    if available.is_empty() {
        return Ok(());
    }

    let induced = adj.induced(available);
    let mut components = connected_components(&induced);
    if components.is_empty() {
        return Err(PrrpError::CorruptAdjacency(
            "available pool is non-empty but yielded no connected components".into(),
        ));
    }
    if components.len() == 1 {
        return Ok(());
    }

    let (largest_idx, _) = components
        .iter()
        .enumerate()
        .max_by_key(|(_, c)| c.len())
        .expect("components is non-empty");

    for (idx, component) in components.drain(..).enumerate() {
        if idx == largest_idx {
            continue;
        }
        for v in component {
            available.remove(&v);
            region.insert(v);
        }
    }
    log::debug!(
        "merge_disconnected_areas: absorbed {} stranded vertices into the region",
        region.len()
    );
    Ok(())
}

/// If the subgraph induced by `region` has more than one connected
/// component, links every minor component to the largest one by inserting a
/// fresh edge from one of its vertices to a representative of the largest
/// component.
///
/// This is the only operation in the core that mutates a graph's edge set;
/// callers running in parallel must each hold a private copy of `adj` before
/// calling this (see SPEC_FULL.md §5).
pub fn link_region_fragments(adj: &mut Adjacency, region: &HashSet<AreaId>) {
    if region.len() <= 1 {
        return;
    }

    let induced = adj.induced(region);
    let mut uf = UnionFind::new(region.iter().copied());
    for (&v, nbrs) in &induced {
        for &n in nbrs {
            uf.union(v, n);
        }
    }

    let groups = uf.groups();
    if groups.len() <= 1 {
        return;
    }

    let (_, main_component) = groups
        .iter()
        .max_by_key(|(_, members)| members.len())
        .expect("groups is non-empty");
    let main_node = main_component[0];

    for members in groups.values() {
        if members.contains(&main_node) {
            continue;
        }
        let representative = members[0];
        adj.insert_edge(representative, main_node);
    }
    log::debug!(
        "link_region_fragments: stitched {} fragments back into the region",
        groups.len() - 1
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_connected_pool_untouched() {
        let adj = Adjacency::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let mut available: HashSet<_> = [0, 1, 2, 3].into_iter().collect();
        let mut region = HashSet::new();
        merge_disconnected_areas(&adj, &mut available, &mut region).unwrap();
        assert_eq!(available.len(), 4);
        assert!(region.is_empty());
    }

    #[test]
    fn absorbs_stranded_component_into_region() {
        // 12-node path-like graph where growth split the pool into a large
        // piece and an isolated vertex 11.
        let adj = Adjacency::from_edges(12, (0..11).map(|i| (i, i + 1)));
        let mut available: HashSet<_> = [0, 1, 2, 11].into_iter().collect();
        let mut region: HashSet<_> = [3, 4, 5, 6, 7, 8, 9, 10].into_iter().collect();
        merge_disconnected_areas(&adj, &mut available, &mut region).unwrap();

        assert_eq!(available, [0, 1, 2].into_iter().collect());
        assert!(region.contains(&11));
    }

    #[test]
    fn link_region_fragments_reconnects_region() {
        // Region {0,1} and {2,3} disconnected from one another (their only
        // link, say via vertex 4, is outside the region).
        let mut adj = Adjacency::from_edges(5, [(0, 1), (2, 3), (1, 4), (4, 2)]);
        let region: HashSet<_> = [0, 1, 2, 3].into_iter().collect();

        link_region_fragments(&mut adj, &region);

        let induced = adj.induced(&region);
        let comps = connected_components(&induced);
        assert_eq!(comps.len(), 1);
    }

    #[test]
    fn link_region_fragments_is_noop_when_already_connected() {
        let mut adj = Adjacency::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let before = adj.clone();
        let region: HashSet<_> = [0, 1, 2, 3].into_iter().collect();
        link_region_fragments(&mut adj, &region);
        assert_eq!(adj, before);
    }
}
