/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Region growth (G3): expanding a single region from a seed to a target
//! cardinality.
//!
//! Two variants are provided. [`grow_region`] is used by the spatial driver
//! (uniform-random frontier expansion, retried with a fresh seed on
//! stall). [`grow_partition`] is used by the graph driver (priority-driven
//! by unassigned degree, articulation-aware, retried by grabbing a random
//! neighbor on stall).

use std::collections::{HashSet, VecDeque};

use dary_heap::QuaternaryHeap;
use rand::Rng;

use crate::error::{PrrpError, Result};
use crate::graph::{AreaId, Adjacency};
use crate::seed::gapless_seed;

/// Grows a region of exactly `target` vertices from `available`, mutating
/// `available` in place to remove the vertices that were assigned.
///
/// Retries with a fresh seed, up to `max_retries` times, if the frontier
/// empties before `target` is reached. Fails with [`PrrpError::Infeasible`]
/// if all retries are exhausted, and with [`PrrpError::NoCandidate`] if
/// `available` starts out empty.
pub fn grow_region(
    adj: &Adjacency,
    available: &mut HashSet<AreaId>,
    region_id: usize,
    target: usize,
    max_retries: usize,
    rng: &mut impl Rng,
) -> Result<HashSet<AreaId>> {
    if available.is_empty() {
        return Err(PrrpError::NoCandidate);
    }
    if available.len() < target {
        return Err(PrrpError::Infeasible {
            region_id,
            target,
            retries: 0,
            reached: available.len(),
        });
    }

    let full_vertex_set: HashSet<AreaId> = adj.vertices().collect();

    for attempt in 0..=max_retries {
        let assigned: HashSet<AreaId> = full_vertex_set.difference(available).copied().collect();
        let seed = gapless_seed(adj, available, &assigned, rng)?;

        let mut region = HashSet::new();
        let mut pool = available.clone();
        region.insert(seed);
        pool.remove(&seed);

        while region.len() < target {
            let frontier: Vec<AreaId> = region
                .iter()
                .flat_map(|&v| adj.neighbors(v).iter().copied())
                .filter(|n| pool.contains(n))
                .collect();
            if frontier.is_empty() {
                break;
            }
            let pick = frontier[rng.random_range(0..frontier.len())];
            region.insert(pick);
            pool.remove(&pick);
        }

        if region.len() == target {
            for v in &region {
                available.remove(v);
            }
            return Ok(region);
        }
        log::debug!(
            "region {region_id}: attempt {attempt} stalled at {}/{target}, retrying",
            region.len()
        );
    }

    Err(PrrpError::Infeasible {
        region_id,
        target,
        retries: max_retries,
        reached: 0,
    })
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    /// Unassigned degree at the time this candidate was pushed; a max-heap
    /// on this field expands the most-connected frontier vertex first. May
    /// be stale once `U` shrinks further — tolerated, see crate docs.
    unassigned_degree: usize,
    id: AreaId,
}

/// Grows a region of up to `target` vertices from `U`, preferring to expand
/// the most-connected candidate first and skipping vertices in the
/// precomputed articulation set `articulation`.
///
/// If `U` has fewer than `target` vertices, returns all of `U`. Unlike
/// [`grow_region`], this never fails: when the max-heap runs dry before
/// `target` is reached, it grabs a random neighbor of the region (or, if the
/// region borders nothing in `U`, a random element of `U`) and counts a
/// retry; growth stops once retries hit `max_retries`.
pub fn grow_partition(
    adj: &Adjacency,
    u: &mut HashSet<AreaId>,
    target: usize,
    max_retries: usize,
    articulation: &HashSet<AreaId>,
    rng: &mut impl Rng,
) -> Result<HashSet<AreaId>> {
    if u.len() < target {
        let region = u.clone();
        u.clear();
        return Ok(region);
    }

    let seed = gapless_seed(adj, u, &HashSet::new(), rng)?;
    let mut region = HashSet::new();
    region.insert(seed);
    u.remove(&seed);

    let mut heap = QuaternaryHeap::new();
    heap.push(Candidate {
        unassigned_degree: unassigned_degree(adj, seed, u),
        id: seed,
    });

    let mut retries = 0usize;
    while region.len() < target {
        let Some(Candidate { id: current, .. }) = heap.pop() else {
            // Heap exhausted: grab a random neighbor of the region, or any
            // element of U if the region has no unassigned neighbor left.
            if retries >= max_retries || u.is_empty() {
                break;
            }
            let frontier: Vec<AreaId> = region
                .iter()
                .flat_map(|&v| adj.neighbors(v).iter().copied())
                .filter(|n| u.contains(n))
                .collect();
            let pool: Vec<AreaId> = if frontier.is_empty() {
                u.iter().copied().collect()
            } else {
                frontier
            };
            let pick = pool[rng.random_range(0..pool.len())];
            region.insert(pick);
            u.remove(&pick);
            heap.push(Candidate {
                unassigned_degree: unassigned_degree(adj, pick, u),
                id: pick,
            });
            retries += 1;
            continue;
        };

        for nbr in adj.neighbors(current).iter().copied().collect::<VecDeque<_>>() {
            if region.len() >= target {
                break;
            }
            if u.contains(&nbr) && !articulation.contains(&nbr) {
                region.insert(nbr);
                u.remove(&nbr);
                heap.push(Candidate {
                    unassigned_degree: unassigned_degree(adj, nbr, u),
                    id: nbr,
                });
            }
        }
    }

    Ok(region)
}

fn unassigned_degree(adj: &Adjacency, v: AreaId, u: &HashSet<AreaId>) -> usize {
    adj.neighbors(v).iter().filter(|n| u.contains(n)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn lattice_12() -> Adjacency {
        // 3x4 rook lattice, ids 0..12 laid out row-major.
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
    fn grow_region_reaches_target_and_stays_connected() {
        let adj = lattice_12();
        let mut available: HashSet<_> = (0..12).collect();
        let mut rng = SmallRng::seed_from_u64(0);
        let region = grow_region(&adj, &mut available, 0, 4, 8, &mut rng).unwrap();
        assert_eq!(region.len(), 4);
        assert_eq!(available.len(), 8);

        let induced = adj.induced(&region);
        let comps = crate::graph::connected_components(&induced);
        assert_eq!(comps.len(), 1);
    }

    #[test]
    fn grow_region_fails_when_pool_too_small() {
        let adj = lattice_12();
        let mut available: HashSet<_> = [0, 1].into_iter().collect();
        let mut rng = SmallRng::seed_from_u64(0);
        let result = grow_region(&adj, &mut available, 0, 4, 8, &mut rng);
        assert!(matches!(result, Err(PrrpError::Infeasible { .. })));
    }

    #[test]
    fn grow_partition_returns_all_of_u_if_smaller_than_target() {
        let adj = lattice_12();
        let mut u: HashSet<_> = [0, 1, 2].into_iter().collect();
        let mut rng = SmallRng::seed_from_u64(0);
        let region = grow_partition(&adj, &mut u, 10, 4, &HashSet::new(), &mut rng).unwrap();
        assert_eq!(region, [0, 1, 2].into_iter().collect());
        assert!(u.is_empty());
    }

    #[test]
    fn grow_partition_respects_target_size() {
        let adj = lattice_12();
        let mut u: HashSet<_> = (0..12).collect();
        let mut rng = SmallRng::seed_from_u64(7);
        let region = grow_partition(&adj, &mut u, 5, 4, &HashSet::new(), &mut rng).unwrap();
        assert_eq!(region.len(), 5);
        assert_eq!(u.len(), 7);
    }
}
