/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph primitives: the adjacency representation and the structural queries
//! (connected components, boundary detection, articulation points,
//! union-find) that the region-growth algorithm relies on.

mod articulation;
mod components;
mod union_find;

pub use articulation::articulation_points;
pub use components::connected_components;
pub use union_find::UnionFind;

use crate::error::{PrrpError, Result};
use std::collections::{HashMap, HashSet};

/// An opaque area identifier, unique within one run.
pub type AreaId = usize;

/// A symmetric, irreflexive, multi-edge-free adjacency relation over
/// [`AreaId`]s.
///
/// The set of keys of the inner map is `V`. For every `u` in `adj[v]`, `v` is
/// in `adj[u]`; no vertex is its own neighbor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: HashMap<AreaId, HashSet<AreaId>>,
}

impl Adjacency {
    /// Builds an adjacency from a pre-built mapping, sanitizing self-loops
    /// and symmetrizing the relation: an edge present in only one direction
    /// is added in the other.
    ///
    /// This is the permissive constructor used by the METIS ingester and by
    /// callers who already have an approximate adjacency. Use
    /// [`Adjacency::from_symmetric_map`] when the input is known to already
    /// satisfy the contract and should be rejected otherwise.
    pub fn from_map(map: HashMap<AreaId, HashSet<AreaId>>) -> Self {
        let mut neighbors: HashMap<AreaId, HashSet<AreaId>> = HashMap::with_capacity(map.len());
        for (&v, nbrs) in map.iter() {
            neighbors.entry(v).or_default();
            for &u in nbrs {
                if u == v {
                    continue; // sanitize self-loops
                }
                neighbors.entry(v).or_default().insert(u);
                neighbors.entry(u).or_default().insert(v); // symmetrize
            }
        }
        Adjacency { neighbors }
    }

    /// Builds an adjacency from a flat edge list, symmetrizing and
    /// deduplicating as [`Adjacency::from_map`] does.
    pub fn from_edges(num_vertices: usize, edges: impl IntoIterator<Item = (AreaId, AreaId)>) -> Self {
        let mut map: HashMap<AreaId, HashSet<AreaId>> = HashMap::with_capacity(num_vertices);
        for v in 0..num_vertices {
            map.entry(v).or_default();
        }
        for (u, v) in edges {
            map.entry(u).or_default().insert(v);
            map.entry(v).or_default().insert(u);
        }
        Adjacency::from_map(map)
    }

    /// Builds an adjacency from a mapping that the caller asserts already
    /// satisfies the symmetry and irreflexivity contract, failing with
    /// [`PrrpError::CorruptAdjacency`] if it does not.
    pub fn from_symmetric_map(map: HashMap<AreaId, HashSet<AreaId>>) -> Result<Self> {
        for (&v, nbrs) in map.iter() {
            if nbrs.contains(&v) {
                return Err(PrrpError::CorruptAdjacency(format!(
                    "vertex {v} is listed as its own neighbor"
                )));
            }
            for &u in nbrs {
                let reciprocal = map.get(&u).is_some_and(|back| back.contains(&v));
                if !reciprocal {
                    return Err(PrrpError::CorruptAdjacency(format!(
                        "edge {v}->{u} is not symmetric"
                    )));
                }
            }
        }
        Ok(Adjacency { neighbors: map })
    }

    /// The number of vertices `|V|`.
    pub fn num_vertices(&self) -> usize {
        self.neighbors.len()
    }

    /// An iterator over all vertex ids.
    pub fn vertices(&self) -> impl Iterator<Item = AreaId> + '_ {
        self.neighbors.keys().copied()
    }

    /// The neighbors of `v`, or an empty set if `v` is not a vertex.
    pub fn neighbors(&self, v: AreaId) -> &HashSet<AreaId> {
        static EMPTY: std::sync::OnceLock<HashSet<AreaId>> = std::sync::OnceLock::new();
        self.neighbors
            .get(&v)
            .unwrap_or_else(|| EMPTY.get_or_init(HashSet::new))
    }

    /// Whether `v` is a vertex of this adjacency.
    pub fn contains(&self, v: AreaId) -> bool {
        self.neighbors.contains_key(&v)
    }

    /// Inserts a symmetric edge `{u, v}`, creating either endpoint as a
    /// vertex if it did not already exist. This is the only mutator exposed
    /// on `Adjacency`, used by the region-linking repair in [`crate::merge`].
    pub fn insert_edge(&mut self, u: AreaId, v: AreaId) {
        if u == v {
            return;
        }
        self.neighbors.entry(u).or_default().insert(v);
        self.neighbors.entry(v).or_default().insert(u);
    }

    /// The induced subgraph on `vertices`, expressed as `id -> in-subgraph
    /// neighbors`. Vertices not present in `self` are silently dropped.
    pub fn induced(&self, vertices: &HashSet<AreaId>) -> HashMap<AreaId, Vec<AreaId>> {
        vertices
            .iter()
            .filter(|v| self.contains(**v))
            .map(|&v| {
                let nbrs = self
                    .neighbors(v)
                    .iter()
                    .filter(|n| vertices.contains(n))
                    .copied()
                    .collect();
                (v, nbrs)
            })
            .collect()
    }

    /// Vertices of `region` with at least one neighbor outside it (G1
    /// boundary detection).
    pub fn boundary(&self, region: &HashSet<AreaId>) -> HashSet<AreaId> {
        region
            .iter()
            .filter(|&&v| self.neighbors(v).iter().any(|n| !region.contains(n)))
            .copied()
            .collect()
    }
}
