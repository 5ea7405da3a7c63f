/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Gapless seed selection (G2): choosing the next vertex to grow a region
//! from, biased towards the frontier of the already-assigned mass so the
//! remaining unassigned pool tends to stay contiguous.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{PrrpError, Result};
use crate::graph::{AreaId, Adjacency};

/// Picks a seed from `available`, preferring a neighbor of `assigned` when
/// one exists.
///
/// - `available` empty → [`PrrpError::NoCandidate`].
/// - `assigned` empty → uniform over `available`.
/// - otherwise → uniform over `(⋃_{a∈assigned} adj[a]) ∩ available`, falling
///   back to uniform over `available` if that intersection is empty.
pub fn gapless_seed(
    adj: &Adjacency,
    available: &HashSet<AreaId>,
    assigned: &HashSet<AreaId>,
    rng: &mut impl Rng,
) -> Result<AreaId> {
    if available.is_empty() {
        return Err(PrrpError::NoCandidate);
    }

    if !assigned.is_empty() {
        let frontier: Vec<AreaId> = assigned
            .iter()
            .flat_map(|&a| adj.neighbors(a).iter().copied())
            .filter(|n| available.contains(n))
            .collect();
        if let Some(&pick) = uniform_choice(&frontier, rng) {
            return Ok(pick);
        }
    }

    let pool: Vec<AreaId> = available.iter().copied().collect();
    uniform_choice(&pool, rng)
        .copied()
        .ok_or(PrrpError::NoCandidate)
}

fn uniform_choice<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}
