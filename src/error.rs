/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The closed set of ways a PRRP run can fail.
//!
//! Every fallible operation in this crate returns [`PrrpError`] rather than a
//! bare string: callers that want to recover (the drivers retry on
//! [`PrrpError::NoCandidate`], for instance) match on the variant instead of
//! inspecting a message.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrrpError>;

/// A fatal condition raised while building an adjacency or running a PRRP
/// driver.
#[derive(Debug, Error)]
pub enum PrrpError {
    /// A seed was requested from an empty candidate pool.
    #[error("no candidate vertex available to seed a region (pool is empty)")]
    NoCandidate,

    /// A region could not be grown (or split) to its target size within the
    /// allotted retries.
    #[error("region {region_id} could not reach size {target} after {retries} retries (stuck at {reached})")]
    Infeasible {
        region_id: usize,
        target: usize,
        retries: usize,
        reached: usize,
    },

    /// The splitter ran out of removable boundary vertices.
    #[error("no removable boundary vertex left while shrinking region {region_id} from {current} towards {target}")]
    NoBoundary {
        region_id: usize,
        current: usize,
        target: usize,
    },

    /// A structural invariant of the adjacency (symmetry, irreflexivity, or
    /// the existence of at least one connected component covering a
    /// non-empty vertex set) was violated.
    #[error("adjacency invariant violated: {0}")]
    CorruptAdjacency(String),

    /// The requested cardinalities are not a valid partition of `|V|`.
    #[error("bad cardinality vector: {0}")]
    BadCardinality(String),
}

impl PrrpError {
    /// Surfaces a [`PrrpError::NoBoundary`] as [`PrrpError::Infeasible`],
    /// per the documented recovery contract (§7 of the spec this crate
    /// implements): the splitter running out of removable boundary vertices
    /// is not a condition distinct from growth running out of retries, from
    /// the caller's point of view. Every other variant passes through
    /// unchanged.
    pub fn surface(self) -> Self {
        match self {
            PrrpError::NoBoundary {
                region_id,
                current,
                target,
            } => PrrpError::Infeasible {
                region_id,
                target,
                retries: 0,
                reached: current,
            },
            other => other,
        }
    }
}
