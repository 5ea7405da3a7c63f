/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parser for the METIS graph text format.
//!
//! First line: `n m [fmt]`. The next `n` lines each hold the space-separated,
//! 1-based neighbor list of one vertex, in order. This ingester converts to
//! 0-based ids and builds a symmetric [`Adjacency`]; the core itself is
//! id-agnostic (§6.2 of the spec) as long as ids are distinct and ordered,
//! which `usize` trivially satisfies.

use std::collections::HashMap;

use crate::error::{PrrpError, Result};
use crate::graph::Adjacency;

/// Parses `input` as a METIS-format graph and returns its adjacency.
///
/// Returns [`PrrpError::CorruptAdjacency`] if the header is malformed, a
/// neighbor line is not a run of valid 1-based vertex indices, or the number
/// of declared vertices/edges does not match what was actually read.
pub fn parse(input: &str) -> Result<Adjacency> {
    // Blank lines are significant here (an isolated vertex's neighbor row is
    // empty), so only the header is required to be non-blank.
    let mut lines = input.lines().map(str::trim);

    let header = loop {
        match lines.next() {
            Some(l) if !l.is_empty() => break l,
            Some(_) => continue,
            None => return Err(PrrpError::CorruptAdjacency("empty METIS input".into())),
        }
    };
    let mut header_fields = header.split_whitespace();
    let n: usize = parse_field(&mut header_fields, "n")?;
    let m: usize = parse_field(&mut header_fields, "m")?;

    let rows: Vec<&str> = lines.collect();
    if rows.len() != n {
        return Err(PrrpError::CorruptAdjacency(format!(
            "header declared {n} vertices but {} neighbor rows were found",
            rows.len()
        )));
    }

    let mut map: HashMap<usize, std::collections::HashSet<usize>> = HashMap::with_capacity(n);
    for v in 0..n {
        map.entry(v).or_default();
    }

    let mut edge_count = 0usize;
    for (row, line) in rows.into_iter().enumerate() {
        for tok in line.split_whitespace() {
            let one_based: usize = tok.parse().map_err(|_| {
                PrrpError::CorruptAdjacency(format!(
                    "vertex {row}: `{tok}` is not a valid 1-based neighbor index"
                ))
            })?;
            if one_based == 0 || one_based > n {
                return Err(PrrpError::CorruptAdjacency(format!(
                    "vertex {row}: neighbor index {one_based} out of range 1..={n}"
                )));
            }
            let nbr = one_based - 1;
            if map.entry(row).or_default().insert(nbr) {
                edge_count += 1;
            }
        }
    }

    // Each undirected edge is counted once per endpoint while parsing the
    // neighbor lists; METIS's `m` counts each edge once.
    if edge_count / 2 != m {
        log::warn!("METIS header declared {m} edges, {} were read", edge_count / 2);
    }

    Ok(Adjacency::from_map(map))
}

fn parse_field<'a>(fields: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<usize> {
    fields
        .next()
        .ok_or_else(|| PrrpError::CorruptAdjacency(format!("missing `{name}` in METIS header")))?
        .parse()
        .map_err(|_| PrrpError::CorruptAdjacency(format!("`{name}` in METIS header is not a number")))
}
