/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::{HashMap, HashSet};

use super::AreaId;

/// Tarjan's lowlink algorithm for articulation points (cut vertices) of an
/// undirected graph, expressed as `id -> in-subgraph neighbors`.
///
/// Handles disconnected graphs by restarting the DFS from every undiscovered
/// vertex. Runs in `O(n+m)`. The DFS is iterative to avoid recursion-depth
/// limits on long induced paths.
pub fn articulation_points(induced: &HashMap<AreaId, Vec<AreaId>>) -> HashSet<AreaId> {
    let mut disc: HashMap<AreaId, usize> = HashMap::with_capacity(induced.len());
    let mut low: HashMap<AreaId, usize> = HashMap::with_capacity(induced.len());
    let mut parent: HashMap<AreaId, AreaId> = HashMap::new();
    let mut result = HashSet::new();
    let mut timer = 0usize;

    // Explicit DFS frame: the node, its neighbor iteration cursor, and the
    // number of DFS-tree children discovered so far (needed for the root's
    // special-cased articulation rule).
    struct Frame {
        node: AreaId,
        next_nbr: usize,
        children: usize,
    }

    for &root in induced.keys() {
        if disc.contains_key(&root) {
            continue;
        }
        let mut stack: Vec<Frame> = vec![Frame {
            node: root,
            next_nbr: 0,
            children: 0,
        }];
        disc.insert(root, timer);
        low.insert(root, timer);
        timer += 1;

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let nbrs = induced.get(&node).map(Vec::as_slice).unwrap_or(&[]);

            if frame.next_nbr < nbrs.len() {
                let nbr = nbrs[frame.next_nbr];
                frame.next_nbr += 1;

                if !disc.contains_key(&nbr) {
                    disc.insert(nbr, timer);
                    low.insert(nbr, timer);
                    timer += 1;
                    parent.insert(nbr, node);
                    frame.children += 1;
                    stack.push(Frame {
                        node: nbr,
                        next_nbr: 0,
                        children: 0,
                    });
                } else if parent.get(&node) != Some(&nbr) {
                    let nbr_disc = disc[&nbr];
                    let node_low = low[&node];
                    low.insert(node, node_low.min(nbr_disc));
                }
            } else {
                // Done with `node`: propagate its low-link to its parent and
                // test the articulation condition.
                stack.pop();
                if let Some(&p) = parent.get(&node) {
                    let node_low = low[&node];
                    let p_low = low[&p];
                    low.insert(p, p_low.min(node_low));

                    let is_root = !parent.contains_key(&p);
                    if is_root {
                        if let Some(parent_frame) = stack.last() {
                            if parent_frame.children >= 2 {
                                result.insert(p);
                            }
                        }
                    } else if node_low >= disc[&p] {
                        result.insert(p);
                    }
                }
            }
        }
    }

    result
}
