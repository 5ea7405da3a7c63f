/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::HashMap;

use super::AreaId;

/// A path-compressed union-find (disjoint-set) structure over [`AreaId`]s.
///
/// Union is by arbitrary representative (no rank/size heuristic), which is
/// sufficient here: [`crate::merge`] only uses this to group a single
/// region's induced edges, never to build up a structure incrementally over
/// the whole run.
pub struct UnionFind {
    parent: HashMap<AreaId, AreaId>,
}

impl UnionFind {
    /// Creates a union-find with one singleton set per element of `elems`.
    pub fn new(elems: impl IntoIterator<Item = AreaId>) -> Self {
        let parent = elems.into_iter().map(|e| (e, e)).collect();
        UnionFind { parent }
    }

    /// Finds the representative of `x`'s set, compressing the path.
    ///
    /// # Panics
    /// Panics if `x` was not one of the elements passed to [`UnionFind::new`].
    pub fn find(&mut self, x: AreaId) -> AreaId {
        let mut root = x;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }
        let mut cur = x;
        while self.parent[&cur] != root {
            let next = self.parent[&cur];
            self.parent.insert(cur, root);
            cur = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    pub fn union(&mut self, x: AreaId, y: AreaId) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx != ry {
            self.parent.insert(ry, rx);
        }
    }

    /// Enumerates the current groups as `representative -> members`.
    pub fn groups(&mut self) -> HashMap<AreaId, Vec<AreaId>> {
        let elems: Vec<AreaId> = self.parent.keys().copied().collect();
        let mut groups: HashMap<AreaId, Vec<AreaId>> = HashMap::new();
        for e in elems {
            let rep = self.find(e);
            groups.entry(rep).or_default().push(e);
        }
        groups
    }
}
