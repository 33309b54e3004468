use std::ops::Range;

use crate::policy::{Combiner, Updater};

/// Array-backed segment tree with lazy propagation.
///
/// - Ranges are half-open: `[l, r)`.
/// - `query` answers an associative aggregate over a range; `update` applies
///   a tag uniformly to every element of a range. Both are O(log n).
/// - Malformed ranges (`l > r` or `r > len`) are rejected: `query` returns
///   `None`, `update` returns `false`. The empty range `[k, k)` is valid and
///   aggregates to the combiner's identity.
pub struct LazySegmentTree<C: Combiner, U: Updater<C::Value>> {
    n: usize,
    size: usize,
    val: Vec<C::Value>,
    lazy: Vec<U::Tag>,
    pending: Vec<bool>,
}

impl<C: Combiner, U: Updater<C::Value>> Clone for LazySegmentTree<C, U> {
    fn clone(&self) -> Self {
        Self {
            n: self.n,
            size: self.size,
            val: self.val.clone(),
            lazy: self.lazy.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<C: Combiner, U: Updater<C::Value>> LazySegmentTree<C, U> {
    pub fn new(values: &[C::Value]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                n,
                size: 0,
                val: Vec::new(),
                lazy: Vec::new(),
                pending: Vec::new(),
            };
        }

        // Power-of-two padding keeps every recursive split even, so node ids
        // never exceed 2 * size - 2. Padding leaves hold the identity and are
        // never touched by updates.
        let size = n.next_power_of_two();
        let mut tree = Self {
            n,
            size,
            val: vec![C::identity(); 2 * size],
            lazy: vec![U::noop(); 2 * size],
            pending: vec![false; 2 * size],
        };
        tree.build(values, 0, 0, size);
        tree
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn build(&mut self, values: &[C::Value], node: usize, node_left: usize, node_right: usize) {
        if node_right - node_left == 1 {
            if node_left < self.n {
                self.val[node] = values[node_left].clone();
            }
            return;
        }
        let mid = (node_left + node_right) / 2;
        self.build(values, 2 * node + 1, node_left, mid);
        self.build(values, 2 * node + 2, mid, node_right);
        self.val[node] = C::combine(&self.val[2 * node + 1], &self.val[2 * node + 2]);
    }

    /// Aggregate over `range`, or `None` if the range is malformed.
    pub fn query(&mut self, range: Range<usize>) -> Option<C::Value> {
        if range.start > range.end || range.end > self.n {
            return None;
        }
        if self.size == 0 {
            return Some(C::identity());
        }
        Some(self.query_rec(range.start, range.end, 0, 0, self.size))
    }

    fn query_rec(
        &mut self,
        l: usize,
        r: usize,
        node: usize,
        node_left: usize,
        node_right: usize,
    ) -> C::Value {
        if node_right <= l || r <= node_left {
            return C::identity();
        }
        if l <= node_left && node_right <= r {
            return self.val[node].clone();
        }
        self.propagate(node, node_left, node_right);
        let mid = (node_left + node_right) / 2;
        let left = self.query_rec(l, r, 2 * node + 1, node_left, mid);
        let right = self.query_rec(l, r, 2 * node + 2, mid, node_right);
        C::combine(&left, &right)
    }

    /// Point read, equivalent to `query(index..index + 1)`.
    pub fn get(&mut self, index: usize) -> Option<C::Value> {
        if index >= self.n {
            return None;
        }
        self.query(index..index + 1)
    }

    /// Apply `tag` to every element of `range`.
    ///
    /// Returns `false` (without touching any state) if the range is
    /// malformed.
    pub fn update(&mut self, range: Range<usize>, tag: U::Tag) -> bool {
        if range.start > range.end || range.end > self.n {
            return false;
        }
        if self.size != 0 {
            self.update_rec(range.start, range.end, &tag, 0, 0, self.size);
        }
        true
    }

    fn update_rec(
        &mut self,
        l: usize,
        r: usize,
        tag: &U::Tag,
        node: usize,
        node_left: usize,
        node_right: usize,
    ) {
        if node_right <= l || r <= node_left {
            return;
        }
        if l <= node_left && node_right <= r {
            self.apply_update(node, tag, node_right - node_left);
            return;
        }
        self.propagate(node, node_left, node_right);
        let mid = (node_left + node_right) / 2;
        self.update_rec(l, r, tag, 2 * node + 1, node_left, mid);
        self.update_rec(l, r, tag, 2 * node + 2, mid, node_right);
        self.val[node] = C::combine(&self.val[2 * node + 1], &self.val[2 * node + 2]);
    }

    /// Fold `tag` into `node`'s aggregate and stack it on the pending slot.
    /// The node's children do not see the tag until `propagate`.
    fn apply_update(&mut self, node: usize, tag: &U::Tag, width: usize) {
        self.val[node] = U::apply(&self.val[node], tag, width);
        if self.pending[node] {
            self.lazy[node] = U::compose(&self.lazy[node], tag);
        } else {
            self.lazy[node] = tag.clone();
            self.pending[node] = true;
        }
    }

    /// Push the pending tag down to both children. Must run before any
    /// descent past `node`; only ever called on internal nodes, since a
    /// width-1 node cannot partially overlap a range.
    fn propagate(&mut self, node: usize, node_left: usize, node_right: usize) {
        if !self.pending[node] {
            return;
        }
        let tag = std::mem::replace(&mut self.lazy[node], U::noop());
        self.pending[node] = false;
        let mid = (node_left + node_right) / 2;
        self.apply_update(2 * node + 1, &tag, mid - node_left);
        self.apply_update(2 * node + 2, &tag, node_right - mid);
    }
}
