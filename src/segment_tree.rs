use std::fmt;
use std::ops::{Bound, Index, RangeBounds};

use tracing::{debug, trace};

use crate::error::{ConstructionError, Error, Result};
use crate::groups::{FnMonoid, Monoid};

/// Range aggregation over a flat, power-of-two padded binary tree.
///
/// Leaves live in `data[n..2 * n]`, internal node `i` holds `op(data[2i], data[2i + 1])` and
/// the root is `data[1]`. `data[0]` is unused. The monoid does not need to be commutative:
/// every fold combines leaves in index order.
#[derive(Clone, Debug)]
pub struct SegmentTree<M: Monoid> {
    monoid: M,
    data: Vec<M::Elem>,
}

impl<M: Monoid> SegmentTree<M> {
    /// Builds a tree over `values`, padding with the identity up to the smallest power of
    /// two strictly greater than the number of values.
    ///
    /// O(n)
    pub fn new<Iter: IntoIterator<Item = M::Elem>>(
        monoid: M,
        values: Iter,
    ) -> Result<Self, ConstructionError> {
        let values: Vec<_> = values.into_iter().collect();
        let len = values.len();
        let n = len
            .checked_add(1)
            .and_then(usize::checked_next_power_of_two)
            .filter(|n| n.checked_mul(2).is_some())
            .ok_or(ConstructionError::CapacityOverflow { len })?;

        let mut data = Vec::with_capacity(2 * n);
        data.resize_with(n, || monoid.id());
        data.extend(values);
        data.resize_with(2 * n, || monoid.id());

        let mut tree = Self { monoid, data };
        for i in (1..n).rev() {
            tree.pull(i);
        }

        debug!(len, capacity = n, "built segment tree");
        Ok(tree)
    }

    /// Padded leaf count `n`. Valid point indices are `0..n`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len() / 2
    }

    #[inline]
    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    /// All `n` leaves, padding included.
    #[inline]
    pub fn leaves(&self) -> &[M::Elem] {
        &self.data[self.capacity()..]
    }

    /// Aggregate of every leaf.
    ///
    /// O(1)
    #[inline]
    pub fn root(&self) -> &M::Elem {
        &self.data[1]
    }

    /// Recomputes internal node `i` from its children.
    #[inline]
    fn pull(&mut self, i: usize) {
        let l = 2 * i;
        let r = l + 1;
        self.data[i] = self.monoid.op(self.data[l].clone(), self.data[r].clone());
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        let capacity = self.capacity();
        if index < capacity {
            Ok(capacity + index)
        } else {
            trace!(index, capacity, "index out of range");
            Err(Error::IndexOutOfRange { index, capacity })
        }
    }

    /// O(1)
    pub fn get(&self, i: usize) -> Result<&M::Elem> {
        let leaf = self.check_index(i)?;
        Ok(&self.data[leaf])
    }

    /// Replaces leaf `i` and refreshes its ancestors. Returns the previous value.
    ///
    /// O(log n)
    pub fn set(&mut self, i: usize, x: M::Elem) -> Result<M::Elem> {
        let mut leaf = self.check_index(i)?;
        let old = std::mem::replace(&mut self.data[leaf], x);

        while leaf > 1 {
            leaf >>= 1;
            self.pull(leaf);
        }

        Ok(old)
    }

    /// Read-modify-write of leaf `i`.
    ///
    /// O(log n)
    pub fn update<F>(&mut self, i: usize, f: F) -> Result<()>
    where
        F: FnOnce(&M::Elem) -> M::Elem,
    {
        let x = f(self.get(i)?);
        self.set(i, x)?;
        Ok(())
    }

    /// Combines leaves `start..stop` in order.
    ///
    /// Empty ranges and ranges starting at or past `capacity()` give the identity; `stop` is
    /// clamped to `capacity()`.
    ///
    /// O(log n)
    pub fn query(&self, start: usize, stop: usize) -> Result<M::Elem> {
        if start > stop {
            trace!(start, stop, "invalid range");
            return Err(Error::InvalidRange { start, stop });
        }

        let n = self.capacity();
        let stop = stop.min(n);
        if start >= stop {
            return Ok(self.monoid.id());
        }

        Ok(self.fold_leaves(start + n, stop - 1 + n))
    }

    /// `query` over any `usize` range, e.g. `fold(..4)` or `fold(10..)`. An unbounded end
    /// reaches the last leaf, so an open range starting past `capacity()` is empty.
    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<M::Elem> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => start.max(self.capacity()),
        };
        self.query(start, stop)
    }

    /// Dual-boundary descent over the absolute, inclusive leaf range `[start, end]`,
    /// `n <= start <= end < 2n`.
    ///
    /// `lo`/`hi` are the nodes whose subtrees hold the left/right boundary, `l_cut` is the
    /// first leaf under `lo` and `r_cut` the last leaf under `hi`, and `cut_size` is the
    /// number of leaves under either. While `lo == hi` both boundaries are inside one
    /// subtree. Once they part, every subtree strictly between the two paths is folded in:
    /// right siblings of the left path are prepended to `left` (they are met right to left)
    /// and left siblings of the right path are appended to `right`. A side stops
    /// descending as soon as its boundary lines up with the edge of its subtree.
    fn fold_leaves(&self, start: usize, end: usize) -> M::Elem {
        let n = self.capacity();
        debug_assert!(n <= start && start <= end && end < 2 * n);

        let data = &self.data;

        let mut cut_size = n;
        let (mut lo, mut hi) = (1, 1);
        let (mut l_cut, mut r_cut) = (n, 2 * n - 1);

        // Common ancestor of both boundaries.
        while lo == hi {
            if start == l_cut && end == r_cut {
                return data[lo].clone();
            }

            cut_size >>= 1;
            let mid = l_cut + cut_size;
            lo <<= 1;
            hi = lo + 1;

            if start >= mid {
                lo += 1;
                l_cut = mid;
            }
            if end < mid {
                hi -= 1;
                r_cut = mid - 1;
            }
        }

        let mut left = self.monoid.id();
        let mut right = self.monoid.id();
        let (mut left_open, mut right_open) = (true, true);

        loop {
            debug_assert!(!left_open || l_cut == lo * cut_size);
            debug_assert!(!right_open || r_cut + 1 == (hi + 1) * cut_size);

            if left_open && start == l_cut {
                left = self.monoid.op(data[lo].clone(), left);
                left_open = false;
            }
            if right_open && end == r_cut {
                right = self.monoid.op(right, data[hi].clone());
                right_open = false;
            }
            if !(left_open || right_open) {
                break;
            }

            // Leaf level always lines up on both sides, so `cut_size` stays >= 1 here.
            cut_size >>= 1;

            if left_open {
                lo <<= 1;
                if start >= l_cut + cut_size {
                    lo += 1;
                    l_cut += cut_size;
                } else {
                    left = self.monoid.op(data[lo + 1].clone(), left);
                }
            }
            if right_open {
                hi = (hi << 1) + 1;
                if end < r_cut + 1 - cut_size {
                    hi -= 1;
                    r_cut -= cut_size;
                } else {
                    right = self.monoid.op(right, data[hi - 1].clone());
                }
            }
        }

        self.monoid.op(left, right)
    }

    /// Tree levels from the root down to the leaves.
    pub fn layers(&self) -> impl Iterator<Item = &[M::Elem]> + '_ {
        let n = self.capacity();
        std::iter::successors(Some(1usize), move |&w| Some(w << 1))
            .take_while(move |&w| w <= n)
            .map(move |w| &self.data[w..2 * w])
    }
}

impl<T, F> SegmentTree<FnMonoid<T, F>>
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    /// Builds a tree from a closure operator and its identity.
    pub fn with_op<Iter: IntoIterator<Item = T>>(
        values: Iter,
        op: F,
        identity: T,
    ) -> Result<Self, ConstructionError> {
        Self::new(FnMonoid::new(op, identity), values)
    }
}

impl<M: Monoid> Index<usize> for SegmentTree<M> {
    type Output = M::Elem;

    /// Panics if `i >= capacity()`.
    #[inline]
    fn index(&self, i: usize) -> &M::Elem {
        let n = self.capacity();
        assert!(i < n, "index {} out of range for capacity {}", i, n);
        &self.data[n + i]
    }
}

impl<M: Monoid> fmt::Display for SegmentTree<M>
where
    M::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, layer) in self.layers().enumerate() {
            if depth != 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}", layer)?;
        }
        Ok(())
    }
}
