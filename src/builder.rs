use crate::error::ConstructionError;
use crate::groups::FnMonoid;
use crate::segment_tree::SegmentTree;

/// Assembles a closure-backed `SegmentTree` from parts supplied one at a time.
///
/// Both the operator and its identity are required; `build` reports whichever is missing
/// instead of guessing a padding value.
#[derive(Clone, Debug)]
pub struct SegmentTreeBuilder<T, F> {
    op: Option<F>,
    identity: Option<T>,
}

impl<T, F> Default for SegmentTreeBuilder<T, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> SegmentTreeBuilder<T, F> {
    pub const fn new() -> Self {
        Self {
            op: None,
            identity: None,
        }
    }

    pub fn op(mut self, op: F) -> Self {
        self.op = Some(op);
        self
    }

    pub fn identity(mut self, identity: T) -> Self {
        self.identity = Some(identity);
        self
    }
}

impl<T, F> SegmentTreeBuilder<T, F>
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    /// O(n)
    pub fn build<Iter: IntoIterator<Item = T>>(
        self,
        values: Iter,
    ) -> Result<SegmentTree<FnMonoid<T, F>>, ConstructionError> {
        let op = self.op.ok_or(ConstructionError::MissingOperator)?;
        let identity = self.identity.ok_or(ConstructionError::MissingIdentity)?;
        SegmentTree::new(FnMonoid::new(op, identity), values)
    }
}
