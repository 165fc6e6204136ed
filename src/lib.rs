pub mod groups;

mod builder;
mod error;
mod segment_tree;

pub use builder::SegmentTreeBuilder;
pub use error::{ConstructionError, Error, Result};
pub use segment_tree::SegmentTree;
