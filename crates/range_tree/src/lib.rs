mod policy;
mod segment_tree;

pub use policy::{
    AddToMin, AddToSum, AssignToMin, AssignToSum, Combiner, MinCombiner, SumCombiner, Updater,
};
pub use segment_tree::LazySegmentTree;
