//! Algorithms operating on any [`FifoQueue`](crate::FifoQueue).

mod merge;

pub use merge::{merge, merge_by, merged_by};
