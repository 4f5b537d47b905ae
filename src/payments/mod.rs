pub mod split;

pub use split::{allocate, SplitDistribution};
