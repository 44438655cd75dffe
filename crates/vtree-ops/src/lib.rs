pub mod ops_tree;
pub mod output;
