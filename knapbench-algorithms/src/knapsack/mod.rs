pub mod backtracking;
pub mod branch_and_bound;
pub mod dynamic;
