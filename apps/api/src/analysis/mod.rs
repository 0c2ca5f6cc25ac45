//! Resume analysis: the heuristic scorer, its constant tables, and the
//! upload handler that drives it.

pub mod handlers;
pub mod scorer;
pub mod tables;
