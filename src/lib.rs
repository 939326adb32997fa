//! Generic graph search over an abstract problem interface.
//!
//! Depth-first, breadth-first, uniform-cost and A* search, all written against
//! the [`SearchProblem`] trait. Every entry point returns the plan as a list of
//! actions; an empty list means no goal was reachable (or the start is a goal).

pub mod config;
pub mod errors;
pub mod frontier;
pub mod problem;
pub mod search_algos;

mod collections;

#[cfg(test)]
mod test_utils;

pub use config::{Algorithm, SearchConfig, Solution};
pub use errors::SearchError;
pub use problem::{null_heuristic, SearchProblem, Successor};
pub use search_algos::{
    a_star_search, astar, bfs, breadth_first_search, depth_first_search, dfs, ucs,
    uniform_cost_search,
};
