pub mod a_star;
pub mod plan;
pub mod statistics;
pub mod uniform_cost;
pub mod uninformed;

pub use a_star::{a_star_search, a_star_search_with_statistics};
pub use plan::{replay_plan, validate_plan};
pub use statistics::{SearchStatistics, DEFAULT_PROGRESS_INTERVAL};
pub use uniform_cost::{uniform_cost_search, uniform_cost_search_with_statistics};
pub use uninformed::{
    breadth_first_search, breadth_first_search_with_statistics, depth_first_search,
    depth_first_search_with_statistics,
};

use crate::problem::{null_heuristic, SearchProblem};


/// Short for [`depth_first_search`]
pub fn dfs<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    depth_first_search(problem)
}

/// Short for [`breadth_first_search`]
pub fn bfs<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    breadth_first_search(problem)
}

/// Short for [`uniform_cost_search`]
pub fn ucs<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    uniform_cost_search(problem)
}

/// Short for [`a_star_search`] with the [`null_heuristic`]
pub fn astar<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    a_star_search(problem, null_heuristic::<P>)
}
