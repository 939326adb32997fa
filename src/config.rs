use crate::errors::SearchError;
use crate::problem::{null_heuristic, SearchProblem};
use crate::search_algos::{
    a_star_search_with_statistics, breadth_first_search_with_statistics,
    depth_first_search_with_statistics, uniform_cost_search_with_statistics, SearchStatistics,
    DEFAULT_PROGRESS_INTERVAL,
};

use std::time::Duration;
use strum_macros::{Display, EnumIter, EnumString};


/// The available search algorithms
/// Parsed from their short names ("dfs", "bfs", "ucs", "astar") or long names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    #[strum(to_string = "dfs", serialize = "depth-first")]
    DepthFirst,
    #[strum(to_string = "bfs", serialize = "breadth-first")]
    BreadthFirst,
    #[strum(to_string = "ucs", serialize = "uniform-cost")]
    UniformCost,
    #[strum(to_string = "astar", serialize = "a-star")]
    AStar,
}

impl Algorithm {

    /// Parse an algorithm name, surrounding whitespace is ignored
    pub fn from_name(name: &str) -> Result<Self, SearchError> {
        name.trim()
            .parse()
            .map_err(|_| SearchError::UnknownAlgorithm(name.to_string()))
    }

    /// True if the algorithm makes use of a heuristic
    pub fn is_informed(&self) -> bool {
        matches!(self, Algorithm::AStar)
    }

    /// True if the returned plan is cheapest given non-negative costs
    /// (and an admissible heuristic for A*)
    pub fn is_cost_optimal(&self) -> bool {
        matches!(self, Algorithm::UniformCost | Algorithm::AStar)
    }
}


/// Result of a configured search
#[derive(Debug, Clone)]
pub struct Solution<A> {
    pub actions: Vec<A>,
    pub statistics: SearchStatistics,
}

impl<A> Solution<A> {

    /// Tells an empty plan at the goal apart from an exhausted frontier
    pub fn reached_goal(&self) -> bool {
        self.statistics.plan_length.is_some()
    }
}


/// Which algorithm to run and how often it reports progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub progress_interval: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SearchConfig {

    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm, ..Self::default() }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_progress_interval(mut self, progress_interval: Duration) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Run the configured algorithm
    /// The heuristic is only consulted by A*
    pub fn solve<P, H>(&self, problem: &P, heuristic: H) -> Solution<P::Action>
    where
        P: SearchProblem,
        H: Fn(&P::State, &P) -> P::Cost,
    {
        let interval = self.progress_interval;
        let (actions, statistics) = match self.algorithm {
            Algorithm::DepthFirst => depth_first_search_with_statistics(problem, interval),
            Algorithm::BreadthFirst => breadth_first_search_with_statistics(problem, interval),
            Algorithm::UniformCost => uniform_cost_search_with_statistics(problem, interval),
            Algorithm::AStar => a_star_search_with_statistics(problem, heuristic, interval),
        };
        Solution { actions, statistics }
    }

    /// Run the configured algorithm, A* falls back to the null heuristic
    pub fn solve_with_null_heuristic<P: SearchProblem>(&self, problem: &P) -> Solution<P::Action> {
        self.solve(problem, null_heuristic::<P>)
    }
}
