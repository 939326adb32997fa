use crate::collections::FxHashSet;
use crate::frontier::{Frontier, Queue, Stack};
use crate::problem::{SearchProblem, Successor};
use super::{plan::SearchTree, statistics::SearchStatistics, DEFAULT_PROGRESS_INTERVAL};

use std::time::Duration;


/// Depth-first graph search
/// Expands the most recently discovered state first. Returns the first plan found
/// along the current branch, with no guarantee of being short or cheap.
/// An empty plan means either the start is a goal or no goal is reachable.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    depth_first_search_with_statistics(problem, DEFAULT_PROGRESS_INTERVAL).0
}

#[tracing::instrument(skip_all)]
pub fn depth_first_search_with_statistics<P: SearchProblem>(
    problem: &P,
    progress_interval: Duration,
) -> (Vec<P::Action>, SearchStatistics) {
    let mut statistics = SearchStatistics::new("depth-first", progress_interval);
    let plan = graph_search(problem, Stack::new(), &mut statistics);
    (plan, statistics)
}


/// Breadth-first graph search
/// States are expanded in order of plan length, so the plan returned has the
/// fewest actions of any plan reaching a goal.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    breadth_first_search_with_statistics(problem, DEFAULT_PROGRESS_INTERVAL).0
}

#[tracing::instrument(skip_all)]
pub fn breadth_first_search_with_statistics<P: SearchProblem>(
    problem: &P,
    progress_interval: Duration,
) -> (Vec<P::Action>, SearchStatistics) {
    let mut statistics = SearchStatistics::new("breadth-first", progress_interval);
    let plan = graph_search(problem, Queue::new(), &mut statistics);
    (plan, statistics)
}


/// Traversal shared by depth-first and breadth-first search, the frontier decides the order
/// A state is marked visited when it is popped, not when it is pushed. The same state
/// may sit on the frontier several times, later copies are dropped on pop.
fn graph_search<P, F>(problem: &P, mut frontier: F, statistics: &mut SearchStatistics) -> Vec<P::Action>
where
    P: SearchProblem,
    F: Frontier<(P::State, usize)>, // (state, index of its plan in the search tree)
{
    let mut visited: FxHashSet<P::State> = FxHashSet::default();
    let mut tree = SearchTree::new();

    frontier.push((problem.start_state(), tree.root()));

    while let Ok((state, plan_index)) = frontier.pop() {

        // Already expanded through another entry
        if visited.contains(&state) {
            statistics.increment_pruned();
            continue;
        }
        visited.insert(state.clone());

        if problem.is_goal_state(&state) {
            let plan = tree.plan(plan_index);
            statistics.finish(Some(plan.len()));
            return plan;
        }

        statistics.increment_expanded();
        for Successor { state: next, action, .. } in problem.successors(&state) {
            if !visited.contains(&next) {
                let next_index = tree.extend(plan_index, action);
                frontier.push((next, next_index));
                statistics.increment_generated();
            }
        }
        statistics.observe_frontier(frontier.len());
    }

    statistics.finish(None);
    Vec::new()
}
