use crate::collections::FxHashSet;
use crate::frontier::PriorityQueue;
use crate::problem::{SearchProblem, Successor};
use super::{plan::SearchTree, statistics::SearchStatistics, DEFAULT_PROGRESS_INTERVAL};

use std::time::Duration;
use num_traits::Zero;


/// Frontier entry for cost-ordered search
#[derive(Debug)]
struct Node<S, C> {
    state: S,
    plan_index: usize, // index of the plan in the search tree
    cost: C, // Cost to reach this state along the plan
}


/// Uniform cost search
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Expands states in order of accumulated cost. With non-negative step costs the first
/// goal popped is reached by a cheapest plan. Equal costs are expanded in the order they
/// were generated.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    uniform_cost_search_with_statistics(problem, DEFAULT_PROGRESS_INTERVAL).0
}

#[tracing::instrument(skip_all)]
pub fn uniform_cost_search_with_statistics<P: SearchProblem>(
    problem: &P,
    progress_interval: Duration,
) -> (Vec<P::Action>, SearchStatistics) {
    let mut statistics = SearchStatistics::new("uniform-cost", progress_interval);

    // Nodes to visit, smallest accumulated cost first
    let mut frontier: PriorityQueue<Node<P::State, P::Cost>, P::Cost> = PriorityQueue::new();

    // States whose successors have been generated, a state enters once when first popped
    let mut visited: FxHashSet<P::State> = FxHashSet::default();
    let mut tree = SearchTree::new();

    let start = Node {
        state: problem.start_state(),
        plan_index: tree.root(),
        cost: Zero::zero(),
    };
    frontier.push(start, Zero::zero());

    while let Ok(Node { state, plan_index, cost }) = frontier.pop() {

        // A cheaper entry for this state was already expanded
        if visited.contains(&state) {
            statistics.increment_pruned();
            continue;
        }
        visited.insert(state.clone());

        if problem.is_goal_state(&state) {
            let plan = tree.plan(plan_index);
            tracing::debug!(cost = ?cost, "cheapest goal popped");
            statistics.finish(Some(plan.len()));
            return (plan, statistics);
        }

        statistics.increment_expanded();
        for Successor { state: next, action, cost: step_cost } in problem.successors(&state) {
            if visited.contains(&next) {
                continue;
            }
            let new_cost = cost + step_cost;
            let next_index = tree.extend(plan_index, action);
            frontier.push(Node { state: next, plan_index: next_index, cost: new_cost }, new_cost);
            statistics.increment_generated();
        }
        statistics.observe_frontier(frontier.len());
    }

    statistics.finish(None);
    (Vec::new(), statistics)
}
