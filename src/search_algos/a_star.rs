use crate::collections::FxIndexMap;
use crate::frontier::PriorityQueue;
use crate::problem::{SearchProblem, Successor};
use super::{plan::SearchTree, statistics::SearchStatistics, DEFAULT_PROGRESS_INTERVAL};

use std::time::Duration;
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Node on A* frontier
#[derive(Debug)]
struct Node<S, C> {
    state: S,
    plan_index: usize, // index of the plan in the search tree
    cost: C, // Cost to reach this state along the plan
}


/// A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Expands states in order of accumulated cost plus `heuristic(state, problem)`.
///
/// Instead of a visited set the search keeps the best cost found so far for every state.
/// A successor is queued whenever its new cost is strictly lower than the best known,
/// so a state already expanded is expanded again once a cheaper path to it turns up.
/// This keeps the result cheapest under an admissible heuristic even when the heuristic
/// is not consistent.
///
/// The first goal popped is returned as is. The plan is only guaranteed to be cheapest
/// if the heuristic never overestimates the remaining cost, an inadmissible heuristic
/// is accepted and may produce a more expensive plan.
///
/// Pass [`null_heuristic`](crate::problem::null_heuristic) to search by cost alone.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> P::Cost,
{
    a_star_search_with_statistics(problem, heuristic, DEFAULT_PROGRESS_INTERVAL).0
}

#[tracing::instrument(skip_all)]
pub fn a_star_search_with_statistics<P, H>(
    problem: &P,
    heuristic: H,
    progress_interval: Duration,
) -> (Vec<P::Action>, SearchStatistics)
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> P::Cost,
{
    let mut statistics = SearchStatistics::new("a-star", progress_interval);

    // Open list, sorted by f = cost + h(state), ties in insertion order
    let mut open_list: PriorityQueue<Node<P::State, P::Cost>, P::Cost> = PriorityQueue::new();

    // Lowest cost each state has been queued with, only ever lowered
    let mut best_cost: FxIndexMap<P::State, P::Cost> = FxIndexMap::default();

    // Number of times each state has been expanded, indexed like best_cost
    let mut expansions: Vec<u32> = Vec::new();

    let mut tree = SearchTree::new();

    let start = problem.start_state();
    let start_priority = heuristic(&start, problem);
    best_cost.insert(start.clone(), Zero::zero());
    expansions.push(0);
    open_list.push(
        Node { state: start, plan_index: tree.root(), cost: Zero::zero() },
        start_priority,
    );

    while let Ok(Node { state, plan_index, cost }) = open_list.pop() {

        let Some((index, _, &best)) = best_cost.get_full(&state) else {
            continue; // every queued state has a best cost entry
        };

        // A cheaper entry for this state has been queued since, this one is stale
        if cost > best {
            statistics.increment_pruned();
            continue;
        }

        // Check if we've reached the goal
        if problem.is_goal_state(&state) {
            let plan = tree.plan(plan_index);
            tracing::debug!(cost = ?cost, "goal popped");
            statistics.finish(Some(plan.len()));
            return (plan, statistics);
        }

        if expansions[index] > 0 {
            tracing::trace!(state = ?state, cost = ?cost, "re-expanding state on a cheaper path");
            statistics.increment_reopened();
        }
        expansions[index] += 1;
        statistics.increment_expanded();

        // loop over successors
        for Successor { state: next, action, cost: step_cost } in problem.successors(&state) {

            // new cost to reach this state = step cost + cost so far
            let new_cost = cost + step_cost;

            match best_cost.entry(next.clone()) {
                Vacant(e) => {
                    // This is the first time we're seeing this state
                    e.insert(new_cost);
                    expansions.push(0);
                }
                Occupied(mut e) => {
                    if *e.get() > new_cost {
                        // We've found a better path to this state
                        e.insert(new_cost);
                    } else {
                        // The existing path is at least as good, do nothing
                        continue;
                    }
                }
            }

            let priority = new_cost + heuristic(&next, problem);
            let next_index = tree.extend(plan_index, action);
            open_list.push(Node { state: next, plan_index: next_index, cost: new_cost }, priority);
            statistics.increment_generated();
        }
        statistics.observe_frontier(open_list.len());
    }

    statistics.finish(None);
    (Vec::new(), statistics)
}
