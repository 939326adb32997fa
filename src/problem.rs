use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// One edge out of a state: the state reached, the action taken and the step cost
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<S, A, C> {
    pub state: S,
    pub action: A,
    pub cost: C, // non-negative, not checked
}

impl<S, A, C> Successor<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self { state, action, cost }
    }
}


/// The contract every search problem implements
/// The search functions only read from the problem, so it may be queried any number of times
/// for the same state and must answer the same way each time.
///
/// Real valued costs can use `ordered_float::OrderedFloat<f64>`, integers work as is.
pub trait SearchProblem {
    type State: Eq + Hash + Clone + Debug;
    type Action: Clone + Debug;
    type Cost: Zero + Ord + Copy + Debug;

    /// State the search starts from
    fn start_state(&self) -> Self::State;

    /// True if and only if the state satisfies the goal
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Successors of a state in a fixed order
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action, Self::Cost>>;

    /// Total cost of a sequence of actions from the start state
    /// Returns None if the sequence contains an illegal move.
    /// Not used by the search functions themselves.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Self::Cost>;
}


/// Trivial heuristic, estimates zero remaining cost for every state
/// A* with this heuristic expands states in the same order as uniform cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> P::Cost {
    Zero::zero()
}
