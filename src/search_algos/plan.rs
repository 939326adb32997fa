use crate::errors::SearchError;
use crate::problem::SearchProblem;

use num_traits::Zero;


/// Sentinel parent index of the root node
const ROOT: usize = usize::MAX;


/// Append-only tree of every action pushed during a search
/// Frontier entries hold an index into the tree instead of a copy of their plan,
/// a node is never modified once added so entries sharing a prefix can't interfere.
#[derive(Debug)]
pub(crate) struct SearchTree<A> {
    nodes: Vec<(usize, A)>, // (parent_index, action taken from the parent)
}

impl<A: Clone> SearchTree<A> {

    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Index standing for the empty plan
    pub(crate) fn root(&self) -> usize {
        ROOT
    }

    /// Extend the plan ending at `parent` by one action, returns the new plan's index
    pub(crate) fn extend(&mut self, parent: usize, action: A) -> usize {
        self.nodes.push((parent, action));
        self.nodes.len() - 1
    }

    /// Construct the plan ending at `index`
    /// Returns the ordered actions from the start state
    pub(crate) fn plan(&self, index: usize) -> Vec<A> {
        let mut plan = Vec::new();
        let mut current_index = index;

        // Trace back to the root
        while current_index != ROOT {
            let (parent_index, action) = &self.nodes[current_index];
            plan.push(action.clone());
            current_index = *parent_index;
        }

        // The plan is in reverse order, so reverse it
        plan.reverse();
        plan
    }
}


/// Replay a plan from the start state through the successor function
/// Returns the state reached, or None if some action is not offered as a successor
pub fn replay_plan<P>(problem: &P, actions: &[P::Action]) -> Option<P::State>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    replay(problem, actions).ok().map(|(state, _)| state)
}


/// Check that a plan reaches a goal, returning its total step cost
pub fn validate_plan<P>(problem: &P, actions: &[P::Action]) -> Result<P::Cost, SearchError>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let (state, cost) = replay(problem, actions)?;
    if !problem.is_goal_state(&state) {
        return Err(SearchError::GoalNotReached);
    }
    Ok(cost)
}


fn replay<P>(problem: &P, actions: &[P::Action]) -> Result<(P::State, P::Cost), SearchError>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut state = problem.start_state();
    let mut cost: P::Cost = Zero::zero();

    for (step, action) in actions.iter().enumerate() {
        let successor = problem.successors(&state)
            .into_iter()
            .find(|s| &s.action == action)
            .ok_or(SearchError::InapplicableAction { step })?;
        cost = cost + successor.cost;
        state = successor.state;
    }
    Ok((state, cost))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{GraphProblem, plan_through};

    #[test]
    fn test_tree_plan_reconstruction() {
        let mut tree = SearchTree::new();
        let root = tree.root();
        let b = tree.extend(root, "A->B");
        let c = tree.extend(root, "A->C");
        let d = tree.extend(c, "C->D");
        let e = tree.extend(b, "B->E");

        assert_eq!(tree.plan(root), Vec::<&str>::new());
        assert_eq!(tree.plan(d), vec!["A->C", "C->D"]);
        assert_eq!(tree.plan(e), vec!["A->B", "B->E"]);
        // branching from c did not disturb b
        assert_eq!(tree.plan(b), vec!["A->B"]);
    }

    #[test]
    fn test_validate_plan() {
        let problem = GraphProblem::diamond();

        assert_eq!(validate_plan(&problem, &plan_through(&["A", "B", "D"])), Ok(2));
        assert_eq!(validate_plan(&problem, &plan_through(&["A", "C", "D"])), Ok(6));
        assert_eq!(
            validate_plan(&problem, &plan_through(&["A", "B"])),
            Err(SearchError::GoalNotReached)
        );
        assert_eq!(
            validate_plan(&problem, &plan_through(&["A", "B", "C"])),
            Err(SearchError::InapplicableAction { step: 1 })
        );
    }

    #[test]
    fn test_replay_plan() {
        let problem = GraphProblem::diamond();

        assert_eq!(replay_plan(&problem, &[]), Some("A".to_string()));
        assert_eq!(replay_plan(&problem, &plan_through(&["A", "C"])), Some("C".to_string()));
        assert_eq!(replay_plan(&problem, &plan_through(&["A", "D"])), None);
    }
}
