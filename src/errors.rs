use thiserror::Error;


/// Errors raised by the frontier structures and plan validation
/// An unreachable goal is not an error - the search functions return an empty plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("pop from an empty frontier")]
    EmptyFrontier, // Frontier misuse, never reached by the search functions
    #[error("action {step} of the plan is not applicable")]
    InapplicableAction { step: usize }, // Plan replay hit an action with no matching successor
    #[error("plan does not end in a goal state")]
    GoalNotReached,
    #[error("unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}

