use std::{collections::{HashMap, HashSet}, fmt::Debug};
use num_traits::Zero;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::problem::{SearchProblem, Successor};


/// Search problem over an explicit adjacency map
/// Nodes are strings, actions are "FROM->TO" labels
#[derive(Clone, Debug)]
pub struct GraphProblem<C = u32> {
    pub graph: HashMap<String, Vec<(String, C)>>,
    pub start: String,
    pub goals: HashSet<String>,
}

impl<C> GraphProblem<C>
where
    C: Zero + Ord + Copy + Debug,
{
    pub fn new(start: &str, goals: &[&str]) -> Self {
        Self {
            graph: HashMap::new(),
            start: start.to_string(),
            goals: goals.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Add a directed edge, edges keep their insertion order
    pub fn edge(mut self, from: &str, to: &str, cost: C) -> Self {
        self.graph.entry(from.to_string()).or_default().push((to.to_string(), cost));
        self
    }

    /// Follow the plan from the start, returning the final node and the summed cost
    pub fn walk(&self, actions: &[String]) -> Option<(String, C)> {
        let mut node = self.start.clone();
        let mut total = C::zero();
        for action in actions {
            let (next, cost) = self.graph.get(&node)?
                .iter()
                .find(|(to, _)| &label(&node, to) == action)?
                .clone();
            total = total + cost;
            node = next;
        }
        Some((node, total))
    }
}

impl GraphProblem<u32> {
    /// A -> B (1), A -> C (5), B -> D (1), C -> D (1), goal D
    pub fn diamond() -> Self {
        GraphProblem::new("A", &["D"])
            .edge("A", "B", 1)
            .edge("A", "C", 5)
            .edge("B", "D", 1)
            .edge("C", "D", 1)
    }

    /// Random directed graph on `nodes` nodes named "0".."n-1", start "0", goal the last node
    /// Edge costs are in 0..=max_cost
    pub fn random(seed: u64, nodes: usize, edge_probability: f64, max_cost: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let goal = (nodes - 1).to_string();
        let mut problem = GraphProblem::new("0", &[goal.as_str()]);
        for from in 0..nodes {
            for to in 0..nodes {
                if from != to && rng.random_bool(edge_probability) {
                    let cost = rng.random_range(0..=max_cost);
                    problem = problem.edge(&from.to_string(), &to.to_string(), cost);
                }
            }
        }
        problem
    }

    /// Cheapest cost from start to any goal, Bellman-Ford over the edge list
    pub fn min_cost(&self) -> Option<u32> {
        let mut dist: HashMap<&str, u32> = HashMap::from([(self.start.as_str(), 0)]);
        let rounds = self.graph.len() + 1;
        for _ in 0..rounds {
            let mut changed = false;
            for (from, edges) in &self.graph {
                let Some(&d) = dist.get(from.as_str()) else { continue };
                for (to, cost) in edges {
                    let candidate = d + cost;
                    if dist.get(to.as_str()).is_none_or(|&old| candidate < old) {
                        dist.insert(to.as_str(), candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        self.goals.iter().filter_map(|g| dist.get(g.as_str()).copied()).min()
    }

    /// Fewest edges from start to any goal
    pub fn min_edges(&self) -> Option<usize> {
        let mut depth: HashMap<&str, usize> = HashMap::from([(self.start.as_str(), 0)]);
        let mut layer = vec![self.start.as_str()];
        while !layer.is_empty() {
            if let Some(goal) = layer.iter().find(|n| self.goals.contains(**n)) {
                return depth.get(goal).copied();
            }
            let mut next = Vec::new();
            for node in layer {
                let d = depth[node];
                for (to, _) in self.graph.get(node).map(Vec::as_slice).unwrap_or(&[]) {
                    if !depth.contains_key(to.as_str()) {
                        depth.insert(to.as_str(), d + 1);
                        next.push(to.as_str());
                    }
                }
            }
            layer = next;
        }
        None
    }
}

impl<C> SearchProblem for GraphProblem<C>
where
    C: Zero + Ord + Copy + Debug,
{
    type State = String;
    type Action = String;
    type Cost = C;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, String, C>> {
        self.graph.get(state)
            .map(|edges| edges.iter()
                .map(|(to, cost)| Successor::new(to.clone(), label(state, to), *cost))
                .collect())
            .unwrap_or_default()
    }

    fn cost_of_actions(&self, actions: &[String]) -> Option<C> {
        self.walk(actions).map(|(_, cost)| cost)
    }
}


pub fn label(from: &str, to: &str) -> String {
    format!("{from}->{to}")
}

/// Build a plan from a list of node names
pub fn plan_through(nodes: &[&str]) -> Vec<String> {
    nodes.windows(2).map(|pair| label(pair[0], pair[1])).collect()
}
