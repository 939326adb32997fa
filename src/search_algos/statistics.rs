use std::time::{Duration, Instant};
use tracing::{debug, info};


/// How often a running search reports progress by default
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(10);


/// Counters collected while a search runs
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of states whose successors were generated
    pub expanded_states: usize,
    /// Number of successor entries pushed onto the frontier
    pub generated_states: usize,
    /// Number of states expanded again after a cheaper path was found (A* only)
    pub reopened_states: usize,
    /// Number of stale frontier entries dropped on pop
    pub pruned_entries: usize,
    /// Largest frontier size seen
    pub max_frontier: usize,
    /// Length of the returned plan, None until the search finishes with a goal
    pub plan_length: Option<usize>,
    start_time: Instant,
    last_log_time: Instant,
    progress_interval: Duration,
    elapsed: Option<Duration>,
}

impl SearchStatistics {
    pub fn new(algorithm: &str, progress_interval: Duration) -> Self {
        debug!(algorithm, "starting search");
        let now = Instant::now();
        Self {
            expanded_states: 0,
            generated_states: 0,
            reopened_states: 0,
            pruned_entries: 0,
            max_frontier: 0,
            plan_length: None,
            start_time: now,
            last_log_time: now,
            progress_interval,
            elapsed: None,
        }
    }

    pub fn increment_expanded(&mut self) {
        self.expanded_states += 1;
        self.log_if_needed();
    }

    pub fn increment_generated(&mut self) {
        self.generated_states += 1;
    }

    pub fn increment_reopened(&mut self) {
        self.reopened_states += 1;
    }

    pub fn increment_pruned(&mut self) {
        self.pruned_entries += 1;
    }

    pub fn observe_frontier(&mut self, size: usize) {
        self.max_frontier = self.max_frontier.max(size);
    }

    /// Wall time of the search, or time so far if it is still running
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Record the outcome and log the final counters
    pub fn finish(&mut self, plan_length: Option<usize>) {
        self.elapsed = Some(self.start_time.elapsed());
        self.plan_length = plan_length;
        match plan_length {
            Some(len) => debug!(plan_length = len, "goal found"),
            None => debug!("frontier exhausted without reaching a goal"),
        }
        self.log();
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() >= self.progress_interval {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_states = self.expanded_states,
            generated_states = self.generated_states,
            reopened_states = self.reopened_states,
            pruned_entries = self.pruned_entries,
            max_frontier = self.max_frontier,
            elapsed = ?self.elapsed(),
        );
    }
}
