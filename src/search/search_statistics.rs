use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of unique nodes generated, i.e. inserted into the frontier
    generated_nodes: i64,
    /// Number of successors produced by the problem, including those skipped
    /// because their state was already visited
    generated_successors: i64,
    /// Number of heuristic evaluations
    evaluated_nodes: i64,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        debug!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            generated_successors: 0,
            evaluated_nodes: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        self.evaluated_nodes += 1;
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            self.log_if_needed();
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_generated_successors(&mut self, num_successors: usize) {
        self.generated_successors += num_successors as i64;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn evaluated_nodes(&self) -> i64 {
        self.evaluated_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            generated_successors = self.generated_successors,
            evaluated_nodes = self.evaluated_nodes,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        debug!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            generated_successors = self.generated_successors,
            evaluated_nodes = self.evaluated_nodes,
            search_duration = self.search_start_time.elapsed().as_secs_f64(),
            "finalising search"
        );
    }
}
