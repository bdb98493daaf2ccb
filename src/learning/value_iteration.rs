//! Offline planning: value iteration computes a value table for every state
//! of an MDP once, at construction, and afterwards only answers queries.

use crate::learning::Mdp;
use std::{collections::HashMap, time::Instant};
use tracing::{debug, info};

#[derive(Debug)]
pub struct ValueIterationAgent<M: Mdp> {
    mdp: M,
    discount: f64,
    iterations: usize,
    values: HashMap<M::State, f64>,
}

impl<M: Mdp> ValueIterationAgent<M> {
    /// Runs `iterations` synchronous sweeps: every sweep reads only the
    /// values of the previous one. States without actions keep their value.
    pub fn new(mdp: M, discount: f64, iterations: usize) -> Self {
        let mut agent = Self {
            mdp,
            discount,
            iterations,
            values: HashMap::new(),
        };

        let start = Instant::now();
        let states = agent.mdp.states();
        for iteration in 0..iterations {
            let mut next_values = agent.values.clone();
            let mut largest_change: f64 = 0.;
            for state in &states {
                let best = agent
                    .mdp
                    .possible_actions(state)
                    .iter()
                    .map(|action| agent.q_value(state, action))
                    .reduce(f64::max);
                if let Some(value) = best {
                    largest_change = largest_change.max((value - agent.value(state)).abs());
                    next_values.insert(state.clone(), value);
                }
            }
            agent.values = next_values;
            debug!(iteration, largest_change, "finished sweep");
        }
        info!(
            iterations,
            states = states.len(),
            duration = start.elapsed().as_secs_f64(),
            "value iteration done"
        );

        agent
    }

    pub fn mdp(&self) -> &M {
        &self.mdp
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Zero for states never updated.
    pub fn value(&self, state: &M::State) -> f64 {
        self.values.get(state).copied().unwrap_or(0.)
    }

    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.mdp
            .transition_states_and_probs(state, action)
            .iter()
            .map(|(next_state, probability)| {
                probability
                    * (self.mdp.reward(state, action, next_state)
                        + self.discount * self.value(next_state))
            })
            .sum()
    }

    /// The greedy action. The first of several equally good actions wins.
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        let mut best: Option<(M::Action, f64)> = None;
        for action in self.mdp.possible_actions(state) {
            let q_value = self.q_value(state, &action);
            if best.as_ref().map_or(true, |&(_, value)| q_value > value) {
                best = Some((action, q_value));
            }
        }
        best.map(|(action, _)| action)
    }

    pub fn action(&self, state: &M::State) -> Option<M::Action> {
        self.policy(state)
    }
}
