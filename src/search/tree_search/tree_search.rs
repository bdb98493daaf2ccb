//! Depth limited game tree search over a multi-agent turn order. Minimax,
//! alpha-beta and expectimax share one recursive walk; the role of the agent
//! to move decides how child values are combined.
//!
//! Agents move in index order. When the turn wraps from the last agent back
//! to agent 0 the depth grows by one, so one unit of depth is a full round of
//! moves. A node is a leaf when the game is over, the depth limit is reached
//! or the agent to move has no legal action; leaves get the static
//! evaluation.

use crate::search::tree_search::{AgentRole, GameState};
use rand::{rngs::SmallRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TreeSearchKind {
    #[default]
    #[clap(help = "Every other agent minimises.")]
    Minimax,
    #[clap(help = "Minimax, skipping siblings that cannot change the result.")]
    AlphaBeta,
    #[clap(help = "Every other agent picks uniformly at random.")]
    Expectimax,
}

/// The value of a node and the action chosen there. `action` is `None` at
/// leaves. At chance nodes it is a uniformly sampled legal action, reported
/// for information only.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeValue<A> {
    pub value: f64,
    pub action: Option<A>,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    alpha: f64,
    beta: f64,
}

impl Window {
    fn full() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

pub(crate) struct TreeWalk<'a, S> {
    kind: TreeSearchKind,
    depth_limit: usize,
    num_agents: usize,
    evaluation: &'a dyn Fn(&S) -> f64,
    rng: &'a mut SmallRng,
    generated_nodes: usize,
}

impl<'a, S: GameState> TreeWalk<'a, S> {
    pub(crate) fn new(
        kind: TreeSearchKind,
        depth_limit: usize,
        num_agents: usize,
        evaluation: &'a dyn Fn(&S) -> f64,
        rng: &'a mut SmallRng,
    ) -> Self {
        Self {
            kind,
            depth_limit,
            num_agents,
            evaluation,
            rng,
            generated_nodes: 0,
        }
    }

    pub(crate) fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub(crate) fn search(&mut self, root: &S) -> TreeValue<S::Action> {
        self.value(root, 0, 0, Window::full())
    }

    fn leaf(&self, state: &S) -> TreeValue<S::Action> {
        TreeValue {
            value: (self.evaluation)(state),
            action: None,
        }
    }

    fn value(
        &mut self,
        state: &S,
        agent: usize,
        depth: usize,
        mut window: Window,
    ) -> TreeValue<S::Action> {
        if state.is_over() || depth == self.depth_limit {
            return self.leaf(state);
        }
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            return self.leaf(state);
        }

        let (next_agent, next_depth) = if agent + 1 >= self.num_agents {
            (0, depth + 1)
        } else {
            (agent + 1, depth)
        };

        let role = AgentRole::of(agent, self.kind);
        if role == AgentRole::Chance {
            let mut total = 0.;
            for action in &actions {
                let successor = state.generate_successor(agent, action);
                self.generated_nodes += 1;
                total += self.value(&successor, next_agent, next_depth, window).value;
            }
            return TreeValue {
                value: total / actions.len() as f64,
                action: actions.choose(&mut *self.rng).cloned(),
            };
        }

        let maximising = role == AgentRole::Maximizer;
        let mut best: Option<(f64, S::Action)> = None;
        for action in actions {
            let successor = state.generate_successor(agent, &action);
            self.generated_nodes += 1;
            let value = self.value(&successor, next_agent, next_depth, window).value;

            // the first action reaching the running best keeps it
            let improves = match &best {
                None => true,
                Some((best_value, _)) if maximising => value > *best_value,
                Some((best_value, _)) => value < *best_value,
            };
            if improves {
                best = Some((value, action));
            }

            if self.kind == TreeSearchKind::AlphaBeta {
                if let Some((best_value, _)) = &best {
                    if maximising {
                        window.alpha = window.alpha.max(*best_value);
                    } else {
                        window.beta = window.beta.min(*best_value);
                    }
                }
                if window.alpha >= window.beta {
                    break;
                }
            }
        }

        match best {
            Some((value, action)) => TreeValue {
                value,
                action: Some(action),
            },
            None => self.leaf(state),
        }
    }
}
