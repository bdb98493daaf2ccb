use crate::learning::{Mdp, QFunction, QLearningAgent};
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};
use tracing::{debug, warn};

/// Play one episode of `mdp` with `agent`, sampling transitions with `rng`.
/// The episode ends in a terminal state, when the agent has no action, or
/// after `max_steps` steps. Returns the discounted sum of rewards.
pub fn run_episode<M, Q, R>(
    mdp: &M,
    agent: &mut QLearningAgent<M::State, M::Action, Q>,
    rng: &mut R,
    max_steps: usize,
) -> f64
where
    M: Mdp,
    Q: QFunction<M::State, M::Action>,
    R: Rng + ?Sized,
{
    let discount = agent.parameters().discount;
    let mut state = mdp.start_state();
    let mut returns = 0.;
    let mut total_discount = 1.;

    agent.start_episode();
    for step in 0..max_steps {
        if mdp.is_terminal(&state) {
            break;
        }
        let Some(action) = agent.action(&state) else {
            break;
        };
        let transitions = mdp.transition_states_and_probs(&state, &action);
        let probabilities = transitions.iter().map(|(_, probability)| *probability);
        let sampler = match WeightedIndex::new(probabilities) {
            Ok(sampler) => sampler,
            Err(error) => {
                warn!(?state, ?action, %error, "cannot sample a successor");
                break;
            }
        };
        let next_state = transitions[sampler.sample(&mut *rng)].0.clone();
        let reward = mdp.reward(&state, &action, &next_state);
        debug!(step, ?state, ?action, ?next_state, reward, "took a step");

        agent.observe_transition(&state, &action, &next_state, reward);
        returns += reward * total_discount;
        total_discount *= discount;
        state = next_state;
    }
    agent.stop_episode();

    returns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::{GridAction, GridWorld, LearningParameters, QTable};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn learns_to_walk_to_the_exit() {
        let world = GridWorld::from_text("S 10").unwrap().with_noise(0.);
        let parameters = LearningParameters::default()
            .with_alpha(0.5)
            .with_epsilon(0.5)
            .with_discount(0.9)
            .with_num_training(200);
        let mut agent = QLearningAgent::for_mdp(&world, parameters, QTable::new()).with_seed(3);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..200 {
            run_episode(&world, &mut agent, &mut rng, 100);
        }
        assert!(!agent.is_in_training());
        assert_eq!(agent.policy(&world.start_state()), Some(GridAction::East));

        // with learning and exploration off the episode is the greedy walk
        let returns = run_episode(&world, &mut agent, &mut rng, 100);
        assert!((returns - 9.).abs() < 1e-9);
    }

    #[test]
    fn step_limit_ends_the_episode() {
        let world = GridWorld::from_text("S . . . . . . 10").unwrap();
        let parameters = LearningParameters::default().with_epsilon(1.);
        let mut agent = QLearningAgent::for_mdp(&world, parameters, QTable::new()).with_seed(0);
        let mut rng = SmallRng::seed_from_u64(0);
        let returns = run_episode(&world, &mut agent, &mut rng, 3);
        // three random steps cannot reach the exit
        assert_eq!(returns, 0.);
        assert_eq!(agent.episodes_so_far(), 1);
    }
}
