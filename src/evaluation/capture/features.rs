use crate::evaluation::{capture::CaptureGameState, Feature, FeatureVector};
use crate::search::grid::{Direction, Position};

/// The board as seen by one agent after it has made its move. All distances
/// are maze distances from the agent's new position; unreachable or hidden
/// targets are ignored.
pub(super) struct Outlook<'a, S> {
    successor: &'a S,
    index: usize,
    position: Position,
}

impl<'a, S: CaptureGameState> Outlook<'a, S> {
    /// `None` if the agent cannot see itself, which a well-behaved host never
    /// allows.
    pub fn new(successor: &'a S, index: usize) -> Option<Self> {
        let position = successor.agent_position(index)?;
        Some(Self {
            successor,
            index,
            position,
        })
    }

    pub fn is_pacman(&self) -> bool {
        self.successor.is_pacman(self.index)
    }

    fn closest(&self, targets: impl IntoIterator<Item = Position>) -> Option<f64> {
        let distances = self.successor.distances();
        targets
            .into_iter()
            .filter_map(|target| distances.maze_distance(self.position, target))
            .min()
            .map(|distance| distance as f64)
    }

    fn visible_opponents(&self, is_match: impl Fn(&S, usize) -> bool) -> Vec<Position> {
        self.successor
            .opponents(self.index)
            .into_iter()
            .filter(|&agent| is_match(self.successor, agent))
            .filter_map(|agent| self.successor.agent_position(agent))
            .collect()
    }

    pub fn successor_score(&self, features: &mut FeatureVector) {
        let score = self.successor.team_score(self.index);
        features.set(Feature::SuccessorScore, score);
    }

    pub fn distance_to_food(&self, features: &mut FeatureVector) {
        let food = self.successor.food_to_eat(self.index).as_list();
        if let Some(distance) = self.closest(food) {
            features.set(Feature::DistanceToFood, distance);
        }
    }

    pub fn distance_to_capsule(&self, features: &mut FeatureVector) {
        let capsules = self.successor.capsules_to_eat(self.index);
        if let Some(distance) = self.closest(capsules) {
            features.set(Feature::DistanceToCapsule, distance);
        }
    }

    pub fn ally_distance(&self, features: &mut FeatureVector) {
        let allies: Vec<Position> = self
            .successor
            .team(self.index)
            .into_iter()
            .filter(|&agent| agent != self.index)
            .filter_map(|agent| self.successor.agent_position(agent))
            .collect();
        if let Some(distance) = self.closest(allies) {
            features.set(Feature::AllyDistance, distance);
        }
    }

    /// Distance to the closest opponent defending its side that `is_guard`
    /// accepts. With `count` set the number of such guards is recorded too.
    pub fn guards(
        &self,
        features: &mut FeatureVector,
        is_guard: impl Fn(&S, usize) -> bool,
        count: bool,
    ) {
        let guards = self.visible_opponents(is_guard);
        if count {
            features.set(Feature::NumGuards, guards.len() as f64);
        }
        if let Some(distance) = self.closest(guards) {
            features.set(Feature::GuardDistance, distance);
        }
    }

    pub fn scared_distance(&self, features: &mut FeatureVector) {
        let scared = self.visible_opponents(|state, agent| state.is_scared_ghost(agent));
        if let Some(distance) = self.closest(scared) {
            features.set(Feature::ScaredDistance, distance);
        }
    }

    pub fn defense(&self, features: &mut FeatureVector) {
        features.set(Feature::OnDefense, if self.is_pacman() { 0. } else { 1. });

        let invaders = self.visible_opponents(|state, agent| state.is_pacman(agent));
        features.set(Feature::NumInvaders, invaders.len() as f64);
        if let Some(distance) = self.closest(invaders) {
            features.set(Feature::InvaderDistance, distance);
        }

        let enemies = self.visible_opponents(|_, _| true);
        if let Some(distance) = self.closest(enemies) {
            features.set(Feature::EnemyDistance, distance);
        }
    }
}

/// Flags for stopping and for turning back. Reversing a stopped agent is
/// stopping again, so a stopped agent's `Stop` sets both.
pub(super) fn movement<S: CaptureGameState>(
    state: &S,
    index: usize,
    action: Direction,
    features: &mut FeatureVector,
) {
    if action == Direction::Stop {
        features.set(Feature::Stop, 1.);
    }
    if action == state.agent_direction(index).reverse() {
        features.set(Feature::Reverse, 1.);
    }
}
