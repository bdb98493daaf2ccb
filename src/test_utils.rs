use crate::{
    evaluation::{capture::CaptureGameState, PacmanGameState},
    learning::Mdp,
    search::{
        distance::{DistanceOracle, MazeDistances},
        grid::{Direction, Grid, Layout, Position},
        tree_search::GameState,
        Cost, SearchProblem, Successor, ILLEGAL_COST,
    },
};
use std::rc::Rc;

pub const TINY_MAZE_TEXT: &str = r#"
%%%%%%%
%P    %
% %%% %
% %   %
% % % %
%.    %
%%%%%%%
"#;

/// Start and food are neighbours, but a wall two cells deep separates them.
pub const DETOUR_MAZE_TEXT: &str = r#"
%%%%%
%   %
% % %
%P%.%
%%%%%
"#;

/// A 4x4 room with a single wall off the direct route.
pub const FOUR_BY_FOUR_TEXT: &str = r#"
%%%%%%
%P   %
%  % %
%    %
%   .%
%%%%%%
"#;

pub const OPEN_ROOM_TEXT: &str = r#"
%%%%%%%
%P    %
%     %
%     %
%     %
%     %
%%%%%%%
"#;

/// The agent starts in a corner, the other three hold food.
pub const OPEN_CORNERS_TEXT: &str = r#"
%%%%%%
%P  .%
%    %
%.  .%
%%%%%%
"#;

/// Two routes of equal length around a block, one to each side.
pub const TWO_ROUTES_TEXT: &str = r#"
%%%%%%%
%  .  %
% %%% %
%  P  %
%%%%%%%
"#;

pub const WALLED_OFF_FOOD_TEXT: &str = r#"
%%%%%
%P%.%
%%%%%
"#;

/// An explicit weighted graph. Successors follow the order of `edges`, and
/// actions are named `"from->to"`.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    start: char,
    goal: char,
    edges: Vec<(char, char, Cost)>,
}

impl GraphProblem {
    pub fn new(start: char, goal: char, edges: &[(char, char, Cost)]) -> Self {
        Self {
            start,
            goal,
            edges: edges.to_vec(),
        }
    }
}

impl SearchProblem for GraphProblem {
    type State = char;
    type Action = String;

    fn starting_state(&self) -> char {
        self.start
    }

    fn is_goal(&self, state: &char) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &char) -> Vec<Successor<char, String>> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(from, to, cost)| Successor::new(to, format!("{}->{}", from, to), cost))
            .collect()
    }

    fn actions_cost(&self, actions: &[String]) -> Cost {
        let mut state = self.start;
        let mut total = 0.;
        for action in actions {
            match self
                .successor_states(&state)
                .into_iter()
                .find(|successor| &successor.action == action)
            {
                Some(successor) => {
                    total += successor.cost;
                    state = successor.state;
                }
                None => return ILLEGAL_COST,
            }
        }
        total
    }
}

/// The cheap route `S A C G` is one step longer than the expensive `S B G`.
pub fn weighted_graph_problem() -> GraphProblem {
    GraphProblem::new(
        'S',
        'G',
        &[
            ('S', 'A', 1.),
            ('S', 'B', 5.),
            ('A', 'C', 1.),
            ('C', 'G', 1.),
            ('B', 'G', 1.),
        ],
    )
}

/// The goal is generated through the expensive direct edge first.
pub fn shortcut_graph_problem() -> GraphProblem {
    GraphProblem::new('S', 'G', &[('S', 'A', 1.), ('S', 'G', 10.), ('A', 'G', 1.)])
}

pub fn unreachable_graph_problem() -> GraphProblem {
    GraphProblem::new('S', 'G', &[('S', 'A', 1.), ('A', 'S', 1.)])
}

#[derive(Debug, Clone)]
struct TreeNode {
    score: f64,
    children: Vec<(&'static str, usize)>,
    over: bool,
}

/// Builds explicit game trees. Turn order is implicit in the shape of the
/// tree: the agent to move at depth `d` is `d % num_agents`.
#[derive(Debug, Default)]
pub struct GameTreeBuilder {
    nodes: Vec<TreeNode>,
}

const LEAF_LABELS: [&str; 4] = ["a", "b", "c", "d"];

impl GameTreeBuilder {
    pub fn leaf(&mut self, score: f64) -> usize {
        self.nodes.push(TreeNode {
            score,
            children: vec![],
            over: true,
        });
        self.nodes.len() - 1
    }

    pub fn node(&mut self, score: f64, children: &[(&'static str, usize)]) -> usize {
        self.nodes.push(TreeNode {
            score,
            children: children.to_vec(),
            over: false,
        });
        self.nodes.len() - 1
    }

    /// An inner node whose children are leaves labelled `a`, `b`, ...
    pub fn over_leaves(&mut self, scores: &[f64]) -> usize {
        let children: Vec<(&'static str, usize)> = scores
            .iter()
            .zip(LEAF_LABELS)
            .map(|(&score, label)| (label, self.leaf(score)))
            .collect();
        self.node(0., &children)
    }

    pub fn build(self, root: usize, num_agents: usize) -> TreeGame {
        TreeGame {
            nodes: Rc::new(self.nodes),
            current: root,
            num_agents,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeGame {
    nodes: Rc<Vec<TreeNode>>,
    current: usize,
    num_agents: usize,
}

impl TreeGame {
    fn node(&self) -> &TreeNode {
        &self.nodes[self.current]
    }
}

impl GameState for TreeGame {
    type Action = &'static str;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: usize) -> Vec<&'static str> {
        self.node()
            .children
            .iter()
            .map(|&(label, _)| label)
            .collect()
    }

    fn generate_successor(&self, _agent: usize, action: &&'static str) -> Self {
        let (_, child) = self
            .node()
            .children
            .iter()
            .find(|(label, _)| label == action)
            .copied()
            .expect("illegal action in game tree");
        Self {
            nodes: self.nodes.clone(),
            current: child,
            num_agents: self.num_agents,
        }
    }

    fn is_over(&self) -> bool {
        self.node().over
    }

    fn score(&self) -> f64 {
        self.node().score
    }
}

/// Two agents, one round: the minimax value is 3 through `left`.
pub fn textbook_tree() -> TreeGame {
    let mut builder = GameTreeBuilder::default();
    let left = builder.over_leaves(&[3., 12., 8.]);
    let middle = builder.over_leaves(&[2., 4., 6.]);
    let right = builder.over_leaves(&[14., 5., 2.]);
    let root = builder.node(0., &[("left", left), ("middle", middle), ("right", right)]);
    builder.build(root, 2)
}

/// Three agents, one round, two actions each.
pub fn three_agent_tree() -> TreeGame {
    let mut builder = GameTreeBuilder::default();
    let left_a = builder.over_leaves(&[1., 3.]);
    let left_b = builder.over_leaves(&[5., 7.]);
    let left = builder.node(0., &[("a", left_a), ("b", left_b)]);
    let right_a = builder.over_leaves(&[0., 10.]);
    let right_b = builder.over_leaves(&[2., 2.]);
    let right = builder.node(0., &[("a", right_a), ("b", right_b)]);
    let root = builder.node(0., &[("left", left), ("right", right)]);
    builder.build(root, 3)
}

/// Two agents, two rounds. After one round `right` looks better (4 against
/// 3), after two rounds `left` is (6 against 1).
pub fn two_round_tree() -> TreeGame {
    let mut builder = GameTreeBuilder::default();
    let second_round = |builder: &mut GameTreeBuilder, score: f64, leaves: &[f64]| {
        let reply = builder.over_leaves(leaves);
        builder.node(score, &[("x", reply)])
    };
    let left_1 = second_round(&mut builder, 3., &[6., 9.]);
    let left_2 = second_round(&mut builder, 5., &[8., 10.]);
    let right_1 = second_round(&mut builder, 4., &[1., 9.]);
    let right_2 = second_round(&mut builder, 6., &[5., 5.]);
    let left = builder.node(0., &[("a", left_1), ("b", left_2)]);
    let right = builder.node(0., &[("a", right_1), ("b", right_2)]);
    let root = builder.node(0., &[("left", left), ("right", right)]);
    builder.build(root, 2)
}

pub fn tied_tree() -> TreeGame {
    let mut builder = GameTreeBuilder::default();
    let first = builder.over_leaves(&[5.]);
    let second = builder.over_leaves(&[5.]);
    let root = builder.node(0., &[("first", first), ("second", second)]);
    builder.build(root, 2)
}

/// A game that is not over, but in which agent 0 cannot move.
pub fn stuck_tree() -> TreeGame {
    let mut builder = GameTreeBuilder::default();
    let root = builder.node(7., &[]);
    builder.build(root, 2)
}

/// Pacman at (1, 2), a ghost at (5, 2) and one pellet at (4, 1).
pub const REFLEX_TEXT: &str = r#"
%%%%%%%
%     %
%P   G%
%   . %
%%%%%%%
"#;

/// A corridor with the last pellet right next to pacman.
pub const ADJACENT_FOOD_TEXT: &str = r#"
%%%%%%%
%G  P.%
%%%%%%%
"#;

fn open_moves(walls: &Grid<bool>, from: Position) -> Vec<Direction> {
    Direction::CARDINAL
        .into_iter()
        .filter(|&direction| !walls.is_blocked(from.step(direction)))
        .collect()
}

/// A small single pacman game. Every pacman move costs a point, a pellet is
/// worth 10, clearing the board 500 and meeting a ghost -500.
#[derive(Debug, Clone)]
pub struct MiniPacman {
    walls: Grid<bool>,
    food: Grid<bool>,
    pacman: Position,
    ghosts: Vec<Position>,
    score: f64,
    over: bool,
    distances: Rc<MazeDistances>,
}

impl MiniPacman {
    pub fn from_text(text: &str) -> Self {
        let layout = Layout::from_text(text).unwrap();
        Self {
            distances: Rc::new(MazeDistances::new(layout.walls.clone())),
            walls: layout.walls,
            food: layout.food,
            pacman: layout.agent_start.unwrap(),
            ghosts: layout.ghost_starts,
            score: 0.,
            over: false,
        }
    }

    pub fn without_ghosts(mut self) -> Self {
        self.ghosts.clear();
        self
    }
}

impl GameState for MiniPacman {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        if self.over {
            return vec![];
        }
        if agent == 0 {
            let mut actions = open_moves(&self.walls, self.pacman);
            actions.push(Direction::Stop);
            actions
        } else {
            let actions = open_moves(&self.walls, self.ghosts[agent - 1]);
            if actions.is_empty() {
                vec![Direction::Stop]
            } else {
                actions
            }
        }
    }

    fn generate_successor(&self, agent: usize, action: &Direction) -> Self {
        let mut next = self.clone();
        if agent == 0 {
            next.pacman = self.pacman.step(*action);
            next.score -= 1.;
            if next.food.is_set(next.pacman) {
                next.food.set(next.pacman, false);
                next.score += 10.;
                if next.food.count() == 0 {
                    next.score += 500.;
                    next.over = true;
                }
            }
        } else {
            next.ghosts[agent - 1] = self.ghosts[agent - 1].step(*action);
        }
        if !next.over && next.ghosts.contains(&next.pacman) {
            next.score -= 500.;
            next.over = true;
        }
        next
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PacmanGameState for MiniPacman {
    fn pacman_position(&self) -> Position {
        self.pacman
    }

    fn ghost_positions(&self) -> Vec<Position> {
        self.ghosts.clone()
    }

    fn food(&self) -> &Grid<bool> {
        &self.food
    }

    fn distances(&self) -> &dyn DistanceOracle {
        self.distances.as_ref()
    }
}

pub const CAPTURE_TEXT: &str = r#"
%%%%%%%%%%
% .      %
%       .%
%      o %
%%%%%%%%%%
"#;

#[derive(Debug, Clone)]
struct CaptureMember {
    position: Option<Position>,
    direction: Direction,
    red: bool,
    scared_timer: u32,
}

/// A capture board split at `x = width / 2`: red owns the left half, blue the
/// right. Eating a pellet moves the score by one in the eater's favour.
#[derive(Debug, Clone)]
pub struct MiniCapture {
    walls: Grid<bool>,
    food: Grid<bool>,
    capsules: Vec<Position>,
    members: Vec<CaptureMember>,
    red_score: f64,
    distances: Rc<MazeDistances>,
}

impl MiniCapture {
    pub fn new(text: &str, members: &[(Option<Position>, Direction, bool)]) -> Self {
        let layout = Layout::from_text(text).unwrap();
        Self {
            distances: Rc::new(MazeDistances::new(layout.walls.clone())),
            walls: layout.walls,
            food: layout.food,
            capsules: layout.capsules,
            members: members
                .iter()
                .map(|&(position, direction, red)| CaptureMember {
                    position,
                    direction,
                    red,
                    scared_timer: 0,
                })
                .collect(),
            red_score: 0.,
        }
    }

    pub fn with_position(mut self, agent: usize, position: Option<Position>) -> Self {
        self.members[agent].position = position;
        self
    }

    pub fn with_scared_timer(mut self, agent: usize, timer: u32) -> Self {
        self.members[agent].scared_timer = timer;
        self
    }

    fn on_red_half(&self, position: Position) -> bool {
        (position.x as usize) < self.walls.width() / 2
    }

    /// Whether `position` lies on the half the agent's team attacks.
    fn is_target_half(&self, agent: usize, position: Position) -> bool {
        self.members[agent].red != self.on_red_half(position)
    }
}

/// Red agents 0 and 2 at (4, 2) and (1, 1), blue agent 1 guarding at (6, 3)
/// and blue agent 3 out of sight.
pub fn capture_game() -> MiniCapture {
    MiniCapture::new(
        CAPTURE_TEXT,
        &[
            (Some(Position::new(4, 2)), Direction::East, true),
            (Some(Position::new(6, 3)), Direction::West, false),
            (Some(Position::new(1, 1)), Direction::South, true),
            (None, Direction::West, false),
        ],
    )
}

impl GameState for MiniCapture {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        self.members.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        let mut actions = match self.members[agent].position {
            Some(position) => open_moves(&self.walls, position),
            None => vec![],
        };
        actions.push(Direction::Stop);
        actions
    }

    fn generate_successor(&self, agent: usize, action: &Direction) -> Self {
        let mut next = self.clone();
        let Some(position) = self.members[agent].position else {
            return next;
        };
        let position = position.step(*action);
        next.members[agent].position = Some(position);
        next.members[agent].direction = *action;
        if self.is_target_half(agent, position) && next.food.is_set(position) {
            next.food.set(position, false);
            next.red_score += if self.members[agent].red { 1. } else { -1. };
        }
        if self.is_target_half(agent, position) {
            next.capsules.retain(|&capsule| capsule != position);
        }
        next
    }

    fn is_over(&self) -> bool {
        (0..2).any(|agent| self.food_to_eat(agent).count() == 0)
    }

    fn score(&self) -> f64 {
        self.red_score
    }
}

impl CaptureGameState for MiniCapture {
    fn agent_position(&self, agent: usize) -> Option<Position> {
        self.members[agent].position
    }

    fn agent_direction(&self, agent: usize) -> Direction {
        self.members[agent].direction
    }

    fn is_pacman(&self, agent: usize) -> bool {
        self.members[agent]
            .position
            .is_some_and(|position| self.is_target_half(agent, position))
    }

    fn scared_timer(&self, agent: usize) -> u32 {
        self.members[agent].scared_timer
    }

    fn team(&self, agent: usize) -> Vec<usize> {
        let red = self.members[agent].red;
        (0..self.members.len())
            .filter(|&other| self.members[other].red == red)
            .collect()
    }

    fn opponents(&self, agent: usize) -> Vec<usize> {
        let red = self.members[agent].red;
        (0..self.members.len())
            .filter(|&other| self.members[other].red != red)
            .collect()
    }

    fn team_score(&self, agent: usize) -> f64 {
        if self.members[agent].red {
            self.red_score
        } else {
            -self.red_score
        }
    }

    fn food_to_eat(&self, agent: usize) -> Grid<bool> {
        let mut food = self.food.clone();
        for position in self.food.as_list() {
            if !self.is_target_half(agent, position) {
                food.set(position, false);
            }
        }
        food
    }

    fn capsules_to_eat(&self, agent: usize) -> Vec<Position> {
        self.capsules
            .iter()
            .copied()
            .filter(|&capsule| self.is_target_half(agent, capsule))
            .collect()
    }

    fn distances(&self) -> &dyn DistanceOracle {
        self.distances.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TwoState {
    Live,
    Done,
}

/// In `Live`, `stay` pays `stay_reward` and stays, `leave` pays
/// `leave_reward` and ends in the absorbing `Done`.
#[derive(Debug, Clone)]
pub struct TwoStateMdp {
    stay_reward: f64,
    leave_reward: f64,
}

impl TwoStateMdp {
    pub fn new(stay_reward: f64, leave_reward: f64) -> Self {
        Self {
            stay_reward,
            leave_reward,
        }
    }
}

impl Mdp for TwoStateMdp {
    type State = TwoState;
    type Action = &'static str;

    fn states(&self) -> Vec<TwoState> {
        vec![TwoState::Live, TwoState::Done]
    }

    fn start_state(&self) -> TwoState {
        TwoState::Live
    }

    fn possible_actions(&self, state: &TwoState) -> Vec<&'static str> {
        match state {
            TwoState::Live => vec!["stay", "leave"],
            TwoState::Done => vec![],
        }
    }

    fn transition_states_and_probs(
        &self,
        _state: &TwoState,
        action: &&'static str,
    ) -> Vec<(TwoState, f64)> {
        match *action {
            "stay" => vec![(TwoState::Live, 1.)],
            _ => vec![(TwoState::Done, 1.)],
        }
    }

    fn reward(&self, _state: &TwoState, action: &&'static str, _next_state: &TwoState) -> f64 {
        match *action {
            "stay" => self.stay_reward,
            _ => self.leave_reward,
        }
    }

    fn is_terminal(&self, state: &TwoState) -> bool {
        *state == TwoState::Done
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chain {
    First,
    Second,
    End,
}

/// `First -> Second -> End`, paying 1 on the last step. States are listed
/// back to front.
#[derive(Debug, Clone)]
pub struct ChainMdp;

impl Mdp for ChainMdp {
    type State = Chain;
    type Action = &'static str;

    fn states(&self) -> Vec<Chain> {
        vec![Chain::Second, Chain::First, Chain::End]
    }

    fn start_state(&self) -> Chain {
        Chain::First
    }

    fn possible_actions(&self, state: &Chain) -> Vec<&'static str> {
        match state {
            Chain::End => vec![],
            _ => vec!["go"],
        }
    }

    fn transition_states_and_probs(
        &self,
        state: &Chain,
        _action: &&'static str,
    ) -> Vec<(Chain, f64)> {
        match state {
            Chain::First => vec![(Chain::Second, 1.)],
            _ => vec![(Chain::End, 1.)],
        }
    }

    fn reward(&self, state: &Chain, _action: &&'static str, _next_state: &Chain) -> f64 {
        match state {
            Chain::Second => 1.,
            _ => 0.,
        }
    }

    fn is_terminal(&self, state: &Chain) -> bool {
        *state == Chain::End
    }
}
