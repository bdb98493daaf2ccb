use clap::{Parser, Subcommand, ValueEnum};
use gridagents::{
    config::AgentConfig,
    error::LayoutError,
    learning::{
        run_episode, GridState, GridWorld, LearningParameters, QTable, TabularQAgent, Tuning,
        ValueIterationAgent,
    },
    search::{
        grid::{Direction, Layout, Position},
        heuristics::{corners_heuristic, food_heuristic, Heuristic, PositionHeuristicName},
        problem_formulations::{
            ClosestDotSearch, CornersProblem, FoodSearchProblem, PositionSearchProblem,
        },
        search_engines::SearchEngineName,
        validate, Cost, SearchProblem, Verbosity,
    },
};
use itertools::Itertools;
use rand::{rngs::SmallRng, SeedableRng};
use std::{error::Error, fmt::Display, path::PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Search, plan and learn on grid worlds.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "Agent configuration (TOML), defaults are used for missing sections",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a plan in a maze layout and print it with its cost.
    Search {
        #[arg(help = "The maze layout file")]
        layout: PathBuf,
        #[arg(
            value_enum,
            help = "What the agent has to achieve",
            short = 'p',
            long = "problem",
            id = "PROBLEM",
            default_value_t = ProblemKind::Position
        )]
        problem: ProblemKind,
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE",
            default_value_t = SearchEngineName::Bfs
        )]
        engine: SearchEngineName,
        #[arg(
            value_enum,
            help = "The heuristic for position problems, only used by A*",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = PositionHeuristicName::Manhattan
        )]
        heuristic: PositionHeuristicName,
    },
    /// Solve a gridworld with value iteration and print values and policy.
    ValueIteration {
        #[command(flatten)]
        world: WorldArgs,
        #[arg(help = "Number of sweeps, overrides the config", long = "iterations")]
        iterations: Option<usize>,
    },
    /// Train a tabular Q-learning agent on a gridworld and print its policy.
    QLearning {
        #[command(flatten)]
        world: WorldArgs,
        #[arg(
            help = "Number of training episodes",
            long = "episodes",
            default_value_t = 100
        )]
        episodes: usize,
        #[arg(help = "Longest episode", long = "max-steps", default_value_t = 1000)]
        max_steps: usize,
        #[arg(help = "Seed for exploration and transitions", long = "seed")]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
struct WorldArgs {
    #[arg(
        help = "A gridworld file, instead of a built-in grid",
        long = "grid",
        id = "GRID"
    )]
    grid: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "Built-in grid",
        long = "preset",
        id = "PRESET",
        default_value_t = GridPreset::Book
    )]
    preset: GridPreset,
    #[arg(
        value_enum,
        help = "Noise, living reward and discount tuned for a policy",
        long = "tuning"
    )]
    tuning: Option<TuningName>,
    #[arg(help = "Probability of slipping sideways", long = "noise")]
    noise: Option<f64>,
    #[arg(help = "Reward for every non-exit step", long = "living-reward")]
    living_reward: Option<f64>,
    #[arg(
        help = "Discount factor, overrides config and tuning",
        long = "discount"
    )]
    discount: Option<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
enum ProblemKind {
    #[clap(help = "Reach the first food cell.")]
    Position,
    #[clap(help = "Visit all four corners.")]
    Corners,
    #[clap(help = "Eat all the food.")]
    Food,
    #[clap(help = "Greedily eat the closest food until none is left.")]
    ClosestDot,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
enum GridPreset {
    Book,
    Bridge,
    Discount,
    Cliff,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
enum TuningName {
    CrossBridge,
    CloseExitRiskingCliff,
    CloseExitAvoidingCliff,
    DistantExitRiskingCliff,
    DistantExitAvoidingCliff,
    AvoidExits,
}

impl From<TuningName> for Tuning {
    fn from(name: TuningName) -> Self {
        match name {
            TuningName::CrossBridge => Tuning::CROSS_BRIDGE,
            TuningName::CloseExitRiskingCliff => Tuning::CLOSE_EXIT_RISKING_CLIFF,
            TuningName::CloseExitAvoidingCliff => Tuning::CLOSE_EXIT_AVOIDING_CLIFF,
            TuningName::DistantExitRiskingCliff => Tuning::DISTANT_EXIT_RISKING_CLIFF,
            TuningName::DistantExitAvoidingCliff => Tuning::DISTANT_EXIT_AVOIDING_CLIFF,
            TuningName::AvoidExits => Tuning::AVOID_EXITS,
        }
    }
}

impl WorldArgs {
    /// The gridworld and the discount to solve it with.
    fn load(&self, default_discount: f64) -> Result<(GridWorld, f64), Box<dyn Error>> {
        let mut world = match &self.grid {
            Some(path) => GridWorld::from_text(&std::fs::read_to_string(path)?)?,
            None => match self.preset {
                GridPreset::Book => GridWorld::book(),
                GridPreset::Bridge => GridWorld::bridge(),
                GridPreset::Discount => GridWorld::discount(),
                GridPreset::Cliff => GridWorld::cliff(),
            },
        };
        let mut discount = default_discount;
        if let Some(tuning) = self.tuning.map(Tuning::from) {
            world = world.tuned(tuning);
            discount = tuning.discount;
        }
        if let Some(noise) = self.noise {
            world = world.with_noise(noise);
        }
        if let Some(living_reward) = self.living_reward {
            world = world.with_living_reward(living_reward);
        }
        Ok((world, self.discount.unwrap_or(discount)))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &cli.config {
        Some(path) => AgentConfig::load(path)?,
        None => AgentConfig::default(),
    };

    match cli.command {
        Commands::Search {
            layout,
            problem,
            engine,
            heuristic,
        } => {
            let layout = Layout::from_text(&std::fs::read_to_string(layout)?)?;
            search(&layout, problem, engine, heuristic)
        }
        Commands::ValueIteration { world, iterations } => {
            let (world, discount) = world.load(config.value_iteration.discount)?;
            let iterations = iterations.unwrap_or(config.value_iteration.iterations);
            value_iteration(world, discount, iterations);
            Ok(())
        }
        Commands::QLearning {
            world,
            episodes,
            max_steps,
            seed,
        } => {
            let (world, discount) = world.load(config.learning.discount)?;
            let parameters = config
                .learning
                .with_discount(discount)
                .with_num_training(episodes);
            q_learning(world, parameters, episodes, max_steps, seed);
            Ok(())
        }
    }
}

fn search(
    layout: &Layout,
    kind: ProblemKind,
    engine: SearchEngineName,
    heuristic: PositionHeuristicName,
) -> Result<(), Box<dyn Error>> {
    let start = layout.agent_start.ok_or(LayoutError::MissingStart)?;
    let walls = layout.walls.clone();
    let food = layout.food.clone();

    let (plan, cost) = match kind {
        ProblemKind::Position => {
            let problem = PositionSearchProblem::from_layout(layout)?;
            solve(engine, &problem, heuristic.create())?
        }
        ProblemKind::Corners => {
            let problem = CornersProblem::new(walls, &food, start);
            solve(engine, &problem, Box::new(corners_heuristic))?
        }
        ProblemKind::Food => {
            let problem = FoodSearchProblem::new(walls, food, start);
            solve(engine, &problem, Box::new(food_heuristic))?
        }
        ProblemKind::ClosestDot => {
            let plan = ClosestDotSearch::new(walls, food, start).find_path()?;
            let cost = plan.len() as Cost;
            (plan, cost)
        }
    };

    info!(plan_length = plan.len(), plan_cost = cost, "plan found");
    println!("Plan found:");
    println!("{}", join(&plan));
    println!("Plan length: {}", plan.len());
    println!("Plan cost: {}", cost);
    Ok(())
}

fn solve<P>(
    engine: SearchEngineName,
    problem: &P,
    heuristic: Box<dyn Heuristic<P>>,
) -> Result<(Vec<Direction>, Cost), Box<dyn Error>>
where
    P: SearchProblem<Action = Direction> + 'static,
{
    let (result, _) = engine.create(heuristic).search(problem);
    let plan = result.into_result()?;
    validate(problem, &plan)?;
    info!("plan is valid");
    let cost = problem.actions_cost(&plan);
    Ok((plan, cost))
}

fn value_iteration(world: GridWorld, discount: f64, iterations: usize) {
    let agent = ValueIterationAgent::new(world.clone(), discount, iterations);
    println!("Values after {} iterations:", iterations);
    print_grid(&world, |state| format!("{:.2}", agent.value(state)));
    println!("Policy:");
    print_grid(&world, |state| policy_symbol(agent.policy(state)));
}

fn q_learning(
    world: GridWorld,
    parameters: LearningParameters,
    episodes: usize,
    max_steps: usize,
    seed: Option<u64>,
) {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut agent: TabularQAgent<_, _> = TabularQAgent::for_mdp(&world, parameters, QTable::new());
    if let Some(seed) = seed {
        agent = agent.with_seed(seed);
    }

    let mut total_returns = 0.;
    for _ in 0..episodes {
        total_returns += run_episode(&world, &mut agent, &mut rng, max_steps);
    }
    if episodes > 0 {
        println!("Average returns: {:.3}", total_returns / episodes as f64);
    }
    println!("Values:");
    print_grid(&world, |state| format!("{:.2}", agent.value(state)));
    println!("Policy:");
    print_grid(&world, |state| policy_symbol(agent.policy(state)));
}

fn policy_symbol(action: Option<impl Display>) -> String {
    action.map_or_else(|| "-".to_string(), |action| action.to_string())
}

/// Print one cell per state, top row first; walls are shown as `#`.
fn print_grid(world: &GridWorld, mut cell: impl FnMut(&GridState) -> String) {
    for y in (0..world.height() as i32).rev() {
        let row: Vec<String> = (0..world.width() as i32)
            .map(|x| {
                let position = Position::new(x, y);
                if world.is_wall(position) {
                    "#".to_string()
                } else {
                    cell(&GridState::Cell(position))
                }
            })
            .collect();
        let line: String = row.iter().map(|text| format!("{:>8}", text)).collect();
        println!("{}", line);
    }
}

fn join(plan: &[Direction]) -> String {
    plan.iter().join(", ")
}
