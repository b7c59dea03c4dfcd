use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use u_search::astar::{AStarConfig, AStarResult, AStarRunner, Heuristic, SearchStatus};
use u_search::grid::{random_grid, Grid};
use u_search::queens::{parse_board_size, QueensConfig, QueensRunner, Strategy};
use u_search::render;

const EXAMPLE_MAZE: &str = "\
S . . # G
# # . # .
. . . . .
# # # . #
. . . . .";

#[derive(Parser)]
#[command(name = "u-search", about = "A* grid search and N-Queens enumeration", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find a shortest path from S to G.
    Maze {
        /// Grid file in marker format; the built-in 5x5 example if omitted.
        file: Option<PathBuf>,
        /// Generate a random ROWSxCOLS grid instead of reading one.
        #[arg(long, value_parser = parse_dims, conflicts_with = "file")]
        random: Option<(usize, usize)>,
        #[arg(long, default_value_t = 0.25)]
        density: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long = "max-expansions")]
        max_expansions: Option<usize>,
        #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
        heuristic: HeuristicArg,
        /// Print the grid after every expansion.
        #[arg(long)]
        steps: bool,
    },
    /// Count (and optionally print) N-Queens solutions.
    Queens {
        #[arg(value_parser = parse_board_size)]
        n: usize,
        #[arg(long, value_enum, default_value_t = StrategyArg::BranchAndBound)]
        strategy: StrategyArg,
        /// Print every solution board.
        #[arg(long)]
        show: bool,
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum StrategyArg {
    Backtracking,
    BranchAndBound,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Backtracking => Strategy::Backtracking,
            StrategyArg::BranchAndBound => Strategy::BranchAndBound,
        }
    }
}

fn parse_dims(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows = rows.trim().parse().map_err(|_| format!("bad row count {rows:?}"))?;
    let cols = cols.trim().parse().map_err(|_| format!("bad column count {cols:?}"))?;
    Ok((rows, cols))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Maze {
            file,
            random,
            density,
            seed,
            max_expansions,
            heuristic,
            steps,
        } => {
            let grid = match (file, random) {
                (Some(path), _) => fs::read_to_string(path)?.parse::<Grid>()?,
                (None, Some((rows, cols))) => random_grid(rows, cols, density, seed)?,
                (None, None) => EXAMPLE_MAZE.parse::<Grid>()?,
            };
            let mut config = AStarConfig::default().with_heuristic(heuristic.into());
            if let Some(n) = max_expansions {
                config = config.with_max_expansions(n);
            }
            run_maze(&grid, &config, steps)
        }
        Command::Queens {
            n,
            strategy,
            show,
            parallel,
        } => {
            let config = QueensConfig::default()
                .with_strategy(strategy.into())
                .with_collect_solutions(show)
                .with_parallel(parallel);
            let result = QueensRunner::run(n, &config)?;
            for (i, placement) in result.solutions.iter().enumerate() {
                println!("Solution {}:", i + 1);
                println!("{}", render::board(placement));
            }
            println!("Total solutions: {}", result.count);
            println!("Queens placed: {}", result.placements);
            Ok(())
        }
    }
}

fn run_maze(grid: &Grid, config: &AStarConfig, steps: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("V- Visited, P- Path, S- Start, G- Goal");
    println!("#- Wall, .- Empty\n");
    println!("Initial Maze:");
    println!("{grid}");

    let result: AStarResult = if steps {
        let mut snapshots = AStarRunner::snapshots(grid, config)?;
        for snap in snapshots.by_ref() {
            println!(
                "Step {}: Visited {} (g = {}, f = {})",
                snap.expansion, snap.coord, snap.depth, snap.estimated_cost
            );
            println!("{}", render::grid_overlay(grid, &snap.visited, &[]));
        }
        snapshots.finish()
    } else {
        AStarRunner::run(grid, config)?
    };

    match result.status {
        SearchStatus::Found => {
            let moves = result.path.len().saturating_sub(1);
            println!(
                "Solution found: {moves} steps, {} cells expanded.",
                result.expansions
            );
            println!("Final Path:");
            println!("{}", render::grid_overlay(grid, &[], &result.path));
        }
        SearchStatus::Unreachable => {
            println!("No solution found after {} expansions.", result.expansions);
        }
        SearchStatus::LimitExceeded => {
            println!(
                "Expansion limit reached after {} expansions; raise --max-expansions.",
                result.expansions
            );
        }
    }
    Ok(())
}
