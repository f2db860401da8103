use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tsp_planner::builder;
use tsp_planner::error::{BuildError, TourError};
use tsp_planner::graph::TownGraph;
use tsp_planner::manager::TownGraphManager;
use tsp_planner::report;
use tsp_planner::town::Town;

#[derive(Parser)]
#[command(name = "tsp-planner")]
#[command(about = "Plan closed tours over a road network of towns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a closed tour visiting every town once
    Solve {
        /// Road file, one `roadName,weight;source;destination` per line
        input: PathBuf,
        /// Treat the input as a JSON adjacency-matrix file
        #[arg(long)]
        matrix: bool,
        /// Town the tour starts and ends at
        #[arg(long)]
        start: String,
        /// Tour construction to run
        #[arg(long, value_enum, default_value_t = Algorithm::Both)]
        algorithm: Algorithm,
    },
    /// List the towns and roads of a road network
    Show {
        /// Road file, one `roadName,weight;source;destination` per line
        input: PathBuf,
        /// Treat the input as a JSON adjacency-matrix file
        #[arg(long)]
        matrix: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Greedy nearest-neighbor heuristic
    Nearest,
    /// Exact branch-and-bound search
    Exact,
    /// Run both and print both tours
    Both,
}

impl Algorithm {
    fn runs_nearest(self) -> bool {
        matches!(self, Algorithm::Nearest | Algorithm::Both)
    }

    fn runs_exact(self) -> bool {
        matches!(self, Algorithm::Exact | Algorithm::Both)
    }
}

type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("unknown town: {0}")]
    UnknownTown(String),
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            input,
            matrix,
            start,
            algorithm,
        } => cmd_solve(&input, matrix, &start, algorithm),
        Commands::Show { input, matrix } => cmd_show(&input, matrix),
    }
}

fn cmd_solve(input: &Path, matrix: bool, start: &str, algorithm: Algorithm) -> AppResult<()> {
    let mut manager = TownGraphManager::new();
    if matrix {
        manager.populate_from_matrix_file(input)?;
    } else {
        manager.populate_from_road_file(input)?;
    }
    if !manager.contains_town(start) {
        return Err(AppError::UnknownTown(start.to_string()));
    }

    if algorithm.runs_nearest() {
        println!("Nearest neighbor starting from {start}:");
        print_outcome(manager.graph(), manager.nearest_neighbor(start));
    }
    if algorithm.runs_exact() {
        if algorithm.runs_nearest() {
            println!();
        }
        println!("Branch and bound starting from {start}:");
        print_outcome(manager.graph(), manager.branch_and_bound(start));
    }
    Ok(())
}

fn cmd_show(input: &Path, matrix: bool) -> AppResult<()> {
    let graph = if matrix {
        builder::load_matrix_file(input)?
    } else {
        builder::load_road_file(input)?
    };
    print!("{}", report::format_graph(&graph));
    Ok(())
}

/// Prints a tour, or the no-solution outcome in its place.
///
/// A graph with no closed tour is an ordinary answer, not a process
/// failure, so outcomes go to stdout and the exit code stays zero.
fn print_outcome(graph: &TownGraph, outcome: Result<Vec<Town>, TourError>) {
    match outcome.and_then(|tour| report::format_tour(graph, &tour)) {
        Ok(text) => print!("{text}"),
        Err(err) => println!("{err}"),
    }
}
