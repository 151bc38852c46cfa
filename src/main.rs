//! Square-Sum Problem Solver
//!
//! Checks runs 1, 2, 3, ... in turn: for each `n` it looks for an ordering of
//! `1..=n` where every consecutive pair adds up to a perfect square, and
//! prints the path it found or `FAIL`. Without a limit it keeps going until
//! the process is stopped.

use std::io::Write;

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use squaresum::{report, Solver, Vertex};

/// Searches square-sum paths over 1..=n for increasing n.
#[derive(Parser)]
#[command(name = "squaresum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve runs 1, 2, 3, ... and report each one.
    Run {
        /// Stop after this run instead of looping forever.
        #[arg(long)]
        limit: Option<Vertex>,
    },
    /// Solve runs up to N and report only run N.
    Solve {
        /// The run to report.
        n: Vertex,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Run { limit }) => run_loop(limit),
        Some(Command::Solve { n }) => run_single(n),
        None => run_loop(None),
    }
}

/// Sets up `env_logger`; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Prints the banner, then one block per run.
fn run_loop(limit: Option<Vertex>) {
    let mut solver = Solver::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if write!(out, "{}", report::banner()).is_err() {
        return;
    }
    while limit.map_or(true, |limit| solver.run() < limit) {
        let outcome = solver.solve_next();
        // a closed stdout ends the loop
        if write!(out, "{}", report::format_outcome(&outcome)).is_err() || out.flush().is_err() {
            return;
        }
    }

    let stats = solver.stats();
    info!(
        "stopped after run {}: {} extensions, {} searches, {} search steps",
        solver.run(),
        stats.extensions,
        stats.searches,
        stats.search_steps
    );
}

/// Solves up to run `n` and prints only its block.
fn run_single(n: Vertex) {
    if n == 0 {
        eprintln!("Runs start at 1.");
        return;
    }
    let mut solver = Solver::new();
    let outcome = solver.solve_until(n);
    print!("{}", report::format_outcome(&outcome));
}
