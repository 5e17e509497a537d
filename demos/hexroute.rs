//! Plan a route across a random hex board.
//!
//! Run: cargo run --bin hexroute -- --radius 6 --seed 42
//! Set `RUST_LOG=debug` to see the search log.

use clap::Parser;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use wayfind_demos::HexBoard;
use wayfind_paths::{Cost, NO_LIMIT, PathFinder, SearchOptions, Strategy};

#[derive(Parser)]
#[command(name = "hexroute", about = "Shortest route across a random hex board", version)]
struct Cli {
    /// Board radius in tiles.
    #[arg(long, default_value_t = 6)]
    radius: i32,
    /// Seed for terrain generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Maximum total route cost (inclusive).
    #[arg(long)]
    limit: Option<Cost>,
    /// Use the binary-heap queue instead of the linear scan.
    #[arg(long)]
    heap: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut rng = rand::rngs::StdRng::seed_from_u64(cli.seed);
    let board = HexBoard::generate(cli.radius, &mut rng);

    let graph = match board.graph() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "board radius {} with {} tiles and {} edges",
        board.radius(),
        graph.node_count(),
        graph.edge_count()
    );

    let strategy = if cli.heap {
        Strategy::BinaryHeap
    } else {
        Strategy::LinearScan
    };
    let finder = PathFinder::new(
        SearchOptions::default()
            .with_limit(cli.limit.unwrap_or(NO_LIMIT))
            .with_strategy(strategy),
    );

    let (west, east) = HexBoard::corners(cli.radius);
    let (Some(start), Some(end)) = (board.node(west), board.node(east)) else {
        eprintln!("Error: board has no corner tiles");
        std::process::exit(1);
    };

    match finder.find_path(&graph, start, end) {
        Ok(Some(path)) => {
            print!("{}", board.render(path.nodes()));
            println!("cost {} over {} steps", path.cost(), path.hops());
        }
        Ok(None) => {
            print!("{}", board.render(&[]));
            println!("no route from {west} to {east}");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
