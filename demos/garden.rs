//! Region and path analysis of a character map.
//!
//! Run: cargo run --bin garden -- regions map.txt
//!      cargo run --bin garden -- climb heights.txt

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use regrid_core::Grid;
use regrid_demos::{climb, fence_report};

#[derive(Parser)]
#[clap(name = "garden")]
#[clap(about = "Measure regions and climb heightmaps on character grids", long_about = None)]
struct Cli {
    /// Increase log verbosity (repeat for more)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every region with its area, perimeter and sides
    Regions {
        /// Map file, one row per line
        path: PathBuf,
    },
    /// Find the fewest steps from one symbol to another on a heightmap
    Climb {
        /// Heightmap file, one row per line
        path: PathBuf,

        #[clap(long, default_value_t = 'S')]
        start: char,

        #[clap(long, default_value_t = 'E')]
        goal: char,
    },
}

fn load(path: &Path) -> anyhow::Result<Grid<char>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let grid = Grid::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("loaded {} ({}x{})", path.display(), grid.width(), grid.height());
    Ok(grid)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Regions { path } => {
            let grid = load(&path)?;
            let report = fence_report(&grid);
            for d in &report.regions {
                println!(
                    "{}: area {:>4}  perimeter {:>4}  sides {:>4}",
                    d.id, d.area, d.perimeter, d.sides
                );
            }
            println!("price by perimeter: {}", report.perimeter_price);
            println!("price by sides:     {}", report.side_price);
        }
        Commands::Climb { path, start, goal } => {
            let grid = load(&path)?;
            let route = climb(&grid, start, goal)?;
            if route.is_empty() {
                println!("{goal} cannot be reached from {start}");
            } else {
                println!("{} steps", route.len() - 1);
            }
        }
    }
    Ok(())
}
