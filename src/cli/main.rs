#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use csv::Writer;
use itertools::Itertools;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(feature = "highs")]
use ilp_path::Highs;
use ilp_path::{BinaryProgramSolver, DefaultPathFinder, MicroLp, PathFinder, SimpleEdge, Solution};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    Microlp,
    Highs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Cheapest path between two nodes, found by integer linear programming
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV edge list with a `source,target,cost` header
    input: PathBuf,

    /// Node the path starts at
    #[arg(short, long)]
    start: String,

    /// Node the path ends at
    #[arg(short, long)]
    end: String,

    /// Treat every edge as traversable in both directions
    #[arg(short, long)]
    undirected: bool,

    /// Mixed-integer solver backend
    #[arg(long, value_enum, default_value_t = Backend::Microlp)]
    solver: Backend,

    /// Write the path to this CSV file as `step,node` rows
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the solution as a single JSON object
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

// Function to read the edges from a CSV file
fn read_edges_csv(filepath: &Path) -> Result<Vec<SimpleEdge<String>>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filepath)?;
    rdr.deserialize().collect()
}

// Function to write the path, one node per row
fn write_csv(path: &[String], filepath: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    wtr.write_record(["step", "node"])?;
    for (step, node) in path.iter().enumerate() {
        wtr.write_record([&step.to_string(), node])?;
    }
    wtr.flush()?;
    Ok(())
}

fn solve<A: BinaryProgramSolver>(
    algo: A,
    edges: Vec<SimpleEdge<String>>,
    cli: &Cli,
) -> Result<Solution<String>, ilp_path::Error> {
    let directed = !cli.undirected;
    let mut finder = DefaultPathFinder::<String, _>::new(algo);
    let solution = finder.shortest_path(
        edges.clone(),
        cli.start.clone(),
        cli.end.clone(),
        directed,
    )?;
    finder.check(&edges, &cli.start, &cli.end, directed, &solution)?;
    Ok(solution)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| format!("failed to set up logging: {e}"))?;

    let edges = read_edges_csv(&cli.input)?;
    log::info!("read {} edges from {}", edges.len(), cli.input.display());

    let solution = match cli.solver {
        Backend::Microlp => solve(MicroLp, edges, &cli)?,
        #[cfg(feature = "highs")]
        Backend::Highs => solve(Highs, edges, &cli)?,
        #[cfg(not(feature = "highs"))]
        Backend::Highs => return Err("this binary was built without the `highs` feature".into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string(&solution)?);
    } else {
        println!("possible: {}", solution.is_possible());
    }

    if let (Some(path), Some(cost)) = (solution.path(), solution.cost()) {
        if !cli.json {
            println!("path: {}", path.iter().join(" -> "));
            println!("cost: {cost}");
        }

        if let Some(output) = &cli.output {
            write_csv(path, output)?;
            log::info!("path written to {}", output.display());
        }
    }

    Ok(())
}
