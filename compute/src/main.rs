use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::time::Instant;

use warshall::graph::{DiGraph, Graph};
use warshall::{PathMode, Solution};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "compute",
    about = "Computes all-pairs shortest paths of a CSV edge list"
)]
struct Args {
    /// Graph file whose rows are `node` or `from,to,weight`.
    #[clap(short = 'i', long)]
    graph_filename: String,

    /// Output file of the solution.
    #[clap(short = 'o', long)]
    output_filename: String,

    /// Omits the successor matrix. Paths cannot be queried from the output.
    #[clap(long)]
    costs_only: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the graph...");
    let reader = BufReader::new(File::open(args.graph_filename)?);
    let graph = DiGraph::from_reader(reader)?;
    eprintln!(
        "{} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    let mode = if args.costs_only {
        PathMode::WithoutPaths
    } else {
        PathMode::WithPaths
    };

    eprintln!("Computing the shortest paths...");
    let start = Instant::now();
    let solution = Solution::solve(graph, mode)?;
    eprintln!("{} seconds", start.elapsed().as_secs_f64());

    eprintln!("Writing the solution...: {}", &args.output_filename);
    let mut writer = BufWriter::new(File::create(args.output_filename)?);
    let num_bytes = solution.write(&mut writer)?;
    eprintln!("{} MiB", num_bytes as f64 / (1024. * 1024.));

    Ok(())
}
