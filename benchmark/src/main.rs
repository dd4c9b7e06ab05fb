mod timer;

use std::error::Error;

use warshall::generator::{self, RandomGraphConfig};
use warshall::{PathMode, ShortestPaths};

use timer::{Samples, Timer};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser, Debug)]
#[clap(
    name = "benchmark",
    about = "Measures the runtime of all-pairs shortest paths on random graphs"
)]
struct Args {
    /// Number of nodes of the smallest graph.
    #[clap(long, default_value = "88")]
    min_nodes: usize,

    /// Upper bound of the number of nodes.
    #[clap(long, default_value = "3375")]
    max_nodes: usize,

    /// Average number of edges leaving a node.
    #[clap(long, default_value = "4")]
    edges_per_node: usize,

    /// Number of unrecorded runs over all sizes.
    #[clap(long, default_value = "1")]
    warmups: usize,

    /// Number of recorded runs over all sizes.
    #[clap(long, default_value = "50")]
    iterations: usize,

    /// Also builds the successor matrix.
    #[clap(long)]
    with_paths: bool,

    /// Seed of the random graphs. Drawn from the OS if omitted.
    #[clap(long)]
    seed: Option<u64>,
}

struct Runner {
    mode: PathMode,
    rng: StdRng,
    timer: Timer,
    blackhole: i64,
}

impl Runner {
    /// Solves fresh random graphs until one has no negative cycle, and returns
    /// the time of the successful run in milliseconds.
    fn run(&mut self, num_nodes: usize, num_edges: usize) -> Result<f64, Box<dyn Error>> {
        let config = RandomGraphConfig::new(num_nodes, num_edges);
        loop {
            let graph = generator::generate(&config, &mut self.rng)?;
            self.timer.start();
            let result = ShortestPaths::solve(&graph, self.mode);
            let elapsed = self.timer.stop();
            match result {
                Ok(paths) => {
                    self.consume(&paths);
                    return Ok(elapsed.as_secs_f64() * 1000.0);
                }
                Err(e) if e.is_negative_cycle() => {
                    println!("*** Negative cycle detected - repeating test ***");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn consume(&mut self, paths: &ShortestPaths) {
        for &cost in paths.costs() {
            self.blackhole = self.blackhole.wrapping_add(i64::from(cost));
        }
        if let Some(successors) = paths.successors() {
            for &succ in successors {
                self.blackhole = self.blackhole.wrapping_add(i64::from(succ));
            }
        }
    }
}

fn next_size(num_nodes: usize) -> usize {
    (num_nodes * 3 / 2).min(num_nodes + 25000).max(num_nodes + 1)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.min_nodes < 2 {
        return Err("--min-nodes must be at least 2".into());
    }
    if args.edges_per_node >= args.min_nodes {
        return Err("--edges-per-node must be less than --min-nodes".into());
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mode = if args.with_paths {
        PathMode::WithPaths
    } else {
        PathMode::WithoutPaths
    };
    let mut runner = Runner {
        mode,
        rng,
        timer: Timer::new(),
        blackhole: 0,
    };
    let mut samples = Samples::new();

    let rounds = (0..args.warmups)
        .map(|i| (i, true))
        .chain((0..args.iterations).map(|i| (i, false)));
    for (iteration, warmup) in rounds {
        let label = if warmup { "Warmup" } else { "Test" };
        println!("\n{} - Iteration {}:", label, iteration + 1);

        let mut num_nodes = args.min_nodes;
        while num_nodes <= args.max_nodes {
            let num_edges = num_nodes * args.edges_per_node;
            let millis = runner.run(num_nodes, num_edges)?;
            print!(
                "Time for graph with {:7} nodes and {:9} edges = {:8.1} ms",
                num_nodes, num_edges, millis
            );
            if !warmup {
                let count = samples.push(num_nodes, millis);
                if let Some(median) = samples.median(num_nodes) {
                    print!("  -->  Median after {count:2} iterations = {median:8.1} ms");
                }
            }
            println!();
            num_nodes = next_size(num_nodes);
        }
        println!("blackhole = {}", runner.blackhole);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_size() {
        let mut sizes = vec![88];
        while let Some(&n) = sizes.last() {
            if n > 3375 {
                break;
            }
            sizes.push(next_size(n));
        }
        sizes.pop();
        assert_eq!(sizes, &[88, 132, 198, 297, 445, 667, 1000, 1500, 2250, 3375]);
        assert_eq!(next_size(100_000), 125_000);
        assert_eq!(next_size(2), 3);
    }
}
