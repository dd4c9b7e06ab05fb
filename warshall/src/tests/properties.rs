use rand::{rngs::StdRng, SeedableRng};

use crate::common::{PathMode, INFINITE_COST};
use crate::generator::{generate, RandomGraphConfig};
use crate::graph::{DiGraph, Graph};
use crate::shortest_paths::ShortestPaths;

const NUM_TRIALS: u64 = 40;

/// Bellman-Ford from every source. Returns `None` on a negative cycle.
fn reference_costs(graph: &DiGraph<String>) -> Option<Vec<i64>> {
    let n = graph.num_nodes();
    let mut edges = vec![];
    graph.for_each_edge(|from, to, weight| edges.push((from, to, i64::from(weight))));

    // A virtual source connected to every node finds cycles anywhere.
    let mut potential = vec![0i64; n];
    for round in 0..=n {
        let mut updated = false;
        for &(from, to, weight) in &edges {
            if potential[from] + weight < potential[to] {
                potential[to] = potential[from] + weight;
                updated = true;
            }
        }
        if !updated {
            break;
        }
        if round == n {
            return None;
        }
    }

    let mut costs = vec![i64::MAX; n * n];
    for source in 0..n {
        let row = &mut costs[source * n..(source + 1) * n];
        row[source] = 0;
        for _ in 1..n {
            let mut updated = false;
            for &(from, to, weight) in &edges {
                if row[from] != i64::MAX && row[from] + weight < row[to] {
                    row[to] = row[from] + weight;
                    updated = true;
                }
            }
            if !updated {
                break;
            }
        }
    }
    Some(costs)
}

fn random_graphs(negative_ratio: f64) -> impl Iterator<Item = DiGraph<String>> {
    (0..NUM_TRIALS).map(move |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let num_nodes = 5 + (seed as usize % 20);
        let config = RandomGraphConfig::new(num_nodes, num_nodes * 3).negative_ratio(negative_ratio);
        generate(&config, &mut rng).unwrap()
    })
}

#[test]
fn test_matches_bellman_ford() {
    let mut num_cycles = 0;
    let mut num_solved = 0;
    // Mostly acyclic in negative weights, then mostly with negative cycles.
    for graph in random_graphs(0.02).chain(random_graphs(0.5)) {
        let n = graph.num_nodes();
        let result = ShortestPaths::solve(&graph, PathMode::WithPaths);
        match reference_costs(&graph) {
            None => {
                assert!(result.unwrap_err().is_negative_cycle());
                num_cycles += 1;
            }
            Some(expected) => {
                let paths = result.unwrap();
                for (ij, &cost) in paths.costs().iter().enumerate() {
                    if expected[ij] == i64::MAX {
                        assert_eq!(cost, INFINITE_COST);
                    } else {
                        assert_eq!(i64::from(cost), expected[ij], "{} -> {}", ij / n, ij % n);
                    }
                }
                num_solved += 1;
            }
        }
    }
    // Both outcomes should be exercised by the fixed seeds.
    assert!(num_cycles > 0);
    assert!(num_solved > 0);
}

#[test]
fn test_diagonal_and_triangle_inequality() {
    for graph in random_graphs(0.02) {
        let paths = match ShortestPaths::solve(&graph, PathMode::WithoutPaths) {
            Ok(paths) => paths,
            Err(e) => {
                assert!(e.is_negative_cycle());
                continue;
            }
        };
        let n = paths.num_nodes();
        for i in 0..n {
            assert_eq!(paths.cost(i, i), Some(0));
            for j in 0..n {
                for k in 0..n {
                    if let (Some(ik), Some(kj)) = (paths.cost(i, k), paths.cost(k, j)) {
                        let ij = paths.cost(i, j).unwrap();
                        assert!(ij <= ik + kj);
                    }
                }
            }
        }
    }
}

#[test]
fn test_paths_sum_to_costs() {
    for graph in random_graphs(0.02) {
        let paths = match ShortestPaths::solve(&graph, PathMode::WithPaths) {
            Ok(paths) => paths,
            Err(_) => continue,
        };
        let n = paths.num_nodes();
        for from in 0..n {
            for to in 0..n {
                let cost = match paths.cost(from, to) {
                    Some(cost) => cost,
                    None => {
                        assert!(paths.path(from, to).is_err());
                        assert_eq!(paths.successor(from, to), None);
                        continue;
                    }
                };
                let path: Vec<_> = paths.path(from, to).unwrap().collect();
                assert_eq!(path.first(), Some(&from));
                assert_eq!(path.last(), Some(&to));

                let mut visited = vec![false; n];
                for &node in &path {
                    assert!(!visited[node], "{from} -> {to} repeats {node}");
                    visited[node] = true;
                }

                let sum: i32 = path
                    .windows(2)
                    .map(|w| graph.edge_weight(w[0], w[1]).unwrap())
                    .sum();
                assert_eq!(sum, cost);
            }
        }
    }
}

#[test]
fn test_deterministic() {
    for graph in random_graphs(0.02) {
        let a = ShortestPaths::solve(&graph, PathMode::WithPaths);
        let b = ShortestPaths::solve(&graph, PathMode::WithPaths);
        let c = ShortestPaths::solve(&graph, PathMode::WithoutPaths);
        match (a, b, c) {
            (Ok(a), Ok(b), Ok(c)) => {
                assert_eq!(a, b);
                assert_eq!(a.costs(), c.costs());
            }
            (Err(a), Err(b), Err(c)) => {
                assert!(a.is_negative_cycle());
                assert!(b.is_negative_cycle());
                assert!(c.is_negative_cycle());
            }
            _ => panic!("runs on the same graph must agree"),
        }
    }
}
