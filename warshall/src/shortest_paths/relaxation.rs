use crate::common::INFINITE_COST;
use crate::errors::{Result, WarshallError};

/// Bookkeeping of next hops during relaxation.
///
/// The relaxation loop is generic over this trait so that a costs-only run
/// compiles to a loop without any successor access.
pub trait Successors {
    fn update(&mut self, ij: usize, ik: usize);
}

/// No successor matrix.
pub struct CostsOnly;

impl Successors for CostsOnly {
    #[inline(always)]
    fn update(&mut self, _ij: usize, _ik: usize) {}
}

impl Successors for [u32] {
    #[inline(always)]
    fn update(&mut self, ij: usize, ik: usize) {
        self[ij] = self[ik];
    }
}

/// Relaxes all pairs through every intermediate node in increasing order.
///
/// After the `k`-th outer iteration, `costs[i * n + j]` is the shortest cost
/// from `i` to `j` using only intermediate nodes in `0..=k`.
/// A candidate replaces the current cost only if it is strictly smaller.
///
/// # Errors
///
/// [`WarshallError::NegativeCycle`] is returned as soon as an iteration leaves
/// a negative cost on the diagonal. [`WarshallError::InvalidArgument`] is
/// returned when a shorter cost does not fit in `i32` below [`INFINITE_COST`].
pub fn relax<S>(costs: &mut [i32], num_nodes: usize, successors: &mut S) -> Result<()>
where
    S: Successors + ?Sized,
{
    let n = num_nodes;
    debug_assert_eq!(costs.len(), n * n);

    for k in 0..n {
        for i in 0..n {
            let ik = i * n + k;
            if costs[ik] == INFINITE_COST {
                continue;
            }
            for j in 0..n {
                // Reads costs[ik] again since it changes during the row i == k
                // when the node k lies on a negative cycle.
                let cost_ik = costs[ik];
                let cost_kj = costs[k * n + j];
                if cost_kj == INFINITE_COST {
                    continue;
                }
                let sum = i64::from(cost_ik) + i64::from(cost_kj);
                let ij = i * n + j;
                if sum < i64::from(costs[ij]) {
                    let new_cost = match i32::try_from(sum) {
                        Ok(cost) if cost != INFINITE_COST => cost,
                        _ => return Err(overflow(costs, n, i, j, sum)),
                    };
                    costs[ij] = new_cost;
                    successors.update(ij, ik);
                }
            }
        }
        if let Some(node) = find_negative_cycle(costs, n) {
            return Err(WarshallError::negative_cycle(node));
        }
    }
    Ok(())
}

/// Returns the first node whose cost to itself is negative.
pub fn find_negative_cycle(costs: &[i32], num_nodes: usize) -> Option<usize> {
    (0..num_nodes).find(|&i| costs[i * num_nodes + i] < 0)
}

fn overflow(costs: &[i32], n: usize, from: usize, to: usize, cost: i64) -> WarshallError {
    // Costs only run away below i32::MIN around a negative cycle.
    if from == to && cost < 0 {
        return WarshallError::negative_cycle(from);
    }
    if let Some(node) = find_negative_cycle(costs, n) {
        return WarshallError::negative_cycle(node);
    }
    WarshallError::invalid_argument(
        "graph",
        format!("The cost {cost} of the path {from} -> {to} does not fit in i32"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: i32 = INFINITE_COST;

    #[test]
    fn test_relax_chain() {
        // 0 -1-> 1 -2-> 2, 0 -10-> 2
        let mut costs = vec![0, 1, 10, INF, 0, 2, INF, INF, 0];
        let mut succs = vec![u32::MAX, 1, 2, u32::MAX, u32::MAX, 2, u32::MAX, u32::MAX, u32::MAX];
        relax(&mut costs, 3, succs.as_mut_slice()).unwrap();
        assert_eq!(costs, vec![0, 1, 3, INF, 0, 2, INF, INF, 0]);
        assert_eq!(succs[2], 1);
    }

    #[test]
    fn test_relax_costs_only() {
        let mut costs = vec![0, 1, 10, INF, 0, 2, INF, INF, 0];
        relax(&mut costs, 3, &mut CostsOnly).unwrap();
        assert_eq!(costs, vec![0, 1, 3, INF, 0, 2, INF, INF, 0]);
    }

    #[test]
    fn test_relax_tie() {
        // Both 0 -> 1 -> 2 and 0 -> 2 cost 2. The direct edge is kept.
        let mut costs = vec![0, 1, 2, INF, 0, 1, INF, INF, 0];
        let mut succs = vec![u32::MAX, 1, 2, u32::MAX, u32::MAX, 2, u32::MAX, u32::MAX, u32::MAX];
        relax(&mut costs, 3, succs.as_mut_slice()).unwrap();
        assert_eq!(costs[2], 2);
        assert_eq!(succs[2], 2);
    }

    #[test]
    fn test_relax_positive_overflow() {
        // 0 -> 1 -> 2 costs 2 * (i32::MAX - 1) and is the only path.
        let mut costs = vec![0, i32::MAX - 1, INF, INF, 0, i32::MAX - 1, INF, INF, 0];
        let result = relax(&mut costs, 3, &mut CostsOnly);
        assert!(matches!(result, Err(WarshallError::InvalidArgument(_))));
    }

    #[test]
    fn test_relax_sum_to_infinite_cost() {
        // A real path of cost i32::MAX cannot be told apart from no path.
        let mut costs = vec![0, i32::MAX - 1, INF, INF, 0, 1, INF, INF, 0];
        let result = relax(&mut costs, 3, &mut CostsOnly);
        assert!(matches!(result, Err(WarshallError::InvalidArgument(_))));
    }

    #[test]
    fn test_relax_negative_overflow() {
        let mut costs = vec![0, i32::MIN, INF, INF, 0, -5, INF, INF, 0];
        let result = relax(&mut costs, 3, &mut CostsOnly);
        assert!(matches!(result, Err(WarshallError::InvalidArgument(_))));
    }

    #[test]
    fn test_relax_large_sum_not_shorter() {
        // The overflowing detour is longer than the direct edge and is ignored.
        let mut costs = vec![0, i32::MAX - 1, 5, INF, 0, i32::MAX - 1, INF, INF, 0];
        relax(&mut costs, 3, &mut CostsOnly).unwrap();
        assert_eq!(costs[2], 5);
    }

    #[test]
    fn test_relax_negative_cycle() {
        // 0 -> 1 -> 0 costs -6. Node 1 is the first to see it on the diagonal.
        let mut costs = vec![0, -3, -3, 0];
        let result = relax(&mut costs, 2, &mut CostsOnly);
        match result {
            Err(WarshallError::NegativeCycle(e)) => assert_eq!(e.node(), 1),
            _ => panic!("a negative cycle must be detected"),
        }
    }

    #[test]
    fn test_find_negative_cycle() {
        assert_eq!(find_negative_cycle(&[0, 1, 2, 0], 2), None);
        assert_eq!(find_negative_cycle(&[0, 1, 2, -1], 2), Some(1));
        assert_eq!(find_negative_cycle(&[], 0), None);
    }

    #[test]
    fn test_relax_empty() {
        let mut costs: Vec<i32> = vec![];
        relax(&mut costs, 0, &mut CostsOnly).unwrap();
        assert!(costs.is_empty());
    }
}
