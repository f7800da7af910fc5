use super::sample::mean_squared_error;
use image::RgbImage;
use log::debug;

/// Candidate pair `(i, j)`, `i < j`, with its dissimilarity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchEdge {
    pub i: usize,
    pub j: usize,
    pub mse: f64,
}

/// Labels produced by [`assign_groups`].
#[derive(Clone, Debug, Default)]
pub struct GroupAssignment {
    pub labels: Vec<u32>,
    /// Edges accepted by the greedy pass, in acceptance order.
    pub matched: Vec<MatchEdge>,
    pub candidate_edges: usize,
}

/// Pair samples greedily, best match first.
///
/// Every unordered pair under `threshold` becomes an edge. Edges are sorted
/// by ascending MSE (stable, so equal scores keep `(i, j)` enumeration order)
/// and accepted when both endpoints are still free. Accepted pairs get ids
/// `1, 2, …` in acceptance order; every remaining sample then gets the next
/// unused id in index order.
pub fn assign_groups(samples: &[RgbImage], threshold: f64) -> GroupAssignment {
    let n = samples.len();
    let mut edges = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            let mse = mean_squared_error(&samples[i], &samples[j]);
            if mse < threshold {
                edges.push(MatchEdge { i, j, mse });
            }
        }
    }
    edges.sort_by(|a, b| a.mse.total_cmp(&b.mse));

    let mut labels = vec![0u32; n];
    let mut used = vec![false; n];
    let mut matched = Vec::new();
    let mut next_label = 1u32;
    for edge in &edges {
        if used[edge.i] || used[edge.j] {
            continue;
        }
        labels[edge.i] = next_label;
        labels[edge.j] = next_label;
        used[edge.i] = true;
        used[edge.j] = true;
        next_label += 1;
        debug!("matched {} and {} with MSE {:.2}", edge.i, edge.j, edge.mse);
        matched.push(*edge);
    }

    for label in labels.iter_mut().filter(|l| **l == 0) {
        *label = next_label;
        next_label += 1;
    }

    GroupAssignment {
        labels,
        matched,
        candidate_edges: edges.len(),
    }
}
