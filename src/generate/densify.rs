use std::collections::BTreeSet;

use itertools::Itertools;

use crate::rng::RandomSource;
use crate::{DeviceGraph, Edge};

use super::canonical;

/// Adds random links to `edges` until it holds `target` of them.
///
/// `target` must not exceed the number of links of the complete graph on
/// `num_devices` devices.
///
/// Sparse targets use rejection sampling: pairs of devices are drawn
/// uniformly, discarding self-loops and existing links. Once the target is
/// above half of the complete graph, the missing links are instead
/// enumerated and a random subset of them is added, so the number of draws
/// stays bounded.
pub(super) fn densify<R: RandomSource>(
    num_devices: usize,
    target: usize,
    rng: &mut R,
    edges: &mut BTreeSet<Edge>,
) {
    if edges.len() >= target {
        return;
    }
    let max_links = DeviceGraph::max_links(num_devices);
    debug_assert!(target <= max_links);

    if target.saturating_mul(2) <= max_links {
        rejection_sample(num_devices, target, rng, edges);
    } else {
        fill_from_complement(num_devices, target, rng, edges);
    }
}

fn rejection_sample<R: RandomSource>(
    num_devices: usize,
    target: usize,
    rng: &mut R,
    edges: &mut BTreeSet<Edge>,
) {
    while edges.len() < target {
        let a = rng.index(num_devices);
        let b = rng.index(num_devices);
        if let Some(edge) = canonical(a, b) {
            edges.insert(edge);
        }
    }
}

fn fill_from_complement<R: RandomSource>(
    num_devices: usize,
    target: usize,
    rng: &mut R,
    edges: &mut BTreeSet<Edge>,
) {
    let mut missing: Vec<Edge> = (0..num_devices)
        .tuple_combinations()
        .filter_map(|(a, b)| canonical(a, b))
        .filter(|edge| !edges.contains(edge))
        .collect();
    rng.shuffle(&mut missing);

    let needed = target - edges.len();
    edges.extend(missing.into_iter().take(needed));
}
