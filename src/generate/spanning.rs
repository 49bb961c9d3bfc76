use std::collections::BTreeSet;

use crate::rng::RandomSource;
use crate::Edge;

use super::canonical;

/// Adds the links of a uniformly shuffled random spanning tree over the
/// devices `0..num_devices` to `edges`.
///
/// The devices are shuffled, and each one after the first attaches to a
/// uniformly chosen device earlier in the shuffled order. Every device is
/// thus linked to the component containing the first one.
pub(super) fn spanning_tree<R: RandomSource>(
    num_devices: usize,
    rng: &mut R,
    edges: &mut BTreeSet<Edge>,
) {
    let mut order: Vec<usize> = (0..num_devices).collect();
    rng.shuffle(&mut order);

    for i in 1..order.len() {
        let j = rng.index(i);
        edges.extend(canonical(order[i], order[j]));
    }
}
