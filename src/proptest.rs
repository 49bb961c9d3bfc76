//! Strategies for generating random networks in property tests.

use proptest::prelude::*;

use crate::{DeviceGraph, GeneratorConfig, NetworkGenerator, SpeedClass, SpeedDistribution};

/// A random speed class.
pub fn gen_speed_class() -> impl Strategy<Value = SpeedClass> {
    prop::sample::select(SpeedClass::ALL.to_vec())
}

/// A random speed distribution, with at least one class of positive weight.
pub fn gen_speeds() -> impl Strategy<Value = SpeedDistribution> {
    prop::collection::vec(0.0f64..10.0, SpeedClass::ALL.len()).prop_filter_map(
        "at least one positive weight",
        |weights| SpeedDistribution::new(SpeedClass::ALL.into_iter().zip(weights)).ok(),
    )
}

prop_compose! {
    /// A random valid generator configuration
    ///
    ///  - `max_devices` is the maximum number of devices, at least 1
    ///  - `max_degree` is the exclusive upper bound of the average degree
    pub fn gen_config(max_devices: usize, max_degree: f64)(
        devices in 1..=max_devices.max(1),
        degree in 0.0..max_degree,
        speeds in gen_speeds(),
    ) -> GeneratorConfig {
        GeneratorConfig::new(devices, degree)
            .expect("generated configurations are valid")
            .with_speeds(speeds)
    }
}

prop_compose! {
    /// A random connected network
    ///
    /// With at least 1 and at most `max_devices` devices, and an average
    /// degree below `max_degree`.
    pub fn gen_network(max_devices: usize, max_degree: f64)(
        config in gen_config(max_devices, max_degree),
        seed in any::<u64>(),
    ) -> DeviceGraph {
        NetworkGenerator::seeded(seed).generate(&config).into_graph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::algorithms::{bfs, is_connected, routing_tables};
    use crate::format::{parse_network, to_text};
    use crate::NodeIndex;

    proptest! {
        #[test]
        fn gen_networks_are_connected(config in gen_config(60, 12.0), seed in any::<u64>()) {
            let generation = NetworkGenerator::seeded(seed).generate(&config);
            let graph = generation.graph();
            prop_assert_eq!(graph.node_count(), config.num_devices());
            prop_assert_eq!(graph.link_count(), config.target_links());
            prop_assert!(is_connected(graph));
            for (_, speed) in graph.links() {
                prop_assert!(config.speeds().probability(speed) > 0.0);
            }
        }

        #[test]
        fn text_format_roundtrip(graph in gen_network(40, 8.0)) {
            let text = to_text(&graph);
            prop_assert_eq!(parse_network(&text), Ok(graph));
        }

        #[test]
        fn bfs_reaches_everything(graph in gen_network(40, 4.0)) {
            let mut order: Vec<_> = bfs(&graph, NodeIndex::new(0)).collect();
            order.sort();
            prop_assert!(order.into_iter().eq(graph.nodes()));
        }

        #[test]
        fn every_device_has_a_route(graph in gen_network(25, 5.0)) {
            for table in routing_tables(&graph) {
                prop_assert_eq!(table.reachable_count(), graph.node_count());
            }
        }

        #[test]
        fn degrees_sum_to_twice_the_links(graph in gen_network(40, 10.0)) {
            let total: usize = graph.nodes().map(|n| graph.degree(n)).sum();
            prop_assert_eq!(total, 2 * graph.link_count());
        }
    }
}
