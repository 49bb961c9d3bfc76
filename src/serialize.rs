//! Serialization definition for [`DeviceGraph`].
//!
//! A network serializes to its device count and its list of links, each link
//! given as a `(low, high, speed)` tuple in canonical order.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{DeviceGraph, NodeIndex, SpeedClass};

#[derive(Serialize, Deserialize)]
struct SerDeviceGraph {
    devices: usize,
    links: Vec<(usize, usize, u8)>,
}

impl From<&DeviceGraph> for SerDeviceGraph {
    fn from(graph: &DeviceGraph) -> Self {
        let links = graph
            .links()
            .map(|(edge, speed)| (edge.low().index(), edge.high().index(), speed.value()))
            .collect();
        Self {
            devices: graph.node_count(),
            links,
        }
    }
}

impl TryFrom<SerDeviceGraph> for DeviceGraph {
    type Error = String;

    fn try_from(SerDeviceGraph { devices, links }: SerDeviceGraph) -> Result<Self, Self::Error> {
        if devices.saturating_sub(1) > NodeIndex::MAX {
            return Err(format!("too many devices: {devices}"));
        }
        let mut graph = DeviceGraph::new(devices);
        for (a, b, speed) in links {
            let speed = SpeedClass::try_from(speed).map_err(|e| e.to_string())?;
            let a = NodeIndex::try_from(a).map_err(|e| e.to_string())?;
            let b = NodeIndex::try_from(b).map_err(|e| e.to_string())?;
            graph
                .add_link(a, b, speed)
                .map_err(|e| e.to_string())?;
        }
        Ok(graph)
    }
}

impl Serialize for DeviceGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerDeviceGraph::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DeviceGraph {
    fn deserialize<D>(deserializer: D) -> Result<DeviceGraph, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ser = SerDeviceGraph::deserialize(deserializer)?;
        DeviceGraph::try_from(ser).map_err(de::Error::custom)
    }
}
