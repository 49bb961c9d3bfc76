//! Functions to encode a `DeviceGraph` in dot format.

use crate::{DeviceGraph, Edge, NodeIndex, SpeedClass};

use super::{EdgeStyle, NodeStyle};

/// Encode a `DeviceGraph` in dot format, with the default styles.
///
/// Every device is drawn as a box labelled with its index, and every link
/// is labelled with its speed class. Faster links are drawn thicker.
pub fn dot_string(graph: &DeviceGraph) -> String {
    DotFormatter::new(graph).finish()
}

/// Configurable dot formatter for a `DeviceGraph`.
pub struct DotFormatter<'g> {
    graph: &'g DeviceGraph,
    node_style: Option<Box<dyn FnMut(NodeIndex) -> NodeStyle + 'g>>,
    edge_style: Option<Box<dyn FnMut(Edge, SpeedClass) -> EdgeStyle + 'g>>,
}

impl<'g> DotFormatter<'g> {
    /// Initialize a new `DotFormatter` for `graph`.
    pub fn new(graph: &'g DeviceGraph) -> Self {
        Self {
            graph,
            node_style: None,
            edge_style: None,
        }
    }

    /// Set the function to use to get the style of a device.
    pub fn with_node_style(mut self, node_style: impl FnMut(NodeIndex) -> NodeStyle + 'g) -> Self {
        self.node_style = Some(Box::new(node_style));
        self
    }

    /// Set the function to use to get the style of a link.
    pub fn with_edge_style(
        mut self,
        edge_style: impl FnMut(Edge, SpeedClass) -> EdgeStyle + 'g,
    ) -> Self {
        self.edge_style = Some(Box::new(edge_style));
        self
    }

    /// Encode the graph in dot format.
    pub fn finish(mut self) -> String {
        let mut dot = String::new();

        dot.push_str("graph {\n");
        let shown = self.node_strings(&mut dot);
        self.edge_strings(&mut dot, &shown);
        dot.push_str("}\n");

        dot
    }

    fn node_style(&mut self, node: NodeIndex) -> NodeStyle {
        self.node_style
            .as_mut()
            .map(|f| f(node))
            .unwrap_or_else(|| NodeStyle::new(node.index()))
    }

    fn edge_style(&mut self, edge: Edge, speed: SpeedClass) -> EdgeStyle {
        self.edge_style
            .as_mut()
            .map(|f| f(edge, speed))
            .unwrap_or_default()
    }

    /// Append the visible devices, returning which devices were shown.
    fn node_strings(&mut self, dot: &mut String) -> Vec<bool> {
        let graph = self.graph;
        let mut shown = vec![false; graph.node_count()];
        for node in graph.nodes() {
            let NodeStyle::Boxed(label) = self.node_style(node) else {
                continue;
            };
            shown[node.index()] = true;
            dot.push_str(&format!(
                "{} [shape=box label=\"{}\"]\n",
                node.index(),
                escape(&label)
            ));
        }
        shown
    }

    fn edge_strings(&mut self, dot: &mut String, shown: &[bool]) {
        let graph = self.graph;
        for (edge, speed) in graph.links() {
            let (low, high) = edge.endpoints();
            if !shown[low.index()] || !shown[high.index()] {
                continue;
            }
            let style = self.edge_style(edge, speed);
            let style = match style.as_dot_str() {
                "" => String::new(),
                s => format!(" style=\"{s}\""),
            };
            dot.push_str(&format!(
                "{} -- {} [label=\"{speed}\" penwidth={}{style}]\n",
                low.index(),
                high.index(),
                pen_width(speed),
            ));
        }
    }
}

/// Line width of a link, growing with its bandwidth.
fn pen_width(speed: SpeedClass) -> u8 {
    match speed {
        SpeedClass::TenGigabit => 4,
        SpeedClass::Gigabit => 3,
        SpeedClass::HundredMegabit => 2,
        SpeedClass::TenMegabit => 1,
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
