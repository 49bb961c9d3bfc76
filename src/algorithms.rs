//! Algorithm implementations for device networks.

mod bfs;
mod routing;

pub use bfs::{bfs, connected_components, is_connected, Bfs};
pub use routing::{routing_table, routing_tables, Route, RoutingTable};
