//! # grid_disjoint_paths
//!
//! Vertex-disjoint route computation on a uniform-cost grid. Runs repeated
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) searches
//! over a 4-connected obstacle grid, claiming each found route's interior
//! cells as obstacles before the next search runs, so that no two routes
//! share a cell beyond the common endpoints. Construction is greedy and
//! sequential: each route is the shortest one the grid still admits, with no
//! global minimum-total-cost guarantee. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! of the wall layout to avoid flood-filling behaviour if no path exists.
mod dijkstra;
pub mod router;
pub mod routing_grid;
pub mod session;

pub use router::{DisjointRouter, GridPath};
pub use routing_grid::{CellKind, RoutingGrid};
pub use session::{RoutingSession, SelectOutcome, SessionConfig};
