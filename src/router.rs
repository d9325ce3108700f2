use grid_util::point::Point;
use log::info;

use crate::dijkstra::dijkstra_search;
use crate::routing_grid::RoutingGrid;

/// A single route across the grid: the full cell sequence from start to end
/// inclusive, plus its cost in moves. With every move costing one, the cost
/// always equals `points.len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPath {
    pub points: Vec<Point>,
    pub cost: i32,
}

impl GridPath {
    /// The route cells between the endpoints. These are the cells a route
    /// claims for itself; the shared endpoints are never claimed.
    pub fn interior(&self) -> &[Point] {
        if self.points.len() <= 2 {
            &[]
        } else {
            &self.points[1..self.points.len() - 1]
        }
    }
}

/// [DisjointRouter] finds up to `max_paths` shortest routes between two cells
/// such that no two routes share an interior cell. Routes are constructed
/// greedily: each search runs on the grid as left behind by its predecessors,
/// so every route is only locally optimal and the set as a whole carries no
/// minimum-total-cost guarantee. No rerouting of earlier routes is attempted
/// when a later search comes up empty.
#[derive(Clone, Debug)]
pub struct DisjointRouter {
    pub max_paths: usize,
}

impl DisjointRouter {
    pub fn new(max_paths: usize) -> DisjointRouter {
        DisjointRouter { max_paths }
    }

    /// Computes the shortest route from start to end under 4-directional
    /// unit-cost movement, honoring the occupancy left behind by earlier
    /// routes. Returns [None] when no traversable route remains, which is an
    /// expected outcome rather than an error.
    pub fn shortest_path(
        &self,
        grid: &RoutingGrid,
        start: Point,
        end: Point,
    ) -> Option<GridPath> {
        // A start claimed by an earlier route or placed on a wall cannot be
        // expanded; fail without running the search.
        if !grid.is_traversable(start, end) {
            info!("start {} is blocked, no search performed", start);
            return None;
        }
        // Check if start and end are on the same wall component.
        if grid.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            return None;
        }
        dijkstra_search(
            &start,
            |node| grid.pathfinding_neighbours(*node, end),
            |node| *node == end,
        )
        .map(|(points, cost)| GridPath { points, cost })
    }

    /// Finds up to `max_paths` interior-disjoint routes from start to end.
    /// After each successful search the route's interior cells are claimed in
    /// the grid's occupancy overlay, so the next search observes them as
    /// obstacles. Stops early once a search comes up empty; the routes found
    /// so far are returned, which may be none at all.
    ///
    /// Route costs come out non-decreasing: claimed cells can only lengthen or
    /// block later routes.
    pub fn find_paths(&self, grid: &mut RoutingGrid, start: Point, end: Point) -> Vec<GridPath> {
        let mut paths: Vec<GridPath> = Vec::new();
        for route_ix in 0..self.max_paths {
            let Some(path) = self.shortest_path(grid, start, end) else {
                info!("no further disjoint route, stopping at {} found", paths.len());
                break;
            };
            info!("route {} found with cost {}", route_ix, path.cost);
            for p in path.interior() {
                grid.stamp(*p, route_ix);
            }
            paths.push(path);
        }
        paths
    }
}
