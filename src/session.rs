use grid_util::grid::Grid;
use grid_util::point::Point;
use log::info;
use rand::Rng;

use crate::router::{DisjointRouter, GridPath};
use crate::routing_grid::{CellKind, RoutingGrid};

/// Session parameters. The defaults match the classic 20x15 board with a
/// quarter of the cells walled and five routes requested.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    /// Probability for each cell to come out as a wall when a layout is
    /// generated.
    pub wall_density: f64,
    pub max_paths: usize,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            width: 20,
            height: 15,
            wall_density: 0.25,
            max_paths: 5,
        }
    }
}

/// What a call to [RoutingSession::select] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The start cell was registered.
    StartPlaced,
    /// The end cell was registered and routing ran; carries the number of
    /// routes found.
    Routed(usize),
    /// The selection was not usable (wall, out of bounds, the current start,
    /// or routing already done) and nothing changed.
    Ignored,
}

/// [RoutingSession] drives a [RoutingGrid] through the select-route-reset
/// cycle: the first selected cell becomes the start, the second becomes the
/// end and immediately triggers the disjoint-route computation. Afterwards the
/// session accepts no further selections until it is cleared (same walls) or
/// regenerated (new random walls).
#[derive(Clone, Debug)]
pub struct RoutingSession {
    pub grid: RoutingGrid,
    router: DisjointRouter,
    config: SessionConfig,
    paths: Vec<GridPath>,
    routed: bool,
}

impl RoutingSession {
    pub fn new<R: Rng>(config: SessionConfig, rng: &mut R) -> RoutingSession {
        let mut session = RoutingSession {
            grid: RoutingGrid::new(config.width, config.height, false),
            router: DisjointRouter::new(config.max_paths),
            config,
            paths: Vec::new(),
            routed: false,
        };
        session.regenerate(rng);
        session
    }

    /// The routes found by the last completed computation, in discovery order.
    pub fn paths(&self) -> &[GridPath] {
        &self.paths
    }

    /// Whether the route computation has run since the last reset.
    pub fn is_routed(&self) -> bool {
        self.routed
    }

    /// Selects a cell. The first usable selection places the start, the second
    /// places the end and runs the route computation. Selections on walls,
    /// out-of-bounds cells or the current start are ignored, as is everything
    /// once routing has run.
    pub fn select(&mut self, point: Point) -> SelectOutcome {
        if !self.grid.in_bounds(point.x, point.y) {
            return SelectOutcome::Ignored;
        }
        if self.routed {
            info!("routes already computed, clear or regenerate first");
            return SelectOutcome::Ignored;
        }
        if self.grid.kind(point) == CellKind::Wall {
            return SelectOutcome::Ignored;
        }
        let start = match self.grid.start() {
            None => {
                self.grid.set_start(point);
                info!("start set at {}", point);
                return SelectOutcome::StartPlaced;
            }
            Some(start) => start,
        };
        if start == point {
            return SelectOutcome::Ignored;
        }
        self.grid.set_end(point);
        info!("end set at {}", point);
        self.grid.update();
        info!("finding up to {} disjoint routes", self.router.max_paths);
        self.paths = self.router.find_paths(&mut self.grid, start, point);
        self.routed = true;
        info!("route search complete, {} found", self.paths.len());
        SelectOutcome::Routed(self.paths.len())
    }

    /// Generates a fresh random wall layout and resets endpoints, occupancy
    /// and any previously found routes.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                self.grid.set(x, y, rng.gen_bool(self.config.wall_density));
            }
        }
        self.grid.clear();
        self.grid.generate_components();
        self.paths.clear();
        self.routed = false;
    }

    /// Resets endpoints, occupancy and found routes while keeping the current
    /// wall layout.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.paths.clear();
        self.routed = false;
    }
}
