use core::fmt;
use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// Occupancy sentinel for a cell no route has claimed.
const NO_ROUTE: u8 = u8::MAX;

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Start,
    End,
}

/// [RoutingGrid] holds the fixed wall layout as a [BoolGrid] (a `true` value
/// means the space is a wall) together with the occupancy overlay recording
/// which route, if any, claimed each cell. The overlay is the only part that
/// accumulates while routes are being found; walls never change during a run.
/// Components of the wall layout are maintained in a [UnionFind] structure for
/// fast unreachability checks. Implements [Grid] by building on [BoolGrid].
#[derive(Clone, Debug)]
pub struct RoutingGrid {
    pub walls: BoolGrid,
    /// Route index per cell, with [NO_ROUTE] meaning unclaimed. Bounds the
    /// number of routes at 255.
    occupancy: SimpleGrid<u8>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    start: Option<Point>,
    end: Option<Point>,
}

/// The four grid-aligned neighbours of a point, clockwise from up.
fn neumann_neighbours(point: Point) -> [Point; 4] {
    [
        Point::new(point.x, point.y - 1),
        Point::new(point.x + 1, point.y),
        Point::new(point.x, point.y + 1),
        Point::new(point.x - 1, point.y),
    ]
}

impl Default for RoutingGrid {
    fn default() -> RoutingGrid {
        RoutingGrid {
            walls: BoolGrid::default(),
            occupancy: SimpleGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
            start: None,
            end: None,
        }
    }
}

impl RoutingGrid {
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.walls.index_in_bounds(x as usize, y as usize)
    }

    /// Classifies an in-bounds position.
    pub fn kind(&self, point: Point) -> CellKind {
        if self.start == Some(point) {
            CellKind::Start
        } else if self.end == Some(point) {
            CellKind::End
        } else if self.walls.get_point(point) {
            CellKind::Wall
        } else {
            CellKind::Empty
        }
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Registers the route origin. The caller guarantees a non-wall, in-bounds
    /// position distinct from the end.
    pub fn set_start(&mut self, point: Point) {
        debug_assert!(self.in_bounds(point.x, point.y) && !self.walls.get_point(point));
        self.start = Some(point);
    }

    /// Registers the route target. The caller guarantees a non-wall, in-bounds
    /// position distinct from the start.
    pub fn set_end(&mut self, point: Point) {
        debug_assert!(self.in_bounds(point.x, point.y) && !self.walls.get_point(point));
        self.end = Some(point);
    }

    /// The route index claiming a cell, if any.
    pub fn occupancy(&self, point: Point) -> Option<usize> {
        match self.occupancy.get_point(point) {
            NO_ROUTE => None,
            ix => Some(ix as usize),
        }
    }

    /// Claims a cell for the route with the given index, making it an obstacle
    /// for every later search.
    pub fn stamp(&mut self, point: Point, route_ix: usize) {
        debug_assert!(self.in_bounds(point.x, point.y) && !self.walls.get_point(point));
        debug_assert!(route_ix < NO_ROUTE as usize);
        self.occupancy.set_point(point, route_ix as u8);
    }

    /// Resets the occupancy overlay, releasing every claimed cell.
    pub fn clear_occupancy(&mut self) {
        self.occupancy = SimpleGrid::new(self.walls.width, self.walls.height, NO_ROUTE);
    }

    /// Resets everything except the wall layout: occupancy is released and the
    /// registered endpoints are forgotten.
    pub fn clear(&mut self) {
        self.clear_occupancy();
        self.start = None;
        self.end = None;
    }

    /// The validity predicate used by search: a position can be entered if it
    /// is in bounds, not a wall, and either unclaimed or the designated target.
    /// The target override keeps the shared end cell reachable no matter which
    /// route claimed its surroundings.
    pub fn is_traversable(&self, pos: Point, target: Point) -> bool {
        if !self.in_bounds(pos.x, pos.y) || self.walls.get_point(pos) {
            return false;
        }
        pos == target || self.occupancy(pos).is_none()
    }

    /// Traversable grid-aligned neighbours of a position with their move cost.
    pub fn pathfinding_neighbours(&self, pos: Point, target: Point) -> Vec<(Point, i32)> {
        neumann_neighbours(pos)
            .into_iter()
            .filter(|&p| self.is_traversable(p, target))
            .map(|p| (p, 1))
            .collect::<Vec<_>>()
    }

    fn open(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.walls.get_point(pos)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on different components of the wall
    /// layout. Occupancy is deliberately ignored here: claimed cells only ever
    /// shrink reachability, so disconnected wall components remain a sound
    /// reason to skip a search, while connected ones prove nothing.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to
    /// the same components. Only walls count; the 4-neighbourhood matches the
    /// movement rule.
    pub fn generate_components(&mut self) {
        let w = self.walls.width;
        let h = self.walls.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.walls.get_point(point) {
                    let parent_ix = self.walls.get_ix(x as usize, y as usize);
                    for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                        if self.open(p) {
                            self.components.union(parent_ix, self.get_ix_point(&p));
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for RoutingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.walls.height as i32 {
            for x in 0..self.walls.width as i32 {
                let p = Point::new(x, y);
                let c = match self.kind(p) {
                    CellKind::Start => 'S',
                    CellKind::End => 'E',
                    CellKind::Wall => '#',
                    CellKind::Empty => match self.occupancy(p) {
                        Some(ix) => char::from_digit((ix % 10) as u32, 10).unwrap_or('?'),
                        None => '.',
                    },
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<bool> for RoutingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        RoutingGrid {
            walls: BoolGrid::new(width, height, default_value),
            occupancy: SimpleGrid::new(width, height, NO_ROUTE),
            components: UnionFind::new(width * height),
            components_dirty: false,
            start: None,
            end: None,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.walls.get(x, y)
    }
    /// Updates a wall on the grid. Joins newly connected components and flags
    /// the components as dirty if components are (potentially) broken apart
    /// into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let p = Point::new(x as i32, y as i32);
        if self.walls.get(x, y) != blocked && blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.walls.get_ix(x, y);
            for n in neumann_neighbours(p) {
                if self.open(n) {
                    self.components.union(p_ix, self.get_ix_point(&n));
                }
            }
        }
        self.walls.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.walls.width()
    }
    fn height(&self) -> usize {
        self.walls.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components.
    #[test]
    fn component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = RoutingGrid::new(3, 2, false);
        grid.set(1, 0, true);
        grid.set(1, 1, true);
        grid.generate_components();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(!grid.components.equiv(grid.get_ix_point(&p1), grid.get_ix_point(&p2)));
        assert!(grid.components.equiv(grid.get_ix_point(&p1), grid.get_ix_point(&p3)));
        assert!(!grid.components.equiv(grid.get_ix_point(&p1), grid.get_ix_point(&p4)));
        assert!(grid.unreachable(&p1, &p4));
        assert!(grid.reachable(&p1, &p3));
        assert_eq!(grid.get_component(&p1), grid.get_component(&p3));
    }

    /// Diagonal adjacency must not connect components under 4-directional movement.
    #[test]
    fn no_diagonal_connection() {
        //  __
        // | #|
        // |# |
        //  __
        let mut grid = RoutingGrid::new(2, 2, true);
        grid.set(0, 0, false);
        grid.set(1, 1, false);
        grid.generate_components();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn classification() {
        let mut grid = RoutingGrid::new(3, 3, false);
        grid.set(1, 1, true);
        grid.set_start(Point::new(0, 0));
        grid.set_end(Point::new(2, 2));
        assert_eq!(grid.kind(Point::new(0, 0)), CellKind::Start);
        assert_eq!(grid.kind(Point::new(2, 2)), CellKind::End);
        assert_eq!(grid.kind(Point::new(1, 1)), CellKind::Wall);
        assert_eq!(grid.kind(Point::new(1, 0)), CellKind::Empty);
    }

    #[test]
    fn stamp_and_clear() {
        let mut grid = RoutingGrid::new(3, 3, false);
        let p = Point::new(1, 1);
        assert_eq!(grid.occupancy(p), None);
        grid.stamp(p, 2);
        assert_eq!(grid.occupancy(p), Some(2));
        grid.clear_occupancy();
        assert_eq!(grid.occupancy(p), None);
    }

    /// The target override: a claimed cell blocks search unless it is the target.
    #[test]
    fn traversable_target_override() {
        let mut grid = RoutingGrid::new(3, 3, false);
        grid.set(1, 0, true);
        let target = Point::new(2, 2);
        let claimed = Point::new(1, 1);
        grid.stamp(claimed, 0);
        grid.stamp(target, 0);
        assert!(!grid.is_traversable(Point::new(1, 0), target));
        assert!(!grid.is_traversable(claimed, target));
        assert!(grid.is_traversable(target, target));
        assert!(!grid.is_traversable(Point::new(-1, 0), target));
        assert!(grid.is_traversable(Point::new(0, 1), target));
    }

    /// A wall-preserving reset forgets endpoints and occupancy, nothing else.
    #[test]
    fn clear_preserves_walls() {
        let mut grid = RoutingGrid::new(4, 4, false);
        grid.set(2, 2, true);
        grid.set_start(Point::new(0, 0));
        grid.set_end(Point::new(3, 3));
        grid.stamp(Point::new(1, 0), 0);
        grid.clear();
        assert!(grid.get(2, 2));
        assert_eq!(grid.start(), None);
        assert_eq!(grid.end(), None);
        assert_eq!(grid.occupancy(Point::new(1, 0)), None);
        assert_eq!(grid.kind(Point::new(0, 0)), CellKind::Empty);
    }
}
