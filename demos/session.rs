use grid_disjoint_paths::{RoutingSession, SelectOutcome, SessionConfig};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

// Drives a full routing session: a random 20x15 wall layout, start and end
// selection, the disjoint-route computation, then a wall-preserving reset and
// a second round on the same layout.

fn open_cells(session: &RoutingSession) -> Vec<Point> {
    let mut cells = Vec::new();
    for y in 0..session.grid.height() as i32 {
        for x in 0..session.grid.width() as i32 {
            if !session.grid.get(x as usize, y as usize) {
                cells.push(Point::new(x, y));
            }
        }
    }
    cells
}

fn route_between(session: &mut RoutingSession, start: Point, end: Point) {
    assert_eq!(session.select(start), SelectOutcome::StartPlaced);
    match session.select(end) {
        SelectOutcome::Routed(found) => println!("{} routes found", found),
        outcome => println!("end selection ignored: {:?}", outcome),
    }
    for (i, path) in session.paths().iter().enumerate() {
        println!("Route {} cost: {}", i, path.cost);
    }
    println!();
    println!("{}", session.grid);
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = RoutingSession::new(SessionConfig::default(), &mut rng);
    let open = open_cells(&session);
    let start = open[0];
    let end = *open.last().unwrap();

    route_between(&mut session, start, end);

    // Same walls, fresh occupancy: the identical request routes again.
    session.clear();
    println!("--- after clear ---");
    route_between(&mut session, start, end);
}
