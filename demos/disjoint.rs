use grid_disjoint_paths::{DisjointRouter, RoutingGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this demo three interior-disjoint routes are found on an open 5x5 grid
// between the middle cells of the left and right edges. The first route takes
// the straight middle row; the later ones are forced onto detours above and
// below it. Printing the grid afterwards shows each interior cell tagged with
// the index of the route that claimed it.

fn main() {
    let mut grid: RoutingGrid = RoutingGrid::new(5, 5, false);
    grid.generate_components();
    let start = Point::new(0, 2);
    let end = Point::new(4, 2);
    grid.set_start(start);
    grid.set_end(end);
    let router = DisjointRouter::new(3);
    let paths = router.find_paths(&mut grid, start, end);
    for (i, path) in paths.iter().enumerate() {
        println!("Route {} cost: {}", i, path.cost);
    }
    println!();
    println!("{}", grid);
}
