use grid_disjoint_paths::{DisjointRouter, RoutingGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this demo a single route is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood

fn main() {
    let mut grid: RoutingGrid = RoutingGrid::new(3, 3, false);
    grid.set(1, 1, true);
    grid.generate_components();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let router = DisjointRouter::new(1);
    let path = router.shortest_path(&grid, start, end).unwrap();
    println!("Route (cost {}):", path.cost);
    for p in path.points {
        println!("{:?}", p);
    }
}
