//! Collision queries against the maze grid + the axis-separated movement
//! integration used by the live session each frame.

use crate::{Maze, Tile};
use std::rc::Rc;

pub struct CollisionModel {
    maze: Rc<Maze>,
    tile_size: f64,
}

impl CollisionModel {
    pub fn new(maze: Rc<Maze>, tile_size: f64) -> Self {
        assert!(tile_size > 0.0);
        Self { maze, tile_size }
    }

    /// Cell containing the given world position.
    #[inline]
    pub fn cell_at(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x / self.tile_size).floor() as i32,
            (y / self.tile_size).floor() as i32,
        )
    }

    /// Is this world position inside a wall? Everything outside the grid
    /// counts as wall, so the maze is bounded by solid walls on all sides
    /// and movement code needs no border checks.
    #[inline]
    pub fn is_wall(&self, x: f64, y: f64) -> bool {
        let (cx, cy) = self.cell_at(x, y);
        self.maze.tile(cx, cy) == Tile::Wall
    }

    /// Advance a position by one movement step. Each axis is tested and
    /// applied on its own: the Y candidate is checked against the already
    /// updated X, and a blocked axis does not cancel the other one, so
    /// diagonal input slides along walls instead of stopping dead.
    pub fn integrate(&self, pos: (f64, f64), dir: (f64, f64), speed: f64, dt: f64) -> (f64, f64) {
        let (mut x, mut y) = pos;

        let new_x = x + dir.0 * speed * dt;
        if !self.is_wall(new_x, y) {
            x = new_x;
        }
        let new_y = y + dir.1 * speed * dt;
        if !self.is_wall(x, new_y) {
            y = new_y;
        }

        (x, y)
    }
}

/// Scale raw direction components (each -1, 0 or +1) so that diagonal
/// movement is not faster than movement along one axis.
pub fn normalize_dir(dx: f64, dy: f64) -> (f64, f64) {
    if dx != 0.0 && dy != 0.0 {
        let norm = std::f64::consts::FRAC_1_SQRT_2;
        (dx * norm, dy * norm)
    } else {
        (dx, dy)
    }
}

//-------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn open_3x3() -> CollisionModel {
        let maze = Maze::from_tiles(3, 3, vec![Tile::Path; 9]).unwrap();
        CollisionModel::new(Rc::from(maze), 32.0)
    }

    #[test]
    fn cell_mapping_uses_floor_division() {
        let model = open_3x3();
        assert_eq!((0, 0), model.cell_at(0.0, 31.9));
        assert_eq!((1, 2), model.cell_at(32.0, 64.0));
        assert_eq!((-1, -1), model.cell_at(-0.1, -31.9));
        assert_eq!((-2, 3), model.cell_at(-33.0, 96.0));
    }

    #[test]
    fn outside_the_grid_is_solid() {
        let model = open_3x3();
        assert!(model.is_wall(-0.1, 10.0));
        assert!(model.is_wall(10.0, -0.1));
        assert!(model.is_wall(96.0, 10.0));
        assert!(model.is_wall(10.0, 96.0));
        assert!(!model.is_wall(10.0, 10.0));
        assert!(!model.is_wall(95.9, 95.9));
    }

    #[test]
    fn diagonal_speed_equals_axial_speed() {
        let (dx, dy) = normalize_dir(1.0, 1.0);
        let magnitude = (dx * dx + dy * dy).sqrt();
        assert!((magnitude - 1.0).abs() < EPSILON);
        // single-axis input stays untouched
        assert_eq!((1.0, 0.0), normalize_dir(1.0, 0.0));
        assert_eq!((0.0, -1.0), normalize_dir(0.0, -1.0));
        assert_eq!((0.0, 0.0), normalize_dir(0.0, 0.0));
    }

    #[test]
    fn step_displacement_matches_speed() {
        let model = open_3x3();
        let dir = normalize_dir(1.0, 1.0);
        let (x0, y0) = (16.0, 16.0);
        let (x1, y1) = model.integrate((x0, y0), dir, 10.0, 0.5);
        let moved = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
        // S*dt, not S*dt*sqrt(2)
        assert!((moved - 5.0).abs() < EPSILON);
    }

    #[test]
    fn slides_along_walls_on_diagonal_input() {
        // row 0: P P W
        // row 1: P P W
        // row 2: W W W
        let tiles = vec![
            Tile::Path, Tile::Path, Tile::Wall,
            Tile::Path, Tile::Path, Tile::Wall,
            Tile::Wall, Tile::Wall, Tile::Wall,
        ];
        let maze = Maze::from_tiles(3, 3, tiles).unwrap();
        let model = CollisionModel::new(Rc::from(maze), 32.0);

        // from the center of cell (1,0), pushing down-right into the corner:
        // X is blocked by the wall column, Y is free
        let dir = normalize_dir(1.0, 1.0);
        let (x, y) = model.integrate((48.0, 16.0), dir, 32.0, 1.0);
        assert!((x - 48.0).abs() < EPSILON, "blocked axis must not move");
        assert!(y > 16.0, "open axis must keep moving");
    }

    #[test]
    fn blocked_both_axes_stays_put() {
        let tiles = vec![
            Tile::Path, Tile::Wall,
            Tile::Wall, Tile::Wall,
        ];
        let maze = Maze::from_tiles(2, 2, tiles).unwrap();
        let model = CollisionModel::new(Rc::from(maze), 32.0);
        let dir = normalize_dir(1.0, 1.0);
        let (x, y) = model.integrate((16.0, 16.0), dir, 32.0, 1.0);
        assert_eq!((16.0, 16.0), (x, y));
    }

    #[test]
    fn y_test_uses_the_updated_x() {
        // row 0: P P
        // row 1: W P
        // moving down-right from (0,0): the raw diagonal would cut the
        // corner over the wall at (0,1); with axis separation the X move
        // happens first and the Y move is then legal in column 1
        let tiles = vec![
            Tile::Path, Tile::Path,
            Tile::Wall, Tile::Path,
        ];
        let maze = Maze::from_tiles(2, 2, tiles).unwrap();
        let model = CollisionModel::new(Rc::from(maze), 32.0);
        let dir = normalize_dir(1.0, 1.0);
        let (x, y) = model.integrate((16.0, 16.0), dir, 40.0, 1.0);
        assert!(x > 32.0, "X must cross into the second column");
        assert!(y > 32.0, "Y must be tested at the new X, where it is open");
    }
}
