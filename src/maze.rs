//! Maze grid + seeded maze generation (randomized depth-first carving,
//! a.k.a. "recursive backtracking", done here with an explicit stack).

use fastrand::Rng;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Wall,
    Path,
}

/// A generated maze: a fixed-size grid of walls and paths, plus the
/// entrance (top-left) and exit (bottom-right) cells.
/// Immutable once generated.
pub struct Maze {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    entrance: (i32, i32),
    exit: (i32, i32),
}

impl Maze {
    /// Generate a perfect maze (every path cell reachable, no loops).
    /// Same (width, height, seed) always produces the same grid.
    /// Only fails for non-positive dimensions.
    pub fn generate(width: i32, height: i32, seed: u64) -> Result<Self, String> {
        if width < 1 || height < 1 {
            return Err(format!("Invalid maze dimensions: {width}x{height}"));
        }

        let len = (width as usize) * (height as usize);
        let mut maze = Self {
            width,
            height,
            tiles: vec![Tile::Wall; len],
            entrance: (0, 0),
            exit: (width - 1, height - 1),
        };

        // all randomness comes from this one owned stream, so generating
        // several mazes in the same process cannot interfere
        let mut rng = Rng::with_seed(seed);
        carve_from(&mut maze, &mut rng, 0, 0);
        open_exit_corner(&mut maze);

        Ok(maze)
    }

    /// Build a maze from an explicit tile grid (row-major).
    /// Entrance and exit stay at the fixed corners.
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<Tile>) -> Result<Self, String> {
        if width < 1 || height < 1 {
            return Err(format!("Invalid maze dimensions: {width}x{height}"));
        }
        if tiles.len() != (width as usize) * (height as usize) {
            return Err(format!("Wrong tile count: {} for {width}x{height}", tiles.len()));
        }
        Ok(Self {
            width,
            height,
            tiles,
            entrance: (0, 0),
            exit: (width - 1, height - 1),
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn entrance(&self) -> (i32, i32) {
        self.entrance
    }

    #[inline]
    pub fn exit(&self) -> (i32, i32) {
        self.exit
    }

    /// Tile at the given cell; everything outside the grid is a wall.
    #[inline]
    pub fn tile(&self, x: i32, y: i32) -> Tile {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.tiles[(y * self.width + x) as usize]
        } else {
            Tile::Wall
        }
    }

    #[inline]
    fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        debug_assert!(x >= 0 && y >= 0 && x < self.width && y < self.height);
        self.tiles[(y * self.width + x) as usize] = tile;
    }
}

//-------------------
//  Internal stuff

/// One level of the would-be carve recursion: a cell, plus the shuffled
/// directions not yet tried from it.
struct CarveFrame {
    x: i32,
    y: i32,
    dirs: [(i32, i32); 4],
    next: usize,
}

impl CarveFrame {
    fn new(x: i32, y: i32, rng: &mut Rng) -> Self {
        Self {
            x,
            y,
            dirs: shuffled_directions(rng),
            next: 0,
        }
    }
}

/// Depth-first carving. Candidate cells are 2 steps away, so the cell in
/// between can act as the wall (or get carved as the opening). The explicit
/// stack replaces the call-stack recursion, keeping the same visit order
/// while staying safe for large mazes. Popping a frame whose directions are
/// exhausted IS the backtracking.
fn carve_from(maze: &mut Maze, rng: &mut Rng, start_x: i32, start_y: i32) {
    maze.set_tile(start_x, start_y, Tile::Path);
    let mut stack = vec![CarveFrame::new(start_x, start_y, rng)];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        if stack[top].next >= stack[top].dirs.len() {
            stack.pop();
            continue;
        }

        let frame = &mut stack[top];
        let (dx, dy) = frame.dirs[frame.next];
        frame.next += 1;
        let wall_x = frame.x + dx;
        let wall_y = frame.y + dy;
        let next_x = frame.x + dx * 2;
        let next_y = frame.y + dy * 2;

        let inside = next_x >= 0 && next_y >= 0 && next_x < maze.width && next_y < maze.height;
        if inside && maze.tile(next_x, next_y) == Tile::Wall {
            maze.set_tile(wall_x, wall_y, Tile::Path);
            maze.set_tile(next_x, next_y, Tile::Path);
            stack.push(CarveFrame::new(next_x, next_y, rng));
        }
    }
}

/// One Fisher-Yates shuffle of the 4 carve directions, consuming a fixed
/// number of samples from the stream per call (reproducibility depends
/// on this).
fn shuffled_directions(rng: &mut Rng) -> [(i32, i32); 4] {
    let mut dirs = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    for i in (1..dirs.len()).rev() {
        let j = rng.usize(..=i);
        dirs.swap(i, j);
    }
    dirs
}

/// The doubled-step carving only reaches cells with even coordinates, so
/// for even dimensions the exit corner may still be walled in. Open the
/// exit cell, and if it is not touching the carved area yet, open exactly
/// one neighbor towards it (carving both would close a loop and break the
/// perfect-maze property).
fn open_exit_corner(maze: &mut Maze) {
    let (ex, ey) = maze.exit;
    maze.set_tile(ex, ey, Tile::Path);

    let above_open = ey >= 1 && maze.tile(ex, ey - 1) == Tile::Path;
    let left_open = ex >= 1 && maze.tile(ex - 1, ey) == Tile::Path;
    if above_open || left_open {
        return;
    }
    if ey >= 1 {
        maze.set_tile(ex, ey - 1, Tile::Path);
    } else if ex >= 1 {
        maze.set_tile(ex - 1, ey, Tile::Path);
    }
}

//-------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn path_cell_count(maze: &Maze) -> usize {
        let mut cnt = 0;
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                if maze.tile(x, y) == Tile::Path {
                    cnt += 1;
                }
            }
        }
        cnt
    }

    /// Number of path cells reachable from the entrance via 4-connected
    /// path-only steps (flood fill).
    fn reachable_path_count(maze: &Maze) -> usize {
        let w = maze.width();
        let h = maze.height();
        let mut seen = vec![false; (w * h) as usize];
        let mut queue = vec![maze.entrance()];
        seen[0] = true;
        let mut cnt = 0;
        while let Some((x, y)) = queue.pop() {
            cnt += 1;
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let (nx, ny) = (x + dx, y + dy);
                if nx >= 0 && ny >= 0 && nx < w && ny < h {
                    let idx = (ny * w + nx) as usize;
                    if !seen[idx] && maze.tile(nx, ny) == Tile::Path {
                        seen[idx] = true;
                        queue.push((nx, ny));
                    }
                }
            }
        }
        cnt
    }

    /// Count of horizontally or vertically adjacent Path-Path cell pairs.
    fn adjacent_path_pairs(maze: &Maze) -> usize {
        let mut pairs = 0;
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                if maze.tile(x, y) != Tile::Path {
                    continue;
                }
                if maze.tile(x + 1, y) == Tile::Path {
                    pairs += 1;
                }
                if maze.tile(x, y + 1) == Tile::Path {
                    pairs += 1;
                }
            }
        }
        pairs
    }

    fn assert_perfect(maze: &Maze) {
        let paths = path_cell_count(maze);
        // full connectivity
        assert_eq!(paths, reachable_path_count(maze));
        // tree property: no cycles
        assert_eq!(paths - 1, adjacent_path_pairs(maze));
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert!(Maze::generate(0, 5, 1).is_err());
        assert!(Maze::generate(5, 0, 1).is_err());
        assert!(Maze::generate(-3, 4, 1).is_err());
    }

    #[test]
    fn generation_is_deterministic() {
        let a = Maze::generate(5, 5, 42).unwrap();
        let b = Maze::generate(5, 5, 42).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(a.tile(x, y), b.tile(x, y), "mismatch at ({x},{y})");
            }
        }
    }

    #[test]
    fn different_seeds_are_independent() {
        // generating a maze in between must not affect the outcome
        let a = Maze::generate(9, 9, 1234).unwrap();
        let _other = Maze::generate(31, 17, 999).unwrap();
        let b = Maze::generate(9, 9, 1234).unwrap();
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(a.tile(x, y), b.tile(x, y));
            }
        }
    }

    #[test]
    fn entrance_and_exit_are_open() {
        let maze = Maze::generate(5, 5, 42).unwrap();
        assert_eq!((0, 0), maze.entrance());
        assert_eq!((4, 4), maze.exit());
        assert_eq!(Tile::Path, maze.tile(0, 0));
        assert_eq!(Tile::Path, maze.tile(4, 4));
    }

    #[test]
    fn perfect_maze_concrete_scenario() {
        // 5x5, seed 42: connectivity + exactly pathcount-1 adjacent pairs
        let maze = Maze::generate(5, 5, 42).unwrap();
        assert_perfect(&maze);
    }

    #[test]
    fn perfect_maze_various_sizes() {
        for (w, h, seed) in [(5, 5, 42), (9, 7, 1), (21, 21, 12345), (33, 11, 777)] {
            let maze = Maze::generate(w, h, seed).unwrap();
            assert_perfect(&maze);
        }
    }

    #[test]
    fn perfect_maze_even_dimensions() {
        // even sizes: the DFS cannot reach the exit corner, the forced
        // opening must connect it without closing a loop
        for (w, h, seed) in [(20, 20, 12345), (8, 6, 3), (2, 2, 0), (6, 9, 51)] {
            let maze = Maze::generate(w, h, seed).unwrap();
            assert_eq!(Tile::Path, maze.tile(w - 1, h - 1));
            assert_perfect(&maze);
        }
    }

    #[test]
    fn single_cell_maze() {
        let maze = Maze::generate(1, 1, 7).unwrap();
        assert_eq!(maze.entrance(), maze.exit());
        assert_eq!(Tile::Path, maze.tile(0, 0));
        assert_perfect(&maze);
    }

    #[test]
    fn single_column_and_row_mazes() {
        for (w, h) in [(1, 7), (7, 1), (1, 8), (8, 1)] {
            let maze = Maze::generate(w, h, 5).unwrap();
            assert_eq!(Tile::Path, maze.tile(w - 1, h - 1));
            assert_perfect(&maze);
        }
    }

    #[test]
    fn outside_the_grid_is_wall() {
        let maze = Maze::generate(5, 5, 42).unwrap();
        assert_eq!(Tile::Wall, maze.tile(-1, 0));
        assert_eq!(Tile::Wall, maze.tile(0, -1));
        assert_eq!(Tile::Wall, maze.tile(5, 0));
        assert_eq!(Tile::Wall, maze.tile(0, 5));
    }

    #[test]
    fn from_tiles_checks_the_count() {
        assert!(Maze::from_tiles(2, 2, vec![Tile::Path; 3]).is_err());
        assert!(Maze::from_tiles(2, 2, vec![Tile::Path; 4]).is_ok());
    }
}
