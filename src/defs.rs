//!  Various constants shared by the demos.

use crate::RGB;

// window
pub const SCR_WIDTH: i32 = 800;
pub const SCR_HEIGHT: i32 = 600;
pub const PIXEL_SIZE: i32 = 1;

// maze session
pub const TILE_SIZE: f64 = 32.0;
pub const MAZE_WIDTH: i32 = 20;
pub const MAZE_HEIGHT: i32 = 20;
pub const MAZE_SEED: u64 = 12345;
pub const PLAYER_SPEED: f64 = 200.0; // pixels per second
pub const ANIMATION_SPEED: f64 = 0.5; // seconds per walk frame

// point demo
pub const POINT_SPEED: f64 = 300.0;
pub const POINT_RADIUS: i32 = 8;

// colors
pub const BG_COLOR: RGB = RGB::new(200, 200, 200);
pub const WALL_COLOR: RGB = RGB::new(100, 100, 100);
pub const FLOOR_COLOR: RGB = RGB::new(240, 220, 180);
pub const EXIT_COLOR: RGB = RGB::new(0, 200, 0);
pub const POINT_COLOR: RGB = RGB::new(220, 40, 40);
pub const HUD_COLOR: RGB = RGB::new(0, 0, 0);
