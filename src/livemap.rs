//! LiveMap - the running maze session: player movement, walk animation,
//! camera scrolling, timer and exit detection.

use crate::*;
use sdl2::keyboard::Keycode;
use std::rc::Rc;
use std::time::Instant;

pub struct LiveMap {
    maze: Rc<Maze>,
    collision: CollisionModel,
    assets: Rc<GameAssets>,
    sprite_idx: usize,
    frame_idx: usize,
    anim_timer: f64,
    player_x: f64,
    player_y: f64,
    started: Instant,
    reached_exit: bool,
}

impl LiveMap {
    pub fn new(assets: Rc<GameAssets>, sprite_idx: usize, maze: Rc<Maze>) -> Self {
        // spawn in the middle of the entrance cell
        let (ex, ey) = maze.entrance();
        let player_x = ((ex as f64) + 0.5) * TILE_SIZE;
        let player_y = ((ey as f64) + 0.5) * TILE_SIZE;

        Self {
            collision: CollisionModel::new(Rc::clone(&maze), TILE_SIZE),
            maze,
            assets,
            sprite_idx,
            frame_idx: 0,
            anim_timer: 0.0,
            player_x,
            player_y,
            started: Instant::now(),
            reached_exit: false,
        }
    }

    pub fn handle_inputs(&mut self, inputs: &InputManager, elapsed_time: f64) {
        let dx = key_axis(inputs, Keycode::Right, Keycode::D) - key_axis(inputs, Keycode::Left, Keycode::A);
        let dy = key_axis(inputs, Keycode::Down, Keycode::S) - key_axis(inputs, Keycode::Up, Keycode::W);
        let dir = normalize_dir(dx, dy);

        let pos = (self.player_x, self.player_y);
        let (x, y) = self.collision.integrate(pos, dir, PLAYER_SPEED, elapsed_time);
        self.player_x = x;
        self.player_y = y;

        // the walk animation only advances while actually moving
        if dx != 0.0 || dy != 0.0 {
            self.anim_timer += elapsed_time;
            if self.anim_timer >= ANIMATION_SPEED {
                self.anim_timer -= ANIMATION_SPEED;
                self.frame_idx = 1 - self.frame_idx;
            }
        }

        if self.collision.cell_at(self.player_x, self.player_y) == self.maze.exit() {
            self.reached_exit = true;
        }
    }

    #[inline]
    pub fn reached_exit(&self) -> bool {
        self.reached_exit
    }

    #[inline]
    pub fn solve_time_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn paint(&self, scrbuf: &mut ScreenBuffer) {
        scrbuf.fill(BG_COLOR);

        // camera centered on the player
        let cam_x = self.player_x - (scrbuf.scr_width() as f64) / 2.0;
        let cam_y = self.player_y - (scrbuf.scr_height() as f64) / 2.0;

        let tile = TILE_SIZE as i32;
        for y in 0..self.maze.height() {
            for x in 0..self.maze.width() {
                let color = match self.maze.tile(x, y) {
                    Tile::Wall => WALL_COLOR,
                    Tile::Path => FLOOR_COLOR,
                };
                let draw_x = ((x as f64) * TILE_SIZE - cam_x) as i32;
                let draw_y = ((y as f64) * TILE_SIZE - cam_y) as i32;
                scrbuf.fill_rect(draw_x, draw_y, tile, tile, color);
            }
        }

        // exit marker
        let (ex, ey) = self.maze.exit();
        let exit_x = ((ex as f64) * TILE_SIZE - cam_x) as i32;
        let exit_y = ((ey as f64) * TILE_SIZE - cam_y) as i32;
        scrbuf.fill_rect(exit_x, exit_y, tile, tile, EXIT_COLOR);

        // player sprite, current walk frame
        let pic = &self.assets.sprites[self.sprite_idx][self.frame_idx];
        let px = (self.player_x - cam_x) as i32;
        let py = (self.player_y - cam_y) as i32;
        pic.draw_centered(px, py, scrbuf);

        // timer
        let hud = format!("TIME: {} S", self.solve_time_secs());
        font::draw_text(10, 10, &hud, HUD_COLOR, scrbuf);
    }
}

//-------------------
//  Internal stuff

#[inline]
fn key_axis(inputs: &InputManager, key: Keycode, alt: Keycode) -> f64 {
    if inputs.key(key) || inputs.key(alt) {
        1.0
    } else {
        0.0
    }
}
