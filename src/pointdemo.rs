//! PointDemo - a free-roaming point moved by the arrow keys, kept inside
//! the window borders. The warm-up exercise for the maze game.

use crate::*;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

pub struct PointDemo {
    scrbuf: ScreenBuffer,
    inputs: InputManager,
    x: f64,
    y: f64,
    fps: f64,
}

impl PointDemo {
    pub fn new(width: i32, height: i32, pixel_size: i32) -> Self {
        Self {
            scrbuf: ScreenBuffer::new(width, height),
            inputs: InputManager::new(pixel_size),
            // start in the middle of the window
            x: (width as f64) / 2.0,
            y: (height as f64) / 2.0,
            fps: 0.0,
        }
    }
}

impl GraphicsLoop for PointDemo {
    fn handle_event(&mut self, event: &Event) -> bool {
        self.inputs.handle_event(event);
        true
    }

    fn update_state(&mut self, elapsed_time: f64) -> bool {
        if self.inputs.consume_key(Keycode::Escape) {
            return false;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.inputs.key(Keycode::Left) || self.inputs.key(Keycode::A) {
            dx -= 1.0;
        }
        if self.inputs.key(Keycode::Right) || self.inputs.key(Keycode::D) {
            dx += 1.0;
        }
        if self.inputs.key(Keycode::Up) || self.inputs.key(Keycode::W) {
            dy -= 1.0;
        }
        if self.inputs.key(Keycode::Down) || self.inputs.key(Keycode::S) {
            dy += 1.0;
        }

        let (dx, dy) = normalize_dir(dx, dy);
        self.x += dx * POINT_SPEED * elapsed_time;
        self.y += dy * POINT_SPEED * elapsed_time;

        // keep the disc fully inside the window
        let r = POINT_RADIUS as f64;
        self.x = self.x.clamp(r, (self.scrbuf.scr_width() as f64) - r);
        self.y = self.y.clamp(r, (self.scrbuf.scr_height() as f64) - r);

        if elapsed_time > 0.0 {
            // lightly smoothed, to keep the number readable
            self.fps = 0.9 * self.fps + 0.1 / elapsed_time;
        }

        self.scrbuf.fill(BG_COLOR);
        self.scrbuf.fill_circle(self.x as i32, self.y as i32, POINT_RADIUS, POINT_COLOR);
        let hud = format!("POS: ({},{})  FPS: {}", self.x as i32, self.y as i32, self.fps as i32);
        font::draw_text(8, 8, &hud, HUD_COLOR, &mut self.scrbuf);

        true
    }

    fn paint(&self, painter: &mut dyn Painter) {
        self.scrbuf.paint(painter);
    }
}
