//! Data structures for the loaded game assets.

use crate::{ScreenBuffer, RGB};

pub const SPRITE_SIZE: i32 = 48;
pub const SPRITE_COUNT: usize = 5;

/// One picture, stored as row-major RGB texels.
#[derive(Clone)]
pub struct Pic {
    width: i32,
    height: i32,
    texels: Vec<RGB>,
}

impl Pic {
    pub fn new(width: i32, height: i32, texels: Vec<RGB>) -> Self {
        assert_eq!((width * height) as usize, texels.len());
        Self { width, height, texels }
    }

    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Draw the picture as-is, top-left corner at (x, y).
    pub fn draw(&self, x: i32, y: i32, scrbuf: &mut ScreenBuffer) {
        let mut idx = 0;
        for dy in 0..self.height {
            for dx in 0..self.width {
                scrbuf.put_pixel(x + dx, y + dy, self.texels[idx]);
                idx += 1;
            }
        }
    }

    /// Draw the picture centered on the given point.
    #[inline]
    pub fn draw_centered(&self, cx: i32, cy: i32, scrbuf: &mut ScreenBuffer) {
        self.draw(cx - self.width / 2, cy - self.height / 2, scrbuf);
    }
}

/// The selectable player sprites: SPRITE_COUNT sets of 2 walk frames each.
pub struct GameAssets {
    pub sprites: Vec<[Pic; 2]>,
}
