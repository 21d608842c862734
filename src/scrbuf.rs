//! ScreenBuffer - an owned RGB pixel buffer. All game painting goes in
//! here, and the whole buffer is blitted to the canvas once per frame.

use crate::{Painter, RGB};

pub struct ScreenBuffer {
    width: i32,
    height: i32,
    pixels: Vec<RGB>,
}

impl ScreenBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        Self {
            width,
            height,
            pixels: vec![RGB::new(0, 0, 0); (width * height) as usize],
        }
    }

    #[inline]
    pub fn scr_width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn scr_height(&self) -> i32 {
        self.height
    }

    /// Put one pixel; anything outside the buffer is silently dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: RGB) {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, color: RGB) {
        self.pixels.fill(color);
    }

    /// Filled rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: RGB) {
        let x0 = Ord::max(0, x);
        let y0 = Ord::max(0, y);
        let x1 = Ord::min(self.width, x + w);
        let y1 = Ord::min(self.height, y + h);
        for yy in y0..y1 {
            let row = (yy * self.width) as usize;
            for xx in x0..x1 {
                self.pixels[row + (xx as usize)] = color;
            }
        }
    }

    /// Rectangle outline of the given thickness (grows inwards).
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: RGB) {
        let t = Ord::min(thickness, Ord::min(w, h) / 2 + 1);
        self.fill_rect(x, y, w, t, color);
        self.fill_rect(x, y + h - t, w, t, color);
        self.fill_rect(x, y, t, h, color);
        self.fill_rect(x + w - t, y, t, h, color);
    }

    /// Filled disc, clipped to the buffer.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: RGB) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    pub fn paint(&self, painter: &mut dyn Painter) {
        let mut idx = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                painter.draw_pixel(x, y, self.pixels[idx]);
                idx += 1;
            }
        }
    }
}
