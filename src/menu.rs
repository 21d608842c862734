//! SpriteMenu - the pre-game screen where the player picks a sprite.

use crate::*;
use sdl2::keyboard::Keycode;
use std::rc::Rc;

const MENU_BG_COLOR: RGB = RGB::new(240, 240, 240);
const BOX_BG_COLOR: RGB = RGB::new(230, 230, 230);
const BORDER_COLOR: RGB = RGB::new(80, 80, 80);
const SELECTED_COLOR: RGB = RGB::new(0, 120, 0);

const BOX_MARGIN: i32 = 20;
const BOX_INFLATE: i32 = 8;
const BORDER_THICKNESS: i32 = 3;

const DIGIT_KEYS: [Keycode; SPRITE_COUNT] = [
    Keycode::Num1,
    Keycode::Num2,
    Keycode::Num3,
    Keycode::Num4,
    Keycode::Num5,
];

pub struct SpriteMenu {
    assets: Rc<GameAssets>,
    scr_width: i32,
    scr_height: i32,
    selected: usize,
}

impl SpriteMenu {
    pub fn new(assets: Rc<GameAssets>, scr_width: i32, scr_height: i32) -> Self {
        Self {
            assets,
            scr_width,
            scr_height,
            selected: 0,
        }
    }

    /// Returns the chosen sprite index once the player confirms,
    /// via Enter, a digit key or a mouse click.
    pub fn handle_inputs(&mut self, inputs: &mut InputManager) -> Option<usize> {
        let count = self.assets.sprites.len();

        if inputs.consume_key(Keycode::Right) || inputs.consume_key(Keycode::D) {
            self.selected = (self.selected + 1) % count;
        } else if inputs.consume_key(Keycode::Left) || inputs.consume_key(Keycode::A) {
            self.selected = (self.selected + count - 1) % count;
        }

        if inputs.consume_key(Keycode::Return) || inputs.consume_key(Keycode::KpEnter) {
            return Some(self.selected);
        }

        for (idx, key) in DIGIT_KEYS.iter().enumerate() {
            if idx < count && inputs.consume_key(*key) {
                return Some(idx);
            }
        }

        if let Some((mx, my)) = inputs.consume_click() {
            for (idx, (bx, by)) in self.box_positions().into_iter().enumerate() {
                let inside = mx >= bx && mx < bx + SPRITE_SIZE && my >= by && my < by + SPRITE_SIZE;
                if inside {
                    return Some(idx);
                }
            }
        }

        None
    }

    pub fn paint(&self, scrbuf: &mut ScreenBuffer) {
        scrbuf.fill(MENU_BG_COLOR);
        font::draw_text(20, 20, "CHOOSE YOUR SPRITE (CLICK / ARROWS + ENTER / 1-5)", HUD_COLOR, scrbuf);

        for (idx, (bx, by)) in self.box_positions().into_iter().enumerate() {
            let border = if idx == self.selected { SELECTED_COLOR } else { BORDER_COLOR };
            let ix = bx - BOX_INFLATE;
            let iy = by - BOX_INFLATE;
            let iw = SPRITE_SIZE + 2 * BOX_INFLATE;
            scrbuf.fill_rect(ix, iy, iw, iw, BOX_BG_COLOR);
            scrbuf.draw_rect(ix, iy, iw, iw, BORDER_THICKNESS, border);

            // the menu always shows the first frame of the pair
            let pic = &self.assets.sprites[idx][0];
            pic.draw(bx, by, scrbuf);

            font::draw_char(ix + 4, iy + 4, b'1' + (idx as u8), HUD_COLOR, scrbuf);
        }
    }

    //------------------

    /// Top-left corners of the sprite boxes, laid out centered in a row.
    fn box_positions(&self) -> Vec<(i32, i32)> {
        let count = self.assets.sprites.len() as i32;
        let total_width = SPRITE_SIZE * count + BOX_MARGIN * (count - 1);
        let start_x = (self.scr_width - total_width) / 2;
        let y = (self.scr_height - SPRITE_SIZE) / 2;
        (0..count)
            .map(|i| (start_x + i * (SPRITE_SIZE + BOX_MARGIN), y))
            .collect()
    }
}
