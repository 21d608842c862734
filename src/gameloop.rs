//! Main game loop.
//! Also acts as a facade, holding the screen buffer, the inputs and the
//! active game mode (sprite menu or live maze).

use crate::*;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::rc::Rc;

pub struct GameLoop {
    scrbuf: ScreenBuffer,
    assets: Rc<GameAssets>,
    maze: Rc<Maze>,
    inputs: InputManager,
    mode: GameMode,
    menu: SpriteMenu,
    livemap: Option<LiveMap>,
}

impl GameLoop {
    pub fn new(width: i32, height: i32, pixel_size: i32, assets: GameAssets, maze: Maze) -> Self {
        let ga = Rc::from(assets);
        Self {
            scrbuf: ScreenBuffer::new(width, height),
            menu: SpriteMenu::new(Rc::clone(&ga), width, height),
            assets: ga,
            maze: Rc::from(maze),
            inputs: InputManager::new(pixel_size),
            mode: GameMode::Menu,
            livemap: None,
        }
    }
}

impl GraphicsLoop for GameLoop {
    fn handle_event(&mut self, event: &Event) -> bool {
        self.inputs.handle_event(event);
        true
    }

    fn update_state(&mut self, elapsed_time: f64) -> bool {
        if self.inputs.consume_key(Keycode::Escape) {
            return false;
        }

        match self.mode {
            GameMode::Menu => {
                if let Some(chosen) = self.menu.handle_inputs(&mut self.inputs) {
                    let map = LiveMap::new(Rc::clone(&self.assets), chosen, Rc::clone(&self.maze));
                    self.livemap = Some(map);
                    self.mode = GameMode::Live;
                } else {
                    self.menu.paint(&mut self.scrbuf);
                }
            }
            GameMode::Live => {
                if let Some(map) = &mut self.livemap {
                    map.handle_inputs(&self.inputs, elapsed_time);
                    map.paint(&mut self.scrbuf);
                    if map.reached_exit() {
                        println!("Maze solved in {} seconds :)", map.solve_time_secs());
                        return false;
                    }
                }
            }
        }

        true
    }

    fn paint(&self, painter: &mut dyn Painter) {
        self.scrbuf.paint(painter);
    }
}
