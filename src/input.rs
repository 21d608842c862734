//! InputManager - tracks held keys and mouse clicks between frames.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use std::collections::HashMap;

pub struct InputManager {
    // value turns false once consumed, until the key is released and
    // pressed again (key repeat events must not re-arm it)
    pressed: HashMap<i32, bool>,
    click: Option<(i32, i32)>,
    pixel_size: i32,
}

impl InputManager {
    pub fn new(pixel_size: i32) -> Self {
        Self {
            pressed: HashMap::new(),
            click: None,
            pixel_size,
        }
    }

    /// Is the key held down right now? (continuous movement)
    #[inline]
    pub fn key(&self, key: Keycode) -> bool {
        self.pressed.contains_key(&(key as i32))
    }

    /// One-shot press: true exactly once per physical key press. (menus)
    pub fn consume_key(&mut self, key: Keycode) -> bool {
        match self.pressed.get_mut(&(key as i32)) {
            Some(fresh) => {
                let was_fresh = *fresh;
                *fresh = false;
                was_fresh
            }
            None => false,
        }
    }

    /// Left mouse click since the last call, in logical pixels.
    pub fn consume_click(&mut self) -> Option<(i32, i32)> {
        self.click.take()
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown { keycode: Some(key), .. } => {
                self.pressed.entry(*key as i32).or_insert(true);
            }
            Event::KeyUp { keycode: Some(key), .. } => {
                self.pressed.remove(&(*key as i32));
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.click = Some((*x / self.pixel_size, *y / self.pixel_size));
            }
            _ => {}
        }
    }
}
