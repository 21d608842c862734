//! MAZEHUNT - small real-time 2D maze demos on SDL2 :)
//! Main library.

mod assetloader;
mod assets;
mod collision;
mod defs;
pub mod font;
mod gameloop;
mod input;
mod livemap;
mod maze;
mod menu;
mod pointdemo;
mod scrbuf;
mod sdl_wrapper;

pub use assets::*;
pub use collision::*;
pub use defs::*;
pub use gameloop::*;
pub use input::*;
pub use livemap::*;
pub use maze::*;
pub use menu::*;
pub use pointdemo::*;
pub use scrbuf::*;
pub use sdl_wrapper::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Live,
}
