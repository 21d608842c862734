//! Thin SDL2 wrapper - owns the window, the canvas and the frame loop,
//! and hides the SDL plumbing behind the GraphicsLoop + Painter traits.

use sdl2::event::Event;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::WindowCanvas;
use std::time::{Duration, Instant};

/// Simple RGB color, to keep the game code free of SDL types.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGB {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How to wait between frames.
pub enum SleepKind {
    NONE,
    YIELD,
    SLEEP(u32),
}

pub struct SdlConfiguration {
    title: String,
    width: i32,
    height: i32,
    pixel_size: i32,
    sleep_kind: SleepKind,
}

impl SdlConfiguration {
    pub fn new(title: &str, width: i32, height: i32, pixel_size: i32, sleep_kind: SleepKind) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        assert!(pixel_size > 0);
        Self {
            title: String::from(title),
            width,
            height,
            pixel_size,
            sleep_kind,
        }
    }
}

/// Painting abstraction, so the game never touches the canvas directly.
pub trait Painter {
    fn draw_pixel(&mut self, x: i32, y: i32, color: RGB);
}

/// Implemented by each demo; run_game_loop drives it.
/// Returning false from handle_event or update_state ends the loop.
pub trait GraphicsLoop {
    fn handle_event(&mut self, event: &Event) -> bool;
    fn update_state(&mut self, elapsed_time: f64) -> bool;
    fn paint(&self, painter: &mut dyn Painter);
}

/// Create the window and run the frame loop until the GraphicsLoop asks
/// to stop or the window is closed.
pub fn run_game_loop(cfg: &SdlConfiguration, gfx_loop: &mut dyn GraphicsLoop) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let win_width = (cfg.width * cfg.pixel_size) as u32;
    let win_height = (cfg.height * cfg.pixel_size) as u32;
    let window = video_subsystem
        .window(&cfg.title, win_width, win_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_scale(cfg.pixel_size as f32, cfg.pixel_size as f32)?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut moment = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                _ => {
                    if !gfx_loop.handle_event(&event) {
                        break 'running;
                    }
                }
            }
        }

        // elapsed time since the previous update, in seconds
        let next_moment = Instant::now();
        let elapsed_time = next_moment.duration_since(moment).as_secs_f64();
        moment = next_moment;

        if !gfx_loop.update_state(elapsed_time) {
            break 'running;
        }

        canvas.set_draw_color(Color::BLACK);
        canvas.clear();
        let mut painter = SdlPainter {
            canvas: &mut canvas,
            last_color: None,
        };
        gfx_loop.paint(&mut painter);
        canvas.present();

        match cfg.sleep_kind {
            SleepKind::NONE => {}
            SleepKind::YIELD => std::thread::yield_now(),
            SleepKind::SLEEP(millis) => std::thread::sleep(Duration::from_millis(millis as u64)),
        }
    }

    Ok(())
}

//-------------------
//  Internal stuff

struct SdlPainter<'a> {
    canvas: &'a mut WindowCanvas,
    // avoids re-setting the draw color on runs of same-colored pixels
    last_color: Option<RGB>,
}

impl Painter for SdlPainter<'_> {
    fn draw_pixel(&mut self, x: i32, y: i32, color: RGB) {
        if self.last_color != Some(color) {
            self.canvas.set_draw_color(Color::RGB(color.r, color.g, color.b));
            self.last_color = Some(color);
        }
        let _ = self.canvas.draw_point(Point::new(x, y));
    }
}
