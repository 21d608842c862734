//! Loads the player sprites from disk. Missing or unreadable files fall
//! back to procedurally generated placeholders, never to an abort.

use crate::*;
use log::{info, warn};
use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::Surface;
use std::path::Path;

const SPRITES_FOLDER: &str = "sprites";

const FALLBACK_COLORS: [RGB; SPRITE_COUNT] = [
    RGB::new(220, 40, 40),
    RGB::new(40, 120, 220),
    RGB::new(40, 200, 120),
    RGB::new(220, 180, 40),
    RGB::new(160, 60, 200),
];

impl GameAssets {
    /// Load all sprite sets. Infallible: whatever cannot be read from
    /// disk is replaced by a generated placeholder.
    pub fn load() -> GameAssets {
        let mut sprites = Vec::with_capacity(SPRITE_COUNT);
        for i in 1..=SPRITE_COUNT {
            sprites.push(load_sprite_pair(i));
        }
        info!("Prepared {} sprite sets", sprites.len());
        GameAssets { sprites }
    }
}

//-------------------
//  Internal stuff

/// Load the 2 walk frames of one sprite (sprites/sprite<i>a.bmp + ..b.bmp).
/// One readable frame gets duplicated; none at all gives the placeholder.
fn load_sprite_pair(idx: usize) -> [Pic; 2] {
    let name_a = format!("{SPRITES_FOLDER}/sprite{idx}a.bmp");
    let name_b = format!("{SPRITES_FOLDER}/sprite{idx}b.bmp");
    match (load_sprite_pic(&name_a), load_sprite_pic(&name_b)) {
        (Ok(a), Ok(b)) => [a, b],
        (Ok(a), Err(msg)) => {
            warn!("Cannot use {name_b} ({msg}) => duplicating frame A");
            let b = a.clone();
            [a, b]
        }
        (Err(msg), Ok(b)) => {
            warn!("Cannot use {name_a} ({msg}) => duplicating frame B");
            let a = b.clone();
            [a, b]
        }
        (Err(msg_a), Err(msg_b)) => {
            warn!("No usable frames for sprite {idx} ({msg_a} / {msg_b}) => using placeholder");
            fallback_pair(idx)
        }
    }
}

/// Load one BMP and rescale it to SPRITE_SIZE x SPRITE_SIZE by nearest
/// sampling.
fn load_sprite_pic(filename: &str) -> Result<Pic, String> {
    if !Path::new(filename).is_file() {
        return Err(String::from("file not found"));
    }

    let surface = Surface::load_bmp(filename)?;
    let surface = surface.convert_format(PixelFormatEnum::RGB24)?;
    let w = surface.width() as i32;
    let h = surface.height() as i32;
    if w <= 0 || h <= 0 {
        return Err(String::from("empty image"));
    }

    let pitch = surface.pitch() as usize;
    let texels = surface.with_lock(|bytes: &[u8]| {
        let mut texels = Vec::with_capacity((SPRITE_SIZE * SPRITE_SIZE) as usize);
        for dy in 0..SPRITE_SIZE {
            let sy = (dy * h / SPRITE_SIZE) as usize;
            for dx in 0..SPRITE_SIZE {
                let sx = (dx * w / SPRITE_SIZE) as usize;
                let ofs = sy * pitch + sx * 3;
                texels.push(RGB::new(bytes[ofs], bytes[ofs + 1], bytes[ofs + 2]));
            }
        }
        texels
    });

    Ok(Pic::new(SPRITE_SIZE, SPRITE_SIZE, texels))
}

fn fallback_pair(idx: usize) -> [Pic; 2] {
    let color = FALLBACK_COLORS[(idx - 1) % FALLBACK_COLORS.len()];
    // the second frame is dimmed, so the walk animation stays visible
    // even with placeholder graphics
    let dimmed = RGB::new(
        (color.r as u32 * 3 / 4) as u8,
        (color.g as u32 * 3 / 4) as u8,
        (color.b as u32 * 3 / 4) as u8,
    );
    [solid_square(color), solid_square(dimmed)]
}

fn solid_square(color: RGB) -> Pic {
    let texels = vec![color; (SPRITE_SIZE * SPRITE_SIZE) as usize];
    Pic::new(SPRITE_SIZE, SPRITE_SIZE, texels)
}

//-------------------
