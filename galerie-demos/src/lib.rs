//! Shared support for the galerie demo applications: logger setup, image
//! synthesis and decoding helpers, and the manifest format used by the
//! declarative demo.

pub mod manifest;

use env_logger::{Builder, Target};
use galerie::SourceError;
use iced::widget::image::Handle;
use log::LevelFilter;

/// Initialize logging the same way for every demo: honor `RUST_LOG` when
/// set, otherwise default to warnings with debug output for the gallery
/// crates.
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("galerie", LevelFilter::Debug)
            .filter_module("galerie_demos", LevelFilter::Debug)
            .init();
    }
}

/// Synthesize a vertical gradient image, used by the synchronous demo and
/// as offline filler.
pub fn gradient_handle(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> Handle {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    let span = height.saturating_sub(1).max(1) as f32;

    for y in 0..height {
        let t = y as f32 / span;
        let blend =
            |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        let row = [
            blend(top[0], bottom[0]),
            blend(top[1], bottom[1]),
            blend(top[2], bottom[2]),
            255,
        ];
        for _ in 0..width {
            pixels.extend_from_slice(&row);
        }
    }

    Handle::from_rgba(width, height, pixels)
}

/// Decode fetched bytes into a displayable handle. Decoding here (instead
/// of handing raw bytes to the renderer) lets a source report a decode
/// failure as such.
pub fn decode_handle(bytes: &[u8]) -> Result<Handle, SourceError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|error| SourceError::Decode(error.to_string()))?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
