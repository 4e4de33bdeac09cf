//! Decoding and fitting images into the viewer area.

use image::{RgbaImage, imageops::FilterType};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Smallest usable display edge; anything below means the layout is not settled yet.
pub const MIN_VIEWPORT_EDGE: u32 = 100;

#[derive(Debug, Error)]
#[error("Failed to decode {}: {source}", .path.display())]
pub struct DecodeError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// Pixel size of the area an image is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Replaces each edge that is too small with the matching `fallback` edge.
    pub fn effective(self, fallback: Viewport) -> Viewport {
        Viewport {
            width: if self.width < MIN_VIEWPORT_EDGE {
                fallback.width
            } else {
                self.width
            },
            height: if self.height < MIN_VIEWPORT_EDGE {
                fallback.height
            } else {
                self.height
            },
        }
    }
}

/// Shrink `(w, h)` to fit inside `bounds` keeping the aspect ratio. Never enlarges.
pub fn fit_within(size: (u32, u32), bounds: Viewport) -> (u32, u32) {
    let (w, h) = size;
    if w == 0 || h == 0 || (w <= bounds.width && h <= bounds.height) {
        return (w, h);
    }
    let scale = f64::min(
        bounds.width as f64 / w as f64,
        bounds.height as f64 / h as f64,
    );
    let nw = ((w as f64 * scale).round() as u32).clamp(1, bounds.width.max(1));
    let nh = ((h as f64 * scale).round() as u32).clamp(1, bounds.height.max(1));
    (nw, nh)
}

/// Decode `path` and scale it down to fit `viewport`.
pub fn decode_for_display(path: &Path, viewport: Viewport) -> Result<RgbaImage, DecodeError> {
    let img = image::open(path).map_err(|source| DecodeError {
        path: path.to_path_buf(),
        source,
    })?;
    let (w, h) = fit_within((img.width(), img.height()), viewport);
    if (w, h) == (img.width(), img.height()) {
        return Ok(img.to_rgba8());
    }
    Ok(img.resize_exact(w, h, FilterType::Triangle).to_rgba8())
}
