//! Mean color of a decoded image.
//!
//! Samples are read as alpha-premultiplied 16-bit channels, so fully
//! transparent pixels contribute black to the mean.

use crate::{Error, Result};
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};
use serde::Serialize;

/// 16-bit RGBA buffer, as produced by `DynamicImage::to_rgba16`.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Alpha written into every averaged color.
pub const SWATCH_ALPHA: u8 = 200;

/// Half-open pixel bounds: `min_x..max_x` by `min_y..max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: width,
            max_y: height,
        }
    }

    pub fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// A rectangular grid of RGBA samples.
pub trait PixelGrid {
    fn bounds(&self) -> Bounds;

    /// Premultiplied 16-bit `[r, g, b, a]` at `(x, y)`; only called inside `bounds()`.
    fn sample(&self, x: u32, y: u32) -> [u16; 4];
}

fn premultiply(c: u16, a: u16) -> u16 {
    (c as u32 * a as u32 / 0xffff) as u16
}

fn premultiplied16([r, g, b, a]: [u16; 4]) -> [u16; 4] {
    [premultiply(r, a), premultiply(g, a), premultiply(b, a), a]
}

fn widen(c: u8) -> u16 {
    c as u16 * 257
}

impl PixelGrid for RgbaImage {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn sample(&self, x: u32, y: u32) -> [u16; 4] {
        let p = self.get_pixel(x, y).0;
        premultiplied16([widen(p[0]), widen(p[1]), widen(p[2]), widen(p[3])])
    }
}

impl PixelGrid for Rgba16Image {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn sample(&self, x: u32, y: u32) -> [u16; 4] {
        premultiplied16(self.get_pixel(x, y).0)
    }
}

impl PixelGrid for DynamicImage {
    fn bounds(&self) -> Bounds {
        let (w, h) = self.dimensions();
        Bounds::from_size(w, h)
    }

    fn sample(&self, x: u32, y: u32) -> [u16; 4] {
        let p = self.get_pixel(x, y).0;
        premultiplied16([widen(p[0]), widen(p[1]), widen(p[2]), widen(p[3])])
    }
}

/// How per-channel 16-bit means become an 8-bit color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageMode {
    /// Keep the low byte of each mean and rotate channels so that
    /// `r = mean(g)`, `g = mean(b)`, `b = mean(r)`. Matches the swatches the
    /// tool has always produced.
    #[default]
    SourceCompat,
    /// Scale each mean down by 257 and keep channels in RGB order.
    Corrected,
}

/// An averaged color with fixed alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AverageColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl AverageColor {
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    /// `#rrggbb`, alpha omitted.
    pub fn hex(&self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }
}

/// Compute the mean color of every pixel in `grid`.
///
/// Means use integer division. A grid with zero area is an error.
pub fn average_color<G: PixelGrid + ?Sized>(grid: &G, mode: AverageMode) -> Result<AverageColor> {
    let bounds = grid.bounds();
    let count = bounds.area();
    if count == 0 {
        return Err(Error::EmptyImage {
            width: bounds.width(),
            height: bounds.height(),
        });
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for y in bounds.min_y..bounds.max_y {
        for x in bounds.min_x..bounds.max_x {
            let [pr, pg, pb, _] = grid.sample(x, y);
            r += pr as u64;
            g += pg as u64;
            b += pb as u64;
        }
    }

    let (r, g, b) = (r / count, g / count, b / count);

    Ok(match mode {
        AverageMode::SourceCompat => AverageColor {
            r: g as u8,
            g: b as u8,
            b: r as u8,
            a: SWATCH_ALPHA,
        },
        AverageMode::Corrected => AverageColor {
            r: (r / 257) as u8,
            g: (g / 257) as u8,
            b: (b / 257) as u8,
            a: SWATCH_ALPHA,
        },
    })
}
