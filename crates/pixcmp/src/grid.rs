use image::RgbaImage;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("pixel ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("buffer holds {actual} values, a {width}x{height} grid needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// One RGBA8 pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Equal on red, green and blue. Alpha is not compared.
    pub fn rgb_eq(&self, other: &Pixel) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Sum of squared per-channel differences over red, green and blue.
    pub fn squared_error(&self, other: &Pixel) -> u64 {
        let dr = self.r.abs_diff(other.r) as u64;
        let dg = self.g.abs_diff(other.g) as u64;
        let db = self.b.abs_diff(other.b) as u64;
        dr * dr + dg * dg + db * db
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// Anything the comparator can scan: fixed dimensions plus a row-major pixel
/// slice of exactly `width * height` entries.
pub trait Raster: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixels(&self) -> &[Pixel];
    fn channel_total(&self, channel: Channel) -> u64;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ChannelTotals {
    red: u64,
    green: u64,
    blue: u64,
    alpha: u64,
}

impl ChannelTotals {
    fn of(pixels: &[Pixel]) -> Self {
        pixels.iter().fold(Self::default(), |acc, p| Self {
            red: acc.red + p.r as u64,
            green: acc.green + p.g as u64,
            blue: acc.blue + p.b as u64,
            alpha: acc.alpha + p.a as u64,
        })
    }
}

/// A decoded image held in memory. Immutable once built: the pixel buffer
/// always covers every coordinate and the channel totals are computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
    totals: ChannelTotals,
}

impl PixelGrid {
    /// Build from row-major pixels. `pixels.len()` must be `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        let totals = ChannelTotals::of(&pixels);
        Ok(Self {
            width,
            height,
            pixels,
            totals,
        })
    }

    /// Build from interleaved RGBA8 bytes, row-major.
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(GridError::BufferSize {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Pixel::rgba(c[0], c[1], c[2], c[3]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// A grid where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let pixels = vec![pixel; width as usize * height as usize];
        let totals = ChannelTotals::of(&pixels);
        Self {
            width,
            height,
            pixels,
            totals,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> Result<Pixel, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn channel_total(&self, channel: Channel) -> u64 {
        match channel {
            Channel::Red => self.totals.red,
            Channel::Green => self.totals.green,
            Channel::Blue => self.totals.blue,
            Channel::Alpha => self.totals.alpha,
        }
    }
}

impl Raster for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn channel_total(&self, channel: Channel) -> u64 {
        PixelGrid::channel_total(self, channel)
    }
}

impl From<&RgbaImage> for PixelGrid {
    fn from(img: &RgbaImage) -> Self {
        let pixels: Vec<Pixel> = img
            .pixels()
            .map(|p| Pixel::rgba(p[0], p[1], p[2], p[3]))
            .collect();
        let totals = ChannelTotals::of(&pixels);
        Self {
            width: img.width(),
            height: img.height(),
            pixels,
            totals,
        }
    }
}
