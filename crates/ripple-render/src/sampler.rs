//! Background image abstraction.

use crate::color::Rgba;

/// A source of background pixels.
///
/// The compositor samples one background pixel per grid cell, clamping
/// the sample coordinate into the sampler's bounds, so a background
/// smaller than the display simply repeats its last row/column rather
/// than failing.
pub trait BackgroundSampler {
    /// Width of the background in pixels. Must be non-zero.
    fn width(&self) -> u32;
    /// Height of the background in pixels. Must be non-zero.
    fn height(&self) -> u32;
    /// Colour at the given pixel. `x < width()` and `y < height()` hold
    /// for calls made by the compositor.
    fn color_at(&self, x: u32, y: u32) -> Rgba;
}

/// A single-colour background, the fallback when no image is loaded.
#[derive(Clone, Copy, Debug)]
pub struct SolidBackground {
    color: Rgba,
    width: u32,
    height: u32,
}

impl SolidBackground {
    /// A solid background of the given colour and nominal size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either dimension is zero.
    pub fn new(color: Rgba, width: u32, height: u32) -> Result<SolidBackground, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "background dimensions must be non-zero, got {width}x{height}"
            ));
        }
        Ok(SolidBackground {
            color,
            width,
            height,
        })
    }

    /// The default dark-blue water tank at the given size.
    pub fn dark_blue(width: u32, height: u32) -> Result<SolidBackground, String> {
        SolidBackground::new(Rgba::DARK_BLUE, width, height)
    }
}

impl BackgroundSampler for SolidBackground {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, _x: u32, _y: u32) -> Rgba {
        self.color
    }
}

/// A background backed by a row-major pixel buffer, typically a decoded
/// image handed in by the embedding application.
#[derive(Clone, Debug)]
pub struct ImageBackground {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl ImageBackground {
    /// Wrap a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either dimension is zero or the buffer length
    /// does not equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<ImageBackground, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "background dimensions must be non-zero, got {width}x{height}"
            ));
        }
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(format!(
                "pixel buffer length {} does not match {width}x{height} ({expected})",
                pixels.len()
            ));
        }
        Ok(ImageBackground {
            width,
            height,
            pixels,
        })
    }
}

impl BackgroundSampler for ImageBackground {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }
}
