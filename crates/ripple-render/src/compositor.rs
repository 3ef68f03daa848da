//! Height field to RGBA frame composition.

use crate::color::Rgba;
use crate::sampler::BackgroundSampler;
use ripple_field::RippleField;
use std::fmt;

/// Default conversion gain from cell height to brightness shift.
pub const DEFAULT_BRIGHTNESS_GAIN: f32 = 0.03;

/// Errors surfaced by [`Compositor::compose`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposeError {
    /// The frame buffer does not match the field's display size
    /// (`grid size * scale`).
    FrameSizeMismatch {
        /// Display size the field requires.
        expected: (u32, u32),
        /// Size of the frame buffer that was passed in.
        actual: (u32, u32),
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::FrameSizeMismatch { expected, actual } => write!(
                f,
                "frame buffer is {}x{} but the field renders at {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for ComposeError {}

/// An owned RGBA pixel buffer at display resolution.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    /// Allocate a frame of the given display size, initially
    /// transparent.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<FrameBuffer, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "frame dimensions must be non-zero, got {width}x{height}"
            ));
        }
        Ok(FrameBuffer {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)],
        })
    }

    /// Allocate a frame sized to the given field's display resolution.
    pub fn for_field(field: &RippleField) -> Result<FrameBuffer, String> {
        FrameBuffer::new(
            field.grid_width() * field.scale(),
            field.grid_height() * field.scale(),
        )
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole frame, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// One pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width()` or `y >= height()`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: u32, y: u32, color: Rgba) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Composes a height field over a background into a frame buffer.
///
/// Per grid cell: sample the background at the cell's top-left display
/// pixel (clamped into the background's bounds), shift its brightness by
/// `height * gain`, clamp the channels, and write the result as an
/// opaque `scale x scale` block.
#[derive(Clone, Copy, Debug)]
pub struct Compositor {
    brightness_gain: f32,
}

impl Default for Compositor {
    fn default() -> Self {
        Compositor::new()
    }
}

impl Compositor {
    /// A compositor with the default brightness gain.
    pub fn new() -> Compositor {
        Compositor {
            brightness_gain: DEFAULT_BRIGHTNESS_GAIN,
        }
    }

    /// Override the height-to-brightness gain.
    pub fn brightness_gain(mut self, gain: f32) -> Compositor {
        self.brightness_gain = gain;
        self
    }

    /// Render the field's current read view over `background` into
    /// `frame`.
    ///
    /// Every frame pixel is rewritten, so the frame never needs
    /// clearing between calls.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::FrameSizeMismatch`] if the frame is not
    /// exactly `grid size * scale` pixels.
    pub fn compose<B: BackgroundSampler>(
        &self,
        field: &RippleField,
        background: &B,
        frame: &mut FrameBuffer,
    ) -> Result<(), ComposeError> {
        let scale = field.scale();
        let expected = (field.grid_width() * scale, field.grid_height() * scale);
        if (frame.width, frame.height) != expected {
            return Err(ComposeError::FrameSizeMismatch {
                expected,
                actual: (frame.width, frame.height),
            });
        }

        let heights = field.heights();
        let bg_max_x = background.width().saturating_sub(1);
        let bg_max_y = background.height().saturating_sub(1);

        for gy in 0..field.grid_height() {
            for gx in 0..field.grid_width() {
                let v = heights[(gy * field.grid_width() + gx) as usize];
                let shift = v * self.brightness_gain;

                let px = gx * scale;
                let py = gy * scale;
                let sample = background.color_at(px.min(bg_max_x), py.min(bg_max_y));
                let out = sample.brightened(shift);

                for dy in 0..scale {
                    for dx in 0..scale {
                        frame.set(px + dx, py + dy, out);
                    }
                }
            }
        }

        Ok(())
    }
}
