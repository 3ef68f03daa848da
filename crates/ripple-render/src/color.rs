//! Linear RGBA colour with unit-interval channels.

/// An RGBA colour. Channels are `f32` in `[0, 1]`; construction through
/// [`Rgba::new`] clamps, so a stored colour is always in range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black, the initial contents of a frame buffer.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// The default water colour used when no background image is
    /// available (CSS `darkblue`, `#00008B`).
    pub const DARK_BLUE: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 139.0 / 255.0,
        a: 1.0,
    };

    /// Build a colour, clamping every channel into `[0, 1]`. NaN
    /// channels clamp to 0.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Rgba {
        Rgba {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Build an opaque colour from the three colour channels.
    pub fn opaque(r: f32, g: f32, b: f32) -> Rgba {
        Rgba::new(r, g, b, 1.0)
    }

    /// This colour with every colour channel shifted by `delta` and
    /// re-clamped. Alpha is forced to 1: a composited water pixel is
    /// always opaque regardless of the background's alpha.
    pub fn brightened(self, delta: f32) -> Rgba {
        Rgba::new(self.r + delta, self.g + delta, self.b + delta, 1.0)
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v > 1.0 {
        1.0
    } else if v >= 0.0 {
        v
    } else {
        // Negative or NaN.
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_channels() {
        let c = Rgba::new(-0.5, 1.5, 0.25, f32::NAN);
        assert_eq!(c, Rgba::new(0.0, 1.0, 0.25, 0.0));
    }

    #[test]
    fn brightened_shifts_and_forces_opaque() {
        let c = Rgba::new(0.2, 0.5, 0.9, 0.3).brightened(0.2);
        assert_eq!(c.r, 0.4);
        assert_eq!(c.g, 0.7);
        assert!((c.b - 1.0).abs() < 1e-6); // clamped
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn brightened_negative_shift_clamps_at_zero() {
        let c = Rgba::opaque(0.1, 0.5, 0.9).brightened(-0.3);
        assert_eq!(c.r, 0.0);
        assert!((c.g - 0.2).abs() < 1e-6);
    }

    #[test]
    fn dark_blue_matches_css() {
        assert_eq!(Rgba::DARK_BLUE.b, 139.0 / 255.0);
        assert_eq!(Rgba::DARK_BLUE.a, 1.0);
    }
}
