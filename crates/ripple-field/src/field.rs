//! The double-buffered ripple height field.
//!
//! Two same-length flat buffers, `previous` and `current`, alternate
//! roles each step:
//!
//! ```text
//! disturb() ──▶ previous            (impulses accumulate here)
//! step():       current[i] = (N + S + W + E of previous) / 2 − current[i]
//!               current[i] *= damping
//!               swap(previous, current)
//! heights() ──▶ previous            (read view for rendering)
//! ```
//!
//! The averaging-minus-self rule approximates wave inertia: each cell
//! overshoots the mean of its neighbours by however far it was displaced
//! the step before, and damping bleeds energy every step. The swap is a
//! handle swap of the two owned vectors — no per-cell copy, no
//! allocation.
//!
//! Cells on the outermost 1-cell border are never written by `step()`;
//! they retain whatever value they last had. This fixed, non-propagating
//! boundary is part of the visible wave behaviour at the tank edges and
//! must not be "fixed" into a reflective or absorbing one.
//!
//! Constructed via the builder pattern: [`RippleField::builder`].

use std::mem;

/// Disturbances landing within this many cells of any grid edge are
/// ignored. Leaves room for the 1-cell propagation stencil plus a
/// rendering margin on every side.
pub const DISTURB_MARGIN: u32 = 2;

/// Smallest grid dimension that still has a disturbable interior.
const MIN_DIM: u32 = 2 * DISTURB_MARGIN + 1;

/// A double-buffered height grid advanced by a simplified discrete
/// wave-propagation rule.
///
/// Heights are unbounded reals; clamping happens only at render time.
/// The grid is allocated once at construction and never resized.
#[derive(Clone, Debug)]
pub struct RippleField {
    grid_width: u32,
    grid_height: u32,
    scale: u32,
    damping: f32,
    previous: Vec<f32>,
    current: Vec<f32>,
}

/// Builder for [`RippleField`].
///
/// Required fields: `grid_width` and `grid_height`.
pub struct RippleFieldBuilder {
    grid_width: Option<u32>,
    grid_height: Option<u32>,
    scale: u32,
    damping: f32,
}

impl RippleField {
    /// Create a new builder for configuring a `RippleField`.
    pub fn builder() -> RippleFieldBuilder {
        RippleFieldBuilder {
            grid_width: None,
            grid_height: None,
            scale: 1,
            damping: 0.96,
        }
    }

    /// Grid width in cells (display width divided by the downsample factor).
    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    /// Grid height in cells.
    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    /// Integer downsample factor between display and grid coordinates.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Current damping factor.
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Set the damping factor for subsequent steps.
    ///
    /// Values at or above 1.0 make the field gain energy each step;
    /// control surfaces are expected to snap into a sensible range
    /// before calling this.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping;
    }

    /// The read view of the field: the `previous` buffer, row-major,
    /// `grid_width × grid_height` long. This is the buffer disturbances
    /// land in and the one a compositor should sample.
    pub fn heights(&self) -> &[f32] {
        &self.previous
    }

    /// Height of a single grid cell from the read view.
    ///
    /// # Panics
    ///
    /// Panics if `gx >= grid_width` or `gy >= grid_height`.
    pub fn height_at(&self, gx: u32, gy: u32) -> f32 {
        assert!(gx < self.grid_width && gy < self.grid_height);
        self.previous[(gy * self.grid_width + gx) as usize]
    }

    /// Sum of absolute heights across both buffers.
    ///
    /// With damping in (0,1) and no further disturbance this is
    /// non-increasing in the long run — the dissipation property the
    /// tests pin down.
    pub fn total_magnitude(&self) -> f64 {
        self.previous
            .iter()
            .chain(self.current.iter())
            .map(|&v| f64::from(v.abs()))
            .sum()
    }

    /// Inject a disturbance at a display-space location.
    ///
    /// The location is converted to grid coordinates by integer-dividing
    /// by the downsample factor. If the target cell is at least
    /// [`DISTURB_MARGIN`] cells from every edge, `strength` is added to
    /// the `previous` buffer at that cell; otherwise the call is a
    /// silent no-op. Negative strength cancels height rather than adding
    /// it — the field does not police the sign.
    pub fn disturb(&mut self, x: f64, y: f64, strength: f32) {
        let gx = (x / f64::from(self.scale)) as i64;
        let gy = (y / f64::from(self.scale)) as i64;

        let margin = i64::from(DISTURB_MARGIN);
        let in_x = gx >= margin && gx < i64::from(self.grid_width) - margin;
        let in_y = gy >= margin && gy < i64::from(self.grid_height) - margin;
        if in_x && in_y {
            let idx = (gy * i64::from(self.grid_width) + gx) as usize;
            self.previous[idx] += strength;
        }
    }

    /// Advance the field one step.
    ///
    /// Every interior cell (1-cell border excluded) is rewritten from
    /// the prior average of its four orthogonal neighbours in `previous`,
    /// discounted by its own stale `current` value, then damped. The
    /// buffers then swap roles: the freshly written buffer becomes the
    /// new `previous` for the next disturb/read cycle.
    ///
    /// O(grid cells), zero allocation.
    pub fn step(&mut self) {
        let w = self.grid_width as usize;
        let h = self.grid_height as usize;
        let damping = self.damping;

        for y in 1..h - 1 {
            let row = y * w;
            for x in 1..w - 1 {
                let i = row + x;
                let neighbours = self.previous[i - 1]
                    + self.previous[i + 1]
                    + self.previous[i - w]
                    + self.previous[i + w];
                self.current[i] = (neighbours / 2.0 - self.current[i]) * damping;
            }
        }

        mem::swap(&mut self.previous, &mut self.current);
    }
}

impl RippleFieldBuilder {
    /// Set the grid width in cells.
    pub fn grid_width(mut self, cells: u32) -> Self {
        self.grid_width = Some(cells);
        self
    }

    /// Set the grid height in cells.
    pub fn grid_height(mut self, cells: u32) -> Self {
        self.grid_height = Some(cells);
        self
    }

    /// Set the downsample factor (default: 1). Must be >= 1.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the damping factor (default: 0.96). Must be in (0, 1].
    /// Damping of exactly 1.0 means waves never lose energy.
    pub fn damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Build the field, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `grid_width` or `grid_height` is not set
    /// - either dimension is below the minimum that leaves a disturbable
    ///   interior (`2 * DISTURB_MARGIN + 1`)
    /// - `scale` is 0
    /// - `damping` is not in (0, 1]
    pub fn build(self) -> Result<RippleField, String> {
        let grid_width = self
            .grid_width
            .ok_or_else(|| "grid_width is required".to_string())?;
        let grid_height = self
            .grid_height
            .ok_or_else(|| "grid_height is required".to_string())?;

        if grid_width < MIN_DIM || grid_height < MIN_DIM {
            return Err(format!(
                "grid must be at least {MIN_DIM}x{MIN_DIM} cells, got {grid_width}x{grid_height}"
            ));
        }
        if self.scale == 0 {
            return Err("scale must be >= 1".to_string());
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            ));
        }

        let cells = (grid_width as usize) * (grid_height as usize);
        Ok(RippleField {
            grid_width,
            grid_height,
            scale: self.scale,
            damping: self.damping,
            previous: vec![0.0; cells],
            current: vec![0.0; cells],
        })
    }
}
