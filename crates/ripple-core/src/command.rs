//! Control commands submitted to the simulation between ticks.

/// A command submitted to the simulation's control surface.
///
/// Commands are produced by an external input/UI layer (pointer events,
/// sliders) and applied at the next tick boundary — never mid-tick.
/// Coordinates are in display space; the engine converts to grid
/// coordinates when injecting disturbances.
///
/// # Examples
///
/// ```
/// use ripple_core::Command;
///
/// // A raw disturbance with explicit strength.
/// let splash = Command::Disturb { x: 300.0, y: 200.0, strength: 40.0 };
///
/// // A pointer press; the engine applies the full configured strength.
/// let press = Command::PointerPress { x: 10.0, y: 10.0 };
///
/// assert_ne!(splash, press);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Inject a disturbance with an explicit strength.
    Disturb {
        /// Display-space x coordinate.
        x: f64,
        /// Display-space y coordinate.
        y: f64,
        /// Impulse magnitude added to the height field.
        strength: f64,
    },
    /// A pointer press. Disturbs at the full configured ripple strength.
    PointerPress {
        /// Display-space x coordinate.
        x: f64,
        /// Display-space y coordinate.
        y: f64,
    },
    /// A pointer drag. Disturbs at half the configured ripple strength.
    PointerDrag {
        /// Display-space x coordinate.
        x: f64,
        /// Display-space y coordinate.
        y: f64,
    },
    /// Set the damping factor. Snapped to the recognized [0.90, 1.0] range.
    SetDamping(f64),
    /// Set the ripple strength. Snapped to the recognized [10, 100] range.
    SetRippleStrength(f64),
    /// Set the agent population. Snapped to the recognized [1, 5] range.
    SetAgentCount(usize),
}
