//! Error types shared across the Ripple workspace.
//!
//! The numeric core raises nothing at runtime: out-of-grid disturbances,
//! degenerate velocities, and out-of-range sample coordinates all take
//! silent, well-defined fallbacks. The only error surfaced mid-run is
//! from the control-ingress boundary.

use std::error::Error;
use std::fmt;

/// Errors from the control-command ingress queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngressError {
    /// The control queue is at capacity; the command was dropped.
    QueueFull,
    /// The simulation side of the queue has been dropped.
    Disconnected,
}

impl fmt::Display for IngressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "control queue full"),
            Self::Disconnected => write!(f, "simulation has shut down"),
        }
    }
}

impl Error for IngressError {}
