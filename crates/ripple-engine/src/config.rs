//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](SimConfig::validate)
//! checks the structural invariants up front so the constructors of the
//! underlying field and agents cannot fail afterwards.

use std::error::Error;
use std::fmt;

use ripple_core::Tunables;

/// Minimum grid dimension in cells. Below this there is no disturbable
/// interior left between the margins.
pub const MIN_GRID_DIM: u32 = 5;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Scale must be at least 1.
    ZeroScale,
    /// Display width or height is zero.
    ZeroDimension {
        /// Configured display width.
        width: u32,
        /// Configured display height.
        height: u32,
    },
    /// Display dimensions must be whole multiples of the scale so every
    /// grid cell maps to a full pixel block.
    NotScaleAligned {
        /// Configured display width.
        width: u32,
        /// Configured display height.
        height: u32,
        /// Configured scale.
        scale: u32,
    },
    /// The derived grid is too small to simulate.
    GridTooSmall {
        /// Derived grid width (`width / scale`).
        grid_width: u32,
        /// Derived grid height (`height / scale`).
        grid_height: u32,
    },
    /// Ingress queue capacity is zero.
    IngressQueueZero,
    /// Agent speed is NaN, infinite, zero, or negative.
    InvalidAgentSpeed {
        /// The invalid value.
        value: f64,
    },
    /// Agent max-turn is NaN, infinite, or negative.
    InvalidAgentMaxTurn {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroScale => write!(f, "scale must be at least 1"),
            Self::ZeroDimension { width, height } => {
                write!(f, "display dimensions must be non-zero, got {width}x{height}")
            }
            Self::NotScaleAligned {
                width,
                height,
                scale,
            } => write!(
                f,
                "display {width}x{height} is not a whole multiple of scale {scale}"
            ),
            Self::GridTooSmall {
                grid_width,
                grid_height,
            } => write!(
                f,
                "derived grid {grid_width}x{grid_height} is below the minimum of \
                 {MIN_GRID_DIM}x{MIN_GRID_DIM}"
            ),
            Self::IngressQueueZero => write!(f, "max_ingress_queue must be at least 1"),
            Self::InvalidAgentSpeed { value } => {
                write!(f, "agent_speed must be finite and positive, got {value}")
            }
            Self::InvalidAgentMaxTurn { value } => {
                write!(f, "agent_max_turn must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// The default is a 600x400 tank simulated at half resolution with one
/// wandering agent.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
    /// Downsample factor between display and physics grid. Default: 2.
    pub scale: u32,
    /// Initial runtime-tunable parameters (damping, strength, agents).
    pub tunables: Tunables,
    /// Constant agent travel speed in display units per tick. Default: 3.0.
    pub agent_speed: f64,
    /// Per-tick agent turn limit. Default: 0.2.
    pub agent_max_turn: f64,
    /// RNG seed for deterministic agent trajectories.
    pub seed: u64,
    /// Maximum commands buffered in the control ingress queue. Default: 256.
    pub max_ingress_queue: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            scale: 2,
            tunables: Tunables::default(),
            agent_speed: 3.0,
            agent_max_turn: 0.2,
            seed: 0,
            max_ingress_queue: 256,
        }
    }
}

impl SimConfig {
    /// Grid width in cells derived from the display size.
    pub fn grid_width(&self) -> u32 {
        self.width / self.scale
    }

    /// Grid height in cells derived from the display size.
    pub fn grid_height(&self) -> u32 {
        self.height / self.scale
    }

    /// Validate all structural invariants.
    ///
    /// `tunables` needs no checking here: its setters snap every value
    /// into a recognized range at assignment time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.width % self.scale != 0 || self.height % self.scale != 0 {
            return Err(ConfigError::NotScaleAligned {
                width: self.width,
                height: self.height,
                scale: self.scale,
            });
        }
        if self.grid_width() < MIN_GRID_DIM || self.grid_height() < MIN_GRID_DIM {
            return Err(ConfigError::GridTooSmall {
                grid_width: self.grid_width(),
                grid_height: self.grid_height(),
            });
        }
        if self.max_ingress_queue == 0 {
            return Err(ConfigError::IngressQueueZero);
        }
        if !(self.agent_speed.is_finite() && self.agent_speed > 0.0) {
            return Err(ConfigError::InvalidAgentSpeed {
                value: self.agent_speed,
            });
        }
        if !(self.agent_max_turn.is_finite() && self.agent_max_turn >= 0.0) {
            return Err(ConfigError::InvalidAgentMaxTurn {
                value: self.agent_max_turn,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.grid_width(), 300);
        assert_eq!(cfg.grid_height(), 200);
    }

    #[test]
    fn zero_scale_fails() {
        let cfg = SimConfig {
            scale: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroScale));
    }

    #[test]
    fn zero_dimension_fails() {
        let cfg = SimConfig {
            width: 0,
            ..SimConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::ZeroDimension { .. }) => {}
            other => panic!("expected ZeroDimension, got {other:?}"),
        }
    }

    #[test]
    fn misaligned_dimensions_fail() {
        let cfg = SimConfig {
            width: 601,
            ..SimConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::NotScaleAligned { .. }) => {}
            other => panic!("expected NotScaleAligned, got {other:?}"),
        }
    }

    #[test]
    fn tiny_grid_fails() {
        let cfg = SimConfig {
            width: 8,
            height: 8,
            scale: 2,
            ..SimConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::GridTooSmall {
                grid_width: 4,
                grid_height: 4,
            }) => {}
            other => panic!("expected GridTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn zero_queue_fails() {
        let cfg = SimConfig {
            max_ingress_queue: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::IngressQueueZero));
    }

    #[test]
    fn bad_agent_parameters_fail() {
        for speed in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let cfg = SimConfig {
                agent_speed: speed,
                ..SimConfig::default()
            };
            match cfg.validate() {
                Err(ConfigError::InvalidAgentSpeed { .. }) => {}
                other => panic!("expected InvalidAgentSpeed for {speed}, got {other:?}"),
            }
        }
        let cfg = SimConfig {
            agent_max_turn: -0.2,
            ..SimConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidAgentMaxTurn { .. }) => {}
            other => panic!("expected InvalidAgentMaxTurn, got {other:?}"),
        }
        // Zero max-turn is legal: agents travel in straight lines.
        let cfg = SimConfig {
            agent_max_turn: 0.0,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn error_display_messages() {
        let err = ConfigError::GridTooSmall {
            grid_width: 4,
            grid_height: 4,
        };
        assert!(err.to_string().contains("minimum"));
        assert!(ConfigError::ZeroScale.to_string().contains("scale"));
    }
}
