//! Runtime-tunable simulation parameters with range snapping.

/// Recognized damping range exposed to control surfaces.
pub const DAMPING_RANGE: (f64, f64) = (0.90, 1.0);

/// Recognized ripple-strength range exposed to control surfaces.
pub const STRENGTH_RANGE: (f64, f64) = (10.0, 100.0);

/// Recognized agent-count range exposed to control surfaces.
pub const AGENT_COUNT_RANGE: (usize, usize) = (1, 5);

/// The runtime-settable parameter set.
///
/// Setters snap out-of-range submissions to the nearest recognized bound
/// rather than erroring — slider-style control surfaces feed these values
/// directly. NaN damping or strength submissions are ignored (the previous
/// value is kept).
#[derive(Clone, Debug, PartialEq)]
pub struct Tunables {
    damping: f64,
    ripple_strength: f64,
    agent_count: usize,
}

impl Tunables {
    /// Create a parameter set, snapping each value into its recognized range.
    pub fn new(damping: f64, ripple_strength: f64, agent_count: usize) -> Self {
        let mut t = Self::default();
        t.set_damping(damping);
        t.set_ripple_strength(ripple_strength);
        t.set_agent_count(agent_count);
        t
    }

    /// Current damping (viscosity) factor.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Current disturbance strength.
    pub fn ripple_strength(&self) -> f64 {
        self.ripple_strength
    }

    /// Current target agent population.
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    /// Set damping, snapped to [`DAMPING_RANGE`]. NaN keeps the old value.
    pub fn set_damping(&mut self, value: f64) {
        if !value.is_nan() {
            self.damping = value.clamp(DAMPING_RANGE.0, DAMPING_RANGE.1);
        }
    }

    /// Set ripple strength, snapped to [`STRENGTH_RANGE`]. NaN keeps the
    /// old value.
    pub fn set_ripple_strength(&mut self, value: f64) {
        if !value.is_nan() {
            self.ripple_strength = value.clamp(STRENGTH_RANGE.0, STRENGTH_RANGE.1);
        }
    }

    /// Set the agent population, snapped to [`AGENT_COUNT_RANGE`].
    pub fn set_agent_count(&mut self, value: usize) {
        self.agent_count = value.clamp(AGENT_COUNT_RANGE.0, AGENT_COUNT_RANGE.1);
    }
}

impl Default for Tunables {
    /// The reference tuning: damping 0.96, strength 40, one agent.
    fn default() -> Self {
        Self {
            damping: 0.96,
            ripple_strength: 40.0,
            agent_count: 1,
        }
    }
}
