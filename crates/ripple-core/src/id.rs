//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies one wandering agent within a simulation.
///
/// Allocated sequentially from a per-simulation spawn counter; IDs are
/// never reused within a run, so a renderer can key sprite state on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_id_display_and_ordering() {
        assert_eq!(TickId(7).to_string(), "7");
        assert!(TickId(1) < TickId(2));
        assert_eq!(TickId::from(3u64), TickId(3));
    }

    #[test]
    fn agent_id_display_and_conversion() {
        assert_eq!(AgentId(0).to_string(), "0");
        assert_eq!(AgentId::from(9u32), AgentId(9));
    }
}
