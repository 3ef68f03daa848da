//! Lockstep orchestration for the Ripple simulation.
//!
//! Wires the height field, the wander agents, and the compositor into a
//! single [`Simulation`] advanced one tick at a time, with a bounded
//! control-ingress queue for pointer events and parameter changes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod ingress;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use ingress::ControlHandle;
pub use simulation::{AgentView, Simulation, StepResult, DRAG_RATIO, TRAIL_RATIO};
