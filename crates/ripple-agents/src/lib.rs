//! Wander-steering agents.
//!
//! Agents drift across the display rectangle at constant speed with a
//! randomly perturbed heading, producing organic-looking paths. They own
//! no ripple state; the orchestration layer reads each agent's position
//! after stepping and injects a surface disturbance there.
//!
//! Each agent owns a private ChaCha8 RNG seeded at construction, so one
//! agent's trajectory is reproducible in isolation and the
//! workspace-wide determinism contract (same seed, same trajectories)
//! holds here too.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod wander;

pub use wander::{rescaled, WanderAgent, WanderAgentBuilder};
