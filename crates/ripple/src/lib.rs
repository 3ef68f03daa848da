//! Ripple: an interactive water-surface simulation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Ripple sub-crates. For most users, adding `ripple` as a
//! single dependency is sufficient.
//!
//! A simulation couples three pieces, advanced in lockstep each tick:
//! a double-buffered wave-propagation height field, a school of
//! wander-steering agents that leave ripple trails, and a compositor
//! that turns heights into brightness shifts over a background image.
//! Pointer events and parameter changes arrive through a bounded
//! control queue and apply at tick boundaries.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // A 600x400 tank simulated at half resolution, one agent.
//! let mut sim = Simulation::new(SimConfig::default()).unwrap();
//! let controls = sim.control_handle();
//!
//! // A pointer press queues a splash for the next tick.
//! controls
//!     .submit(Command::PointerPress { x: 120.0, y: 90.0 })
//!     .unwrap();
//! let result = sim.step();
//! assert_eq!(result.tick, TickId(1));
//! assert_eq!(result.commands_applied, 1);
//!
//! // Compose a frame over the fallback background.
//! let background = SolidBackground::dark_blue(600, 400).unwrap();
//! let mut frame = FrameBuffer::new(600, 400).unwrap();
//! sim.render(&background, &mut frame).unwrap();
//!
//! // Agent poses come back from each step, ready for sprite drawing.
//! for agent in &result.agents {
//!     let _ = (agent.x, agent.y, agent.heading);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | IDs, commands, tunables, ingress errors |
//! | [`field`] | `ripple-field` | The double-buffered height field |
//! | [`agents`] | `ripple-agents` | Wander-steering agents |
//! | [`render`] | `ripple-render` | Colours, background samplers, compositor |
//! | [`engine`] | `ripple-engine` | The lockstep simulation and its config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and commands (`ripple-core`).
pub use ripple_core as types;

/// The double-buffered wave-propagation height field (`ripple-field`).
///
/// [`field::RippleField`] is usable standalone when neither agents nor
/// rendering are wanted.
pub use ripple_field as field;

/// Wander-steering agents (`ripple-agents`).
///
/// [`agents::WanderAgent`] implements the perturb/renormalise/contain
/// steering loop; trajectories are deterministic per RNG stream.
pub use ripple_agents as agents;

/// Frame composition (`ripple-render`).
///
/// [`render::Compositor`] writes a height field over any
/// [`render::BackgroundSampler`] into a [`render::FrameBuffer`].
pub use ripple_render as render;

/// Lockstep orchestration (`ripple-engine`).
///
/// [`engine::Simulation`] drives field, agents, and controls one tick
/// at a time.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{AgentId, Command, IngressError, TickId, Tunables};

    // Field
    pub use ripple_field::RippleField;

    // Agents
    pub use ripple_agents::WanderAgent;

    // Render
    pub use ripple_render::{
        BackgroundSampler, Compositor, FrameBuffer, ImageBackground, Rgba, SolidBackground,
    };

    // Engine
    pub use ripple_engine::{
        AgentView, ConfigError, ControlHandle, SimConfig, Simulation, StepResult,
    };
}
