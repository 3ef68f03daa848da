//! Shared vocabulary for the ripple simulation crates.
//!
//! Everything the sibling crates agree on lives here: the [`TickId`]
//! and [`AgentId`] newtypes, the [`Command`] enum carried over the
//! control channel, the range-snapped [`Tunables`] set, and the
//! [`IngressError`] a producer sees when a command cannot be queued.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod id;
pub mod params;

pub use command::Command;
pub use error::IngressError;
pub use id::{AgentId, TickId};
pub use params::Tunables;
