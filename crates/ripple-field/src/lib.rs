//! Double-buffered wave-propagation height field.
//!
//! This crate owns the numerical heart of the Ripple simulation: a
//! discrete height grid advanced by a simplified second-order propagation
//! rule with per-step damping. It is a leaf crate with no internal
//! dependencies; disturbance injection and stepping are driven by an
//! orchestration layer, and the resulting heights are consumed by a
//! compositor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;

pub use field::{RippleField, RippleFieldBuilder, DISTURB_MARGIN};
