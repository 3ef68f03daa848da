//! Frame composition for the Ripple simulation.
//!
//! Turns a height field into an RGBA frame: each grid cell's height is
//! converted to a brightness shift, added to a background sample, and
//! written as a `scale x scale` block of display pixels. The background
//! is abstracted behind [`BackgroundSampler`] so callers can plug in a
//! decoded image, a solid fallback colour, or anything else that can
//! answer "what colour is pixel (x, y)".
//!
//! This crate is display-toolkit agnostic: it produces a plain pixel
//! buffer and leaves presentation to the embedding application.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod compositor;
pub mod sampler;

pub use color::Rgba;
pub use compositor::{Compositor, ComposeError, FrameBuffer};
pub use sampler::{BackgroundSampler, ImageBackground, SolidBackground};
