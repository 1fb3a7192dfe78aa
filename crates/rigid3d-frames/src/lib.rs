#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! A [`Posture`] places a local frame inside its parent frame. A
//! [`CoordinateSystem`] chains postures into a tree rooted at
//! [`CoordinateSystem::world`], and translates positions between any two
//! frames of the tree.

mod coordinate_system;
mod error;
mod posture;

pub use coordinate_system::CoordinateSystem;
pub use error::FrameError;
pub use posture::Posture;
