//! Motion helpers for the rendering layer: springs, scroll curves, tilt.
//!
//! Core state machines publish target values; everything here turns those
//! targets into what is drawn on a given frame.

pub mod scroll;
pub mod spring;
pub mod tilt;

pub use spring::{Spring, Spring2, SpringConfig};
