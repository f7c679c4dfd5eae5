//! A library for dealing with a standard 52 card deck and the
//! 5 card poker hands drawn from it. It is not a full hand
//! ranking engine; it classifies one hand at a time and ships
//! helpers to estimate how often a category shows up under
//! repeated random dealing.

/// Allow all the core card functionality to be used
/// externally. Everything in core is agnostic to how hands
/// will be sampled.
pub mod core;

/// Monte carlo sampling of hand categories.
#[cfg(feature = "sim")]
pub mod sim;
