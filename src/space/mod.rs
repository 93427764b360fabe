//! Code space generation
//!
//! Lazily enumerates, indexes and samples every valid code for a game
//! configuration without materializing the whole space.

mod generator;

pub use generator::{CodeSpace, Codes};
