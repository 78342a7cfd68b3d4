//! Tasks are the computational units of the engine.
//!
//! Each task takes residue sets bound to their structures and produces a fresh
//! output owned by the caller. Both tasks are parallel over independent work
//! items when the `parallel` feature is enabled.

pub mod contact_map;
pub mod threshold_sweep;
