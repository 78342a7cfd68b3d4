//! # Workflows Module
//!
//! High-level entry points that run a complete analysis from parsed structures
//! to summarized results.
//!
//! - **Interface Workflow** ([`interface`]) - contact map between two residue
//!   selections, threshold sweep, interface residue counts and the optional
//!   surface-area correlation.

pub mod interface;
