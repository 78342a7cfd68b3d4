//! # resmap Core Library
//!
//! Residue-level proximity analysis for macromolecular structures: parse atom
//! records into a chain → residue → atom hierarchy, measure residue–residue
//! distances, and summarize interaction interfaces across distance thresholds.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split throughout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`), the
//!   structure parser, contact-card and surface-area table I/O, and point-level
//!   geometry.
//!
//! - **[`engine`]: The Logic Core.** Distance modes, residue-set resolution and the
//!   parallel tasks that build contact maps and threshold sweeps, plus interface
//!   counting and surface-area correlation.
//!
//! - **[`workflows`]: The Public API.** Complete analyses that tie `core` and
//!   `engine` together behind a single configuration object.

pub mod core;
pub mod engine;
pub mod workflows;
