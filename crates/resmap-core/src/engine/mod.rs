//! # Engine Module
//!
//! The computational layer of resmap: everything that turns a parsed
//! [`Structure`](crate::core::models::system::Structure) into contact maps and
//! interface summaries.
//!
//! ## Architecture
//!
//! - **Distance Modes** ([`distance`]) - Atom and centroid residue distances over
//!   coordinates extracted once per residue
//! - **Residue Selection** ([`selection`]) - Resolving chain/residue selections into
//!   residue sets bound to a structure
//! - **Tasks** ([`tasks`]) - The parallel contact-map builder and threshold sweep
//! - **Interface Analysis** ([`interface`]) - Unique interface residue counts and
//!   surface-area correlation
//! - **Configuration** ([`config`]) - Validated analysis parameters
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! All residue-pair evaluations are independent. With the `parallel` feature
//! (enabled by default) rows of a contact map and maps of a sweep are computed on
//! the rayon thread pool; each worker only writes its own output.

pub mod config;
pub mod distance;
pub mod error;
pub mod interface;
pub mod progress;
pub mod selection;
pub mod tasks;
