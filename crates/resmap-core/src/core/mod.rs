//! # Core Module
//!
//! Fundamental building blocks shared by every analysis in resmap.
//!
//! - **Structure Representation** ([`models`]) - Atoms, residues, chains and the
//!   [`Structure`](models::system::Structure) that owns them
//! - **File I/O** ([`io`]) - Structure parsing, contact cards and surface-area tables
//! - **Geometry** ([`utils`]) - Distances and centroids over raw coordinates
//!
//! Everything in this layer is a pure function of its inputs. The only mutation a
//! parsed structure ever sees is the surface-area enrichment pass.

pub mod io;
pub mod models;
pub mod utils;
