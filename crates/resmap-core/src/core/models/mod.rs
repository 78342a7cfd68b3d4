//! # Core Models Module
//!
//! Data structures describing a parsed macromolecular structure.
//!
//! ## Key Components
//!
//! - [`atom`] - A single atom with its coordinates and optional scalar properties
//! - [`residue`] - A residue and the atoms it owns, in file order
//! - [`chain`] - A chain and its residues, in file order
//! - [`contact`] - Residue × residue contact maps produced by the engine
//! - [`system`] - The [`Structure`](system::Structure) root owning all of the above
//! - [`surface`] - Externally computed solvent-accessible surface areas
//! - [`ids`] - Stable identifiers for atoms, residues and chains
//!
//! ## Usage
//!
//! ```ignore
//! use resmap::core::models::{atom::Atom, system::Structure};
//!
//! let mut structure = Structure::new();
//! let chain_id = structure.add_chain("A");
//! let residue_id = structure.add_residue(chain_id, "1", "ALA")?;
//!
//! let atom = Atom::new("1", "CA", residue_id, Point3::new(0.0, 0.0, 0.0));
//! structure.upsert_atom(residue_id, atom)?;
//! ```

pub mod atom;
pub mod chain;
pub mod contact;
pub mod ids;
pub mod residue;
pub mod surface;
pub mod system;
