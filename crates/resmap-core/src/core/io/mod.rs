//! Provides input/output at the boundary of the library.
//!
//! - [`pdb`] reads atom coordinate records into a
//!   [`Structure`](crate::core::models::system::Structure)
//! - [`card`] writes and re-reads integer-truncated contact cards
//! - [`surface`] loads externally computed per-residue surface areas
//!
//! Structure readers share the [`traits::StructureFile`] interface.

pub mod card;
pub mod pdb;
pub mod surface;
pub mod traits;
