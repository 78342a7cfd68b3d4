use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    pub struct AtomId;
    pub struct ResidueId;
    pub struct ChainId;
}

/// Identifies a residue by the labels written in the source file.
///
/// Unlike [`ResidueId`], which is only meaningful inside the [`Structure`] that
/// issued it, a `ResidueKey` can be compared across structures and is what
/// reports and surface-area tables are keyed by.
///
/// [`Structure`]: super::system::Structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResidueKey {
    /// The chain identifier (e.g., "A").
    pub chain: String,
    /// The residue sequence identifier as written (e.g., "42" or "52A").
    pub residue: String,
}

impl ResidueKey {
    pub fn new(chain: impl Into<String>, residue: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            residue: residue.into(),
        }
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain, self.residue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_key_displays_chain_and_number() {
        assert_eq!(ResidueKey::new("B", "52A").to_string(), "B:52A");
    }

    #[test]
    fn residue_keys_order_by_chain_then_residue() {
        let mut keys = vec![
            ResidueKey::new("B", "1"),
            ResidueKey::new("A", "2"),
            ResidueKey::new("A", "1"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                ResidueKey::new("A", "1"),
                ResidueKey::new("A", "2"),
                ResidueKey::new("B", "1"),
            ]
        );
    }
}
