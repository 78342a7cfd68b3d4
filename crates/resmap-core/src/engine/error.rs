use crate::core::models::ids::ResidueKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid distance mode '{0}'. Expected 'atom' or 'centroid'.")]
    InvalidMode(String),

    #[error("Residue {residue} has no atoms")]
    EmptyResidue { residue: ResidueKey },

    #[error("Chain '{chain}' not found in structure")]
    UnknownChain { chain: String },

    #[error("Residue not found in structure: {key}")]
    ResidueNotFound { key: ResidueKey },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
