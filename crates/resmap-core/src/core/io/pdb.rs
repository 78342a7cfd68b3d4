use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::system::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

const ATOM_RECORD: &str = "ATOM";

const SERIAL_FIELD: usize = 1;
const ATOM_NAME_FIELD: usize = 2;
const RESIDUE_NAME_FIELD: usize = 3;
const CHAIN_FIELD: usize = 4;
const RESIDUE_NUMBER_FIELD: usize = 5;
const X_FIELD: usize = 6;
const Y_FIELD: usize = 7;
const Z_FIELD: usize = 8;
const B_FACTOR_FIELD: usize = 10;

/// Number of whitespace-separated fields an atom record needs (through `z`).
const REQUIRED_FIELDS: usize = Z_FIELD + 1;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind} (line: '{content}')")]
    Parse {
        line: usize,
        content: String,
        kind: PdbParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error(
        "Atom record has {found} fields, at least {required} are required",
        required = REQUIRED_FIELDS
    )]
    TooFewFields { found: usize },
    #[error("Invalid {axis} coordinate (value: '{value}')")]
    InvalidFloat { axis: char, value: String },
    #[error("Atom record is not valid UTF-8")]
    InvalidEncoding,
}

/// Strips a trailing `\n` or `\r\n`.
fn trim_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Whitespace-tokenized reader for `ATOM` coordinate records.
///
/// Every other record type is ignored verbatim, whatever its encoding; only
/// `ATOM` records must be valid UTF-8. Chains, residues and atom names are
/// created lazily in first-appearance order.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut structure = Structure::new();
        let mut atom_records = 0usize;

        let mut buffer = Vec::new();
        let mut line_num = 0usize;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            line_num += 1;

            let raw = trim_line_ending(&buffer);
            if !raw.starts_with(ATOM_RECORD.as_bytes()) {
                continue;
            }
            let line = std::str::from_utf8(raw).map_err(|_| PdbError::Parse {
                line: line_num,
                content: String::from_utf8_lossy(raw).into_owned(),
                kind: PdbParseErrorKind::InvalidEncoding,
            })?;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields[0] != ATOM_RECORD {
                continue;
            }

            let parse_error = |kind| PdbError::Parse {
                line: line_num,
                content: line.to_string(),
                kind,
            };

            if fields.len() < REQUIRED_FIELDS {
                return Err(parse_error(PdbParseErrorKind::TooFewFields {
                    found: fields.len(),
                }));
            }

            let coordinate = |index: usize, axis: char| {
                fields[index].parse::<f64>().map_err(|_| {
                    parse_error(PdbParseErrorKind::InvalidFloat {
                        axis,
                        value: fields[index].to_string(),
                    })
                })
            };
            let x = coordinate(X_FIELD, 'x')?;
            let y = coordinate(Y_FIELD, 'y')?;
            let z = coordinate(Z_FIELD, 'z')?;

            let b_factor = fields
                .get(B_FACTOR_FIELD)
                .and_then(|value| value.parse::<f64>().ok());

            let chain_id = structure.add_chain(fields[CHAIN_FIELD]);
            let residue_id = structure
                .add_residue(
                    chain_id,
                    fields[RESIDUE_NUMBER_FIELD],
                    fields[RESIDUE_NAME_FIELD],
                )
                .ok_or_else(|| {
                    PdbError::Inconsistency(format!("Chain missing on line {}", line_num))
                })?;

            let atom = Atom::new(
                fields[SERIAL_FIELD],
                fields[ATOM_NAME_FIELD],
                residue_id,
                Point3::new(x, y, z),
            )
            .with_b_factor(b_factor);
            structure.upsert_atom(residue_id, atom).ok_or_else(|| {
                PdbError::Inconsistency(format!("Residue missing on line {}", line_num))
            })?;

            atom_records += 1;
        }

        if atom_records == 0 {
            warn!("No {} records found; the structure is empty.", ATOM_RECORD);
        } else {
            debug!(
                atom_records,
                chains = structure.chain_count(),
                residues = structure.residue_count(),
                atoms = structure.atom_count(),
                "Parsed structure."
            );
        }

        Ok(structure)
    }
}
