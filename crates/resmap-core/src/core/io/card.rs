//! Contact cards: the plain-text rendering of a contact map.
//!
//! One line per matrix row, values separated by single spaces, each distance
//! truncated toward zero to an integer. Rows may have different lengths, since
//! a thresholded row only holds its surviving contacts.

use crate::core::models::contact::ContactMap;
use itertools::Itertools;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// An integer-truncated contact matrix, as read back from a card.
pub type CardRows = Vec<Vec<i64>>;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid integer on line {line} (value: '{value}')")]
    Parse { line: usize, value: String },
}

/// Writes a contact map as a contact card.
pub fn write_card(map: &ContactMap, writer: &mut impl Write) -> Result<(), CardError> {
    write_rows(&map.truncated_rows(), writer)
}

/// Writes already-truncated rows as a contact card.
pub fn write_rows(rows: &[Vec<i64>], writer: &mut impl Write) -> Result<(), CardError> {
    for row in rows {
        writeln!(writer, "{}", row.iter().join(" "))?;
    }
    Ok(())
}

/// Renders a contact map as contact-card text.
pub fn to_card_string(map: &ContactMap) -> String {
    map.truncated_rows()
        .iter()
        .map(|row| format!("{}\n", row.iter().join(" ")))
        .collect()
}

/// Reads a contact card back into integer rows.
///
/// Every line is a row, including empty ones, so the row count of the written
/// map is preserved.
pub fn read_card(reader: &mut impl BufRead) -> Result<CardRows, CardError> {
    let mut rows = Vec::new();
    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| CardError::Parse {
                    line: line_num + 1,
                    value: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}
