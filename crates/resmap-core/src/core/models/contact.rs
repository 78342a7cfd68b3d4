use super::ids::ResidueKey;
use std::collections::BTreeSet;

/// Truncates a distance toward zero, the integer convention of contact cards.
#[inline]
pub fn truncate_distance(distance: f64) -> i64 {
    distance.trunc() as i64
}

/// A retained residue–residue distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// The residue from the column set.
    pub partner: ResidueKey,
    /// Distance in Angstroms, by whichever mode built the map.
    pub distance: f64,
}

/// One row of a contact map: a residue from the row set and its retained contacts.
///
/// Rows are variable-length. A contact filtered out by a threshold, or a skipped
/// self-pair, leaves no entry rather than a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub residue: ResidueKey,
    /// Contacts in the order the column set was iterated.
    pub contacts: Vec<Contact>,
}

impl ContactRow {
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.contacts.iter().map(|contact| contact.distance)
    }
}

/// Residues taking part in at least one contact, by side of the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceResidues {
    pub rows: BTreeSet<ResidueKey>,
    pub columns: BTreeSet<ResidueKey>,
    distinct_structures: bool,
}

impl InterfaceResidues {
    /// Number of distinct residues.
    ///
    /// Within one structure a key names one residue, so both sides are merged.
    /// Across two structures equal keys name different residues and the sides
    /// are counted separately.
    pub fn len(&self) -> usize {
        if self.distinct_structures {
            self.rows.len() + self.columns.len()
        } else {
            self.rows.union(&self.columns).count()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// A residue × residue contact map.
///
/// Built once per request and never mutated afterwards; deriving a thresholded
/// view produces a new map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMap {
    rows: Vec<ContactRow>,
    distinct_structures: bool,
}

impl ContactMap {
    /// A map whose rows and columns are residues of the same structure.
    pub fn from_rows(rows: Vec<ContactRow>) -> Self {
        Self {
            rows,
            distinct_structures: false,
        }
    }

    /// A map whose rows and columns are residues of two different structures.
    pub fn between_structures(rows: Vec<ContactRow>) -> Self {
        Self {
            rows,
            distinct_structures: true,
        }
    }

    pub fn has_distinct_structures(&self) -> bool {
        self.distinct_structures
    }

    pub fn rows(&self) -> &[ContactRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of retained contacts across all rows.
    pub fn contact_count(&self) -> usize {
        self.rows.iter().map(ContactRow::len).sum()
    }

    /// Distances row by row, in map order.
    pub fn distance_rows(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.distances().collect())
            .collect()
    }

    /// Distances row by row, truncated toward zero.
    pub fn truncated_rows(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.distances().map(truncate_distance).collect())
            .collect()
    }

    /// Derives a map keeping only contacts strictly closer than `threshold`.
    ///
    /// Every row is kept, so the row count never changes.
    pub fn with_threshold(&self, threshold: f64) -> ContactMap {
        let rows = self
            .rows
            .iter()
            .map(|row| ContactRow {
                residue: row.residue.clone(),
                contacts: row
                    .contacts
                    .iter()
                    .filter(|contact| contact.distance < threshold)
                    .cloned()
                    .collect(),
            })
            .collect();
        ContactMap {
            rows,
            distinct_structures: self.distinct_structures,
        }
    }

    /// Residues that take part in at least one retained contact, from either side.
    pub fn interface_residues(&self) -> InterfaceResidues {
        let mut residues = InterfaceResidues {
            distinct_structures: self.distinct_structures,
            ..Default::default()
        };
        for row in self.rows.iter().filter(|row| !row.is_empty()) {
            residues.rows.insert(row.residue.clone());
            residues
                .columns
                .extend(row.contacts.iter().map(|contact| contact.partner.clone()));
        }
        residues
    }
}
