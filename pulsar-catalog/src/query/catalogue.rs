//! In-memory index of known pulsars.
//!
//! The catalogue is small (a few thousand entries), so the index is a plain
//! vector for scanning plus a name map for direct lookup. It is built once
//! and never mutated.
//!
//! Rows are decoded with these column aliases:
//!
//! | Field | Columns | Required |
//! |-------|---------|----------|
//! | name | `name`, `JNAME`, `PSRJ` | yes |
//! | period (s) | `period`, `P0` | yes, > 0 |
//! | DM (pc cm⁻³) | `dm`, `DM` | yes, > 0 |
//! | RA | `ra`, `RAJ` (sexagesimal hours or degrees) | no |
//! | Dec | `dec`, `DECJ` | no |
//!
//! Without explicit coordinates the position is decoded from the name
//! (`J0835-4510`). Rows that fail any requirement are skipped and counted.

use std::collections::HashMap;

use pulsar_core::angle::{parse_coordinate, parse_identifier};
use pulsar_core::{Axis, FieldValue, Position, Row, TriageError, TriageResult};
use tracing::{debug, info, warn};

const NAME_COLUMNS: &[&str] = &["name", "JNAME", "PSRJ"];
const PERIOD_COLUMNS: &[&str] = &["period", "P0"];
const DM_COLUMNS: &[&str] = &["dm", "DM"];
const RA_COLUMNS: &[&str] = &["ra", "RAJ"];
const DEC_COLUMNS: &[&str] = &["dec", "DECJ"];

/// A known pulsar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogueEntry {
    name: String,
    period: f64,
    dm: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    position: Option<Position>,
}

impl CatalogueEntry {
    /// # Errors
    /// Empty name, or a period or DM that is not a positive finite number.
    pub fn new(
        name: impl Into<String>,
        period: f64,
        dm: f64,
        position: Option<Position>,
    ) -> TriageResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TriageError::invalid_record("catalogue entry", "empty name"));
        }
        if !(period.is_finite() && period > 0.0) {
            return Err(TriageError::invalid_record(
                &name,
                &format!("period {} is not positive", period),
            ));
        }
        if !(dm.is_finite() && dm > 0.0) {
            return Err(TriageError::invalid_record(
                &name,
                &format!("DM {} is not positive", dm),
            ));
        }
        Ok(Self {
            name,
            period,
            dm,
            position,
        })
    }

    /// Decode an entry from a catalogue row.
    pub fn from_row(row: &Row) -> TriageResult<Self> {
        let name = row
            .get_any(NAME_COLUMNS)
            .map(|v| v.to_text().trim().to_string())
            .ok_or_else(|| TriageError::invalid_record("catalogue row", "missing name"))?;
        let period = row
            .get_any(PERIOD_COLUMNS)
            .and_then(FieldValue::as_f64)
            .ok_or_else(|| TriageError::invalid_record(&name, "missing period"))?;
        let dm = row
            .get_any(DM_COLUMNS)
            .and_then(FieldValue::as_f64)
            .ok_or_else(|| TriageError::invalid_record(&name, "missing DM"))?;

        let position = explicit_position(row).or_else(|| parse_identifier(&name));
        Self::new(name, period, dm, position)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spin period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn dm(&self) -> f64 {
        self.dm
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

fn explicit_position(row: &Row) -> Option<Position> {
    let ra = parse_coordinate(row.get_any(RA_COLUMNS)?, Axis::RightAscension);
    let dec = parse_coordinate(row.get_any(DEC_COLUMNS)?, Axis::Declination);
    Position::new(ra, dec).ok()
}

/// Known-pulsar catalogue, built once per load.
#[derive(Debug, Clone, Default)]
pub struct CatalogueIndex {
    entries: Vec<CatalogueEntry>,
    by_name: HashMap<String, usize>,
    skipped: usize,
}

impl CatalogueIndex {
    /// Build from decoded rows. Malformed rows are skipped, never fatal.
    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Self {
        let mut skipped = 0;
        let entries = rows
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| match CatalogueEntry::from_row(&row) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!(row = i, %err, "skipping catalogue row");
                    skipped += 1;
                    None
                }
            })
            .collect::<Vec<_>>();

        let mut index = Self::from_entries(entries);
        index.skipped += skipped;
        if index.skipped > 0 {
            warn!(
                skipped = index.skipped,
                kept = index.len(),
                "catalogue rows skipped"
            );
        }
        index
    }

    /// Build from already-validated entries. Later duplicates of a name are
    /// dropped.
    pub fn from_entries<I: IntoIterator<Item = CatalogueEntry>>(entries: I) -> Self {
        let mut index = Self::default();
        for entry in entries {
            if index.by_name.contains_key(entry.name()) {
                warn!(name = entry.name(), "duplicate catalogue entry ignored");
                index.skipped += 1;
                continue;
            }
            index
                .by_name
                .insert(entry.name().to_string(), index.entries.len());
            index.entries.push(entry);
        }
        info!(entries = index.entries.len(), "catalogue index built");
        index
    }

    pub fn get(&self, name: &str) -> Option<&CatalogueEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogueEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows or entries rejected while building.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> IntoIterator for &'a CatalogueIndex {
    type Item = &'a CatalogueEntry;
    type IntoIter = std::slice::Iter<'a, CatalogueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[(&str, FieldValue)]) -> Row {
        fields.iter().cloned().collect()
    }

    #[test]
    fn test_entry_from_psrcat_columns() {
        let entry = CatalogueEntry::from_row(&row(&[
            ("JNAME", FieldValue::from("J0835-4510")),
            ("P0", FieldValue::Number(0.089328)),
            ("DM", FieldValue::Number(67.97)),
        ]))
        .unwrap();
        assert_eq!(entry.name(), "J0835-4510");
        assert_eq!(entry.period(), 0.089328);
        assert_eq!(entry.dm(), 67.97);
        let pos = entry.position().unwrap();
        assert!((pos.ra() - 128.75).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_position_wins() {
        let entry = CatalogueEntry::from_row(&row(&[
            ("name", FieldValue::from("J0835-4510")),
            ("period", FieldValue::from("0.089328")),
            ("dm", FieldValue::from("67.97")),
            ("RAJ", FieldValue::from("08:35:20.61")),
            ("DECJ", FieldValue::from("-45:10:34.8")),
        ]))
        .unwrap();
        let pos = entry.position().unwrap();
        assert!((pos.ra() - 128.8359).abs() < 1e-3);
        assert!((pos.dec() + 45.1763).abs() < 1e-3);
    }

    #[test]
    fn test_entry_without_decodable_position() {
        let entry = CatalogueEntry::new("Vela", 0.089, 67.9, None).unwrap();
        assert!(entry.position().is_none());
        let entry = CatalogueEntry::from_row(&row(&[
            ("name", FieldValue::from("Vela")),
            ("period", FieldValue::Number(0.089)),
            ("dm", FieldValue::Number(67.9)),
        ]))
        .unwrap();
        assert!(entry.position().is_none());
    }

    #[test]
    fn test_invalid_entries_rejected() {
        assert!(CatalogueEntry::new("", 1.0, 1.0, None).is_err());
        assert!(CatalogueEntry::new("A", 0.0, 1.0, None).is_err());
        assert!(CatalogueEntry::new("A", -1.0, 1.0, None).is_err());
        assert!(CatalogueEntry::new("A", 1.0, 0.0, None).is_err());
        assert!(CatalogueEntry::new("A", f64::NAN, 1.0, None).is_err());
    }

    #[test]
    fn test_index_skips_malformed_rows() {
        let rows = vec![
            row(&[
                ("JNAME", FieldValue::from("J0437-4715")),
                ("P0", FieldValue::Number(0.005757)),
                ("DM", FieldValue::Number(2.64)),
            ]),
            row(&[
                ("JNAME", FieldValue::from("J9999+0000")),
                ("P0", FieldValue::Empty),
                ("DM", FieldValue::Number(2.0)),
            ]),
            row(&[
                ("JNAME", FieldValue::from("J0000+0000")),
                ("P0", FieldValue::Number(1.0)),
                ("DM", FieldValue::Number(0.0)),
            ]),
            row(&[("P0", FieldValue::Number(1.0))]),
        ];
        let index = CatalogueIndex::from_rows(rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 3);
        assert!(index.get("J0437-4715").is_some());
        assert!(index.get("J9999+0000").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let index = CatalogueIndex::from_entries([
            CatalogueEntry::new("A", 1.0, 10.0, None).unwrap(),
            CatalogueEntry::new("A", 2.0, 20.0, None).unwrap(),
            CatalogueEntry::new("B", 3.0, 30.0, None).unwrap(),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.skipped(), 1);
        assert_eq!(index.get("A").unwrap().period(), 1.0);
        let names: Vec<_> = index.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_empty_index() {
        let index = CatalogueIndex::from_rows(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.skipped(), 0);
    }
}
