//! Candidate records: the decoded row plus the handful of typed fields the
//! engine actually reads.
//!
//! A [`Candidate`] never changes its original row. Everything the engine
//! needs (frequency, DM, S/N, position) is decoded once into
//! [`KnownFields`]; everything else rides along untouched and comes back out
//! on export through [`Candidate::to_export_row`].

use super::classification::Classification;
use super::row::Row;
use super::value::FieldValue;
use crate::angle::{parse_coordinate, Axis, Position};

pub const PNG_FILE_COLUMN: &str = "png_file";
pub const CLASSIFICATION_COLUMN: &str = "classification";

const F0_RAW: &[&str] = &["f0_old"];
const F0_OPTIMISED: &[&str] = &["f0_new"];
const DM_RAW: &[&str] = &["dm_old"];
const DM_OPTIMISED: &[&str] = &["dm_new"];
const SNR_RAW: &[&str] = &["S/N_old", "S/N"];
const SNR_OPTIMISED: &[&str] = &["S/N_new"];
const ACCELERATION: &[&str] = &["acc_new"];
const RA: &[&str] = &["ra", "RA", "raj", "RAJ"];
const DEC: &[&str] = &["dec", "DEC", "decj", "DECJ"];

/// Typed subset of a candidate row.
///
/// Raw values come from the search stage, optimised values from folding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnownFields {
    pub png_file: Option<String>,
    pub f0_raw: Option<f64>,
    pub f0_optimised: Option<f64>,
    pub dm_raw: Option<f64>,
    pub dm_optimised: Option<f64>,
    pub snr_raw: Option<f64>,
    pub snr_optimised: Option<f64>,
    pub acceleration: Option<f64>,
    pub position: Option<Position>,
}

impl KnownFields {
    fn from_row(row: &Row) -> Self {
        let number = |columns: &[&str]| row.get_any(columns).and_then(FieldValue::as_f64);

        let position = match (row.get_any(RA), row.get_any(DEC)) {
            (Some(ra), Some(dec)) => {
                let ra = parse_coordinate(ra, Axis::RightAscension);
                let dec = parse_coordinate(dec, Axis::Declination);
                Position::new(ra, dec).ok()
            }
            _ => None,
        };

        Self {
            png_file: row
                .get(PNG_FILE_COLUMN)
                .filter(|v| !v.is_blank())
                .map(FieldValue::to_text),
            f0_raw: number(F0_RAW),
            f0_optimised: number(F0_OPTIMISED),
            dm_raw: number(DM_RAW),
            dm_optimised: number(DM_OPTIMISED),
            snr_raw: number(SNR_RAW),
            snr_optimised: number(SNR_OPTIMISED),
            acceleration: number(ACCELERATION),
            position,
        }
    }

    fn is_known_column(column: &str) -> bool {
        column == PNG_FILE_COLUMN
            || column == CLASSIFICATION_COLUMN
            || [
                F0_RAW,
                F0_OPTIMISED,
                DM_RAW,
                DM_OPTIMISED,
                SNR_RAW,
                SNR_OPTIMISED,
                ACCELERATION,
                RA,
                DEC,
            ]
            .iter()
            .any(|group| group.contains(&column))
    }
}

/// Optimised wins only when it is a positive number.
fn prefer_optimised(optimised: Option<f64>, raw: Option<f64>) -> Option<f64> {
    match optimised {
        Some(v) if v > 0.0 => Some(v),
        _ => raw,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    original: Row,
    known: KnownFields,
    classification: Classification,
    had_classification_column: bool,
    relabelled: bool,
}

impl Candidate {
    /// Decode a candidate from a row.
    ///
    /// A recognised label in the classification column becomes the starting
    /// classification. An unrecognised label starts as `Unclassified` but
    /// still counts as an existing classification for the load-time gate,
    /// and is exported verbatim until the candidate is relabelled.
    pub fn from_row(row: Row) -> Self {
        let known = KnownFields::from_row(&row);
        let had_classification_column = row.contains(CLASSIFICATION_COLUMN);
        let classification = row
            .get(CLASSIFICATION_COLUMN)
            .and_then(|v| v.to_text().parse().ok())
            .unwrap_or_default();

        Self {
            original: row,
            known,
            classification,
            had_classification_column,
            relabelled: false,
        }
    }

    pub fn original_row(&self) -> &Row {
        &self.original
    }

    pub fn known(&self) -> &KnownFields {
        &self.known
    }

    /// Columns not decoded into [`KnownFields`].
    pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.original
            .iter()
            .filter(|(column, _)| !KnownFields::is_known_column(column))
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn set_classification(&mut self, label: Classification) {
        self.classification = label;
        self.relabelled = true;
    }

    /// Whether [`set_classification`](Self::set_classification) has been
    /// called since loading.
    pub fn is_relabelled(&self) -> bool {
        self.relabelled
    }

    pub fn had_classification_column(&self) -> bool {
        self.had_classification_column
    }

    /// The non-blank classification value the source row carried, if any.
    pub fn existing_classification(&self) -> Option<&FieldValue> {
        self.original
            .get(CLASSIFICATION_COLUMN)
            .filter(|v| !v.is_blank())
    }

    pub fn png_file(&self) -> Option<&str> {
        self.known.png_file.as_deref()
    }

    /// Spin frequency in Hz. `None` unless some positive value exists.
    pub fn spin_frequency(&self) -> Option<f64> {
        prefer_optimised(self.known.f0_optimised, self.known.f0_raw).filter(|f| *f > 0.0)
    }

    /// Spin period in seconds.
    pub fn period(&self) -> Option<f64> {
        self.spin_frequency().map(|f| 1.0 / f)
    }

    pub fn period_ms(&self) -> Option<f64> {
        self.period().map(|p| p * 1000.0)
    }

    pub fn dm(&self) -> Option<f64> {
        prefer_optimised(self.known.dm_optimised, self.known.dm_raw)
    }

    pub fn snr(&self) -> Option<f64> {
        prefer_optimised(self.known.snr_optimised, self.known.snr_raw)
    }

    pub fn acceleration(&self) -> Option<f64> {
        self.known.acceleration
    }

    pub fn position(&self) -> Option<Position> {
        self.known.position
    }

    /// The original row with the classification column set to the current
    /// label. Existing columns keep their position.
    ///
    /// A non-blank label loaded from the row is written back exactly as it
    /// was read, unrecognised text and case included, until the candidate is
    /// relabelled.
    pub fn to_export_row(&self) -> Row {
        let mut row = self.original.clone();
        if self.relabelled || self.existing_classification().is_none() {
            row.insert(CLASSIFICATION_COLUMN, self.classification.label());
        }
        row
    }
}
