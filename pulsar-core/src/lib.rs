//! Shared foundations for pulsar candidate triage.
//!
//! `pulsar-core` holds the pieces every other crate in the workspace leans
//! on: sky-position decoding and distance, the decoded-row model that
//! candidate and catalogue tables arrive in, and the error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Position`], identifier and coordinate parsing, angular separation, sexagesimal display |
//! | [`record`] | [`FieldValue`], ordered [`Row`], [`Classification`], the [`Candidate`] envelope |
//! | [`constants`] | Unit conversions |
//! | [`errors`] | [`TriageError`] and [`TriageResult`] |
//!
//! # Design Notes
//!
//! - **Degrees everywhere**: positions and separations are decimal degrees.
//!   Right ascension written in hours is scaled on the way in.
//! - **Unknown is not zero**: unparseable coordinates become `NaN`/`None`
//!   and unknown separations are `+∞`, so they can never pass a distance cut.
//! - **Rows are never rewritten**: a [`Candidate`] keeps its decoded row
//!   verbatim; the classification column is overlaid only at export.
//!
//! # Features
//!
//! - **`serde`** (default): `Serialize`/`Deserialize` for [`FieldValue`],
//!   [`Row`] (order-preserving) and [`Classification`].

pub mod angle;
pub mod constants;
pub mod errors;
pub mod record;

pub use angle::{Axis, Position};
pub use errors::{TriageError, TriageResult};
pub use record::{Candidate, Classification, FieldValue, Row};
