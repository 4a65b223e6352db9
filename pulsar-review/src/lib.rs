//! Operator review of pulsar candidates.
//!
//! A [`ReviewSession`] holds every candidate paired with its diagnostic
//! image and exposes what a review front end binds to: a filtered and sorted
//! view with a current position, classification with delayed auto-advance,
//! and export back to rows. Rendering, key bindings and file I/O stay with
//! the caller.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`loader`] | [`SessionLoader`], image pairing, the keep-or-clear gate ([`LoadOutcome`]) |
//! | [`session`] | [`ReviewSession`], [`Navigation`], [`PendingAdvance`] |
//! | [`filter`] | [`ClassFilter`] and [`ViewFilter`] |
//! | [`sort`] | [`SortKey`], numeric-then-lexical comparison |
//! | [`item`] | [`ReviewItem`], [`CandidateId`], [`normalized_basename`] |
//! | [`stats`] | [`ClassCounts`], [`ScatterPoint`] |
//! | [`config`] | [`SessionConfig`] |
//!
//! # Threading
//!
//! A session is a plain value with `&mut self` mutators. Callers sharing one
//! across threads wrap it in a single lock; no two mutations may interleave.
//!
//! # Features
//!
//! - **`serde`** (default): `SessionConfig` and `SortKey` (de)serialisation,
//!   `ScatterPoint` serialisation.

pub mod config;
pub mod filter;
pub mod item;
pub mod loader;
pub mod session;
pub mod sort;
pub mod stats;

pub use config::SessionConfig;
pub use filter::{ClassFilter, ViewFilter};
pub use item::{normalized_basename, CandidateId, ReviewItem};
pub use loader::{ExistingClassifications, LoadOutcome, PendingSession, SessionLoader};
pub use session::{Navigation, PendingAdvance, ReviewSession};
pub use sort::{SortDirection, SortKey};
pub use stats::{ClassCounts, ScatterPoint};
