#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Roomscope - search filter normalization for room-rental listings
//!
//! Roomscope takes the untrusted, possibly duplicated, possibly malformed
//! query parameters of a listing-search URL and produces a canonical,
//! bounded filter object, an active-filter count for UI badges, and a
//! canonical query-string representation that round-trips through the
//! browser URL bar. It can be used as both a command-line application and
//! a library.
//!
//! The resolver is pure and synchronous: it never errors on malformed
//! input, it allocates only call-scoped data, and the same input always
//! produces the same output for a fixed reference date.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | `display` | Table formatting with `tabled` | `tabled` |
//! | `cli` | Full CLI binary | All above + `clap` |
//!
//! # Architecture
//!
//! - **[`query`]**: `RawQuery`, the ordered multi-map of decoded query
//!   parameters, with a standard-decoder constructor
//! - **[`filters`]**: the core resolver
//!   - `vocab`: canonical enum vocabularies and alias tables
//!   - `parse`: `FilterLens`, mapping a `RawQuery` to a `Resolution`
//!   - `serialize`: canonical query-string emission
//!   - `count`: category- and value-granularity filter counts
//! - **[`output`]**: output-format selection and CLI rendering helpers
//!
//! # Quick Start
//!
//! ```
//! use roomscope::{FilterLens, RawQuery};
//!
//! let lens = FilterLens::new();
//! let raw = RawQuery::from_query_str("q=Tokyo&amenities=Wifi,Wifi,Parking&junk=1");
//! let res = lens.parse(&raw);
//!
//! assert_eq!(res.filters.query.as_deref(), Some("Tokyo"));
//! assert_eq!(res.filters.amenities.len(), 2);
//! assert_eq!(res.filters.active_category_count(), 2);
//! ```
//!
//! ## Fixed-time parsing
//!
//! The move-in-date window is evaluated against a reference date read once
//! per lens. Inject it explicitly for reproducible runs:
//!
//! ```
//! use chrono::NaiveDate;
//! use roomscope::{FilterLens, RawQuery};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
//! let lens = FilterLens::with_today(today);
//! let res = lens.parse(&RawQuery::from_query_str("moveInDate=2026-06-01"));
//! assert!(res.filters.move_in_date.is_some());
//! ```

pub mod filters;
pub mod output;
pub mod query;

// =============================================================================
// Core types
// =============================================================================

pub use query::RawQuery;

pub use filters::{FilterLens, GeoBounds, ParseWarning, ParsedFilters, Resolution, Selection};

// Canonical vocabularies
pub use filters::vocab::{Amenity, HouseRule, Language, LeaseDuration, RoomType, SortKey};

// Output format utilities
pub use output::OutputFormat;
