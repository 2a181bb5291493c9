//! Search filter model and resolver
//!
//! This module owns the canonical representation of a listing search:
//! [`ParsedFilters`], the [`FilterLens`] that builds one from a
//! [`RawQuery`](crate::query::RawQuery), the canonical query-string
//! serialization, and the two active-filter counts exposed for UI badges.
//!
//! Ephemeral pagination state (`cursor`, `cursorStack`, `pageNumber`,
//! `page`) is never part of this model and never appears in the canonical
//! query string.

pub use parse::FilterLens;

use crate::filters::vocab::{Amenity, HouseRule, Language, LeaseDuration, RoomType, SortKey};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

mod count;
mod parse;
mod serialize;
pub mod vocab;

// =============================================================================
// Types
// =============================================================================

/// A single-value filter selection.
///
/// `Unmatched` carries an unrecognized non-empty raw value. It matches no
/// listing, but it still counts toward the active-filter badge and survives
/// serialization; downstream consumers depend on that legacy behavior, so it
/// is deliberately not dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// No constraint (field absent or the `any` sentinel).
    Any,
    /// A member of the canonical value set.
    Value(T),
    /// An unrecognized raw value, kept verbatim.
    Unmatched(String),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> Selection<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched(_))
    }

    /// Any selection other than the no-constraint state.
    pub fn is_active(&self) -> bool {
        !self.is_any()
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_none(),
            Self::Value(v) => v.serialize(serializer),
            Self::Unmatched(raw) => raw.serialize(serializer),
        }
    }
}

/// A map viewport. Either all four edges are present or the whole viewport
/// is absent; latitudes are clamped to ±90 and longitudes to ±180 upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// The canonical, validated representation of a listing search.
///
/// Constructed fresh on every [`FilterLens::parse`] call; immutable by
/// convention, with no identity beyond its field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedFilters {
    /// Free-text query, trimmed, never empty when present.
    pub query: Option<String>,
    /// Lower price bound, finite and non-negative.
    pub min_price: Option<f64>,
    /// Upper price bound, finite and non-negative.
    pub max_price: Option<f64>,
    /// Earliest acceptable move-in date, within the booking window.
    pub move_in_date: Option<NaiveDate>,
    pub room_type: Selection<RoomType>,
    pub lease_duration: Selection<LeaseDuration>,
    /// Deduplicated, in canonical-list order.
    pub amenities: BTreeSet<Amenity>,
    pub house_rules: BTreeSet<HouseRule>,
    pub languages: BTreeSet<Language>,
    pub sort: SortKey,
    pub bounds: Option<GeoBounds>,
}

/// The caller-visible validation signals. These are the only conditions the
/// resolver reports; everything else malformed is silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// `minPrice` exceeded `maxPrice`; both bounds were discarded.
    PriceRangeConflict { min: f64, max: f64 },
    /// Geographic bounds were inverted after domain clamping; the viewport
    /// was discarded.
    InvertedGeoBounds,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriceRangeConflict { min, max } => write!(
                f,
                "minPrice {} exceeds maxPrice {}; both price bounds dropped",
                min, max
            ),
            Self::InvertedGeoBounds => {
                f.write_str("geographic bounds are inverted; viewport dropped")
            }
        }
    }
}

/// Result of resolving a raw query: best-effort filters plus any recoverable
/// validation signals. Resolution itself never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub filters: ParsedFilters,
    pub warnings: Vec<ParseWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_states() {
        let any: Selection<RoomType> = Selection::Any;
        assert!(any.is_any());
        assert!(!any.is_active());

        let value = Selection::Value(RoomType::Studio);
        assert!(value.is_value());
        assert!(value.is_active());
        assert_eq!(value.as_value(), Some(&RoomType::Studio));

        let unmatched: Selection<RoomType> = Selection::Unmatched("LOFT".to_string());
        assert!(unmatched.is_unmatched());
        assert!(unmatched.is_active());
        assert_eq!(unmatched.as_value(), None);
    }

    #[test]
    fn test_selection_serializes_to_label_raw_or_null() {
        let value = Selection::Value(RoomType::PrivateRoom);
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"Private Room\"");

        let unmatched: Selection<RoomType> = Selection::Unmatched("LOFT".to_string());
        assert_eq!(serde_json::to_string(&unmatched).unwrap(), "\"LOFT\"");

        let any: Selection<RoomType> = Selection::Any;
        assert_eq!(serde_json::to_string(&any).unwrap(), "null");
    }

    #[test]
    fn test_default_filters_are_inactive() {
        let filters = ParsedFilters::default();
        assert_eq!(filters.active_category_count(), 0);
        assert_eq!(filters.active_value_count(), 0);
        assert_eq!(filters.to_query_string(), "");
    }

    #[test]
    fn test_warning_display() {
        let w = ParseWarning::PriceRangeConflict {
            min: 900.0,
            max: 100.0,
        };
        assert!(w.to_string().contains("900"));
        assert!(w.to_string().contains("100"));
    }
}
