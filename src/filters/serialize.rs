//! Canonical query-string serialization
//!
//! The round-trip partner of [`FilterLens::parse`](super::FilterLens::parse):
//! for any raw query, parsing its serialized form yields the same filters.
//! Parameters are emitted in a fixed order, multi-select fields as one
//! comma-joined value in canonical-list order, and nothing in the default,
//! `any`, or ephemeral-pagination state is ever written.

use crate::filters::vocab::SortKey;
use crate::filters::{ParsedFilters, Selection};
use itertools::Itertools;
use std::fmt;
use url::form_urlencoded;

impl ParsedFilters {
    /// Serialize to the canonical query string (no leading `?`).
    ///
    /// All non-ASCII content is percent-encoded; spaces encode as `+`. An
    /// empty filter set serializes to the empty string.
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());

        if let Some(q) = &self.query {
            ser.append_pair("q", q);
        }
        if let Some(v) = self.min_price {
            ser.append_pair("minPrice", &format_amount(v));
        }
        if let Some(v) = self.max_price {
            ser.append_pair("maxPrice", &format_amount(v));
        }
        if let Some(d) = self.move_in_date {
            ser.append_pair("moveInDate", &d.format("%Y-%m-%d").to_string());
        }

        append_selection(&mut ser, "roomType", &self.room_type);
        append_selection(&mut ser, "leaseDuration", &self.lease_duration);

        if !self.amenities.is_empty() {
            let joined = self.amenities.iter().map(|a| a.label()).join(",");
            ser.append_pair("amenities", &joined);
        }
        if !self.house_rules.is_empty() {
            let joined = self.house_rules.iter().map(|r| r.label()).join(",");
            ser.append_pair("houseRules", &joined);
        }
        if !self.languages.is_empty() {
            let joined = self.languages.iter().map(|l| l.code()).join(",");
            ser.append_pair("languages", &joined);
        }

        if let Some(b) = &self.bounds {
            ser.append_pair("minLat", &format_coord(b.min_lat));
            ser.append_pair("maxLat", &format_coord(b.max_lat));
            ser.append_pair("minLng", &format_coord(b.min_lng));
            ser.append_pair("maxLng", &format_coord(b.max_lng));
        }

        if self.sort != SortKey::default() {
            ser.append_pair("sort", self.sort.id());
        }

        ser.finish()
    }
}

fn append_selection<T: fmt::Display>(
    ser: &mut form_urlencoded::Serializer<'_, String>,
    key: &str,
    selection: &Selection<T>,
) {
    match selection {
        Selection::Any => {}
        Selection::Value(v) => {
            ser.append_pair(key, &v.to_string());
        }
        // unmatched raw values round-trip verbatim so the legacy count
        // survives a URL reload
        Selection::Unmatched(raw) => {
            ser.append_pair(key, raw);
        }
    }
}

/// Whole amounts print without a fractional part, so `500` stays `500`
/// rather than becoming `500.0`.
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn format_coord(value: f64) -> String {
    format!("{}", value)
}
