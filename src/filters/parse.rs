//! Query-parameter resolution
//!
//! [`FilterLens`] maps a [`RawQuery`] to a [`Resolution`]: a best-effort
//! [`ParsedFilters`] plus any recoverable validation warnings. It never
//! fails: malformed fragments are dropped, out-of-domain coordinates are
//! clamped, unknown parameters are ignored, and duplicate keys resolve to
//! the first occurrence.
//!
//! The one piece of ambient state the rules need, "today" for the move-in
//! window, is captured once at lens construction so that a parse call is
//! referentially transparent and testable with a fixed date.

use crate::filters::vocab::SortKey;
use crate::filters::{GeoBounds, ParseWarning, ParsedFilters, Resolution, Selection};
use crate::query::RawQuery;
use chrono::{Months, NaiveDate, Utc};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::{debug, trace};

/// Resolver from raw query parameters to canonical filters.
#[derive(Debug, Clone, Copy)]
pub struct FilterLens {
    today: NaiveDate,
}

impl Default for FilterLens {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterLens {
    /// A lens anchored at the current UTC date.
    pub fn new() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }

    /// A lens anchored at an explicit reference date, for reproducible runs.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The reference date the move-in window is evaluated against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Resolve a raw query into canonical filters.
    ///
    /// Duplicate parameter keys resolve to the first occurrence. Unknown
    /// parameter names, unknown enum values, empty list segments, and
    /// non-finite or negative numbers are dropped silently. The only
    /// caller-visible signals are the [`ParseWarning`] conflicts.
    pub fn parse(&self, raw: &RawQuery) -> Resolution {
        let mut filters = ParsedFilters::default();
        let mut warnings = Vec::new();

        filters.query = raw
            .first("q")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);

        let min_price = raw.first("minPrice").and_then(parse_price);
        let max_price = raw.first("maxPrice").and_then(parse_price);
        match (min_price, max_price) {
            (Some(min), Some(max)) if min > max => {
                debug!("conflicting price bounds {} > {}, dropping both", min, max);
                warnings.push(ParseWarning::PriceRangeConflict { min, max });
            }
            (min, max) => {
                filters.min_price = min;
                filters.max_price = max;
            }
        }

        filters.move_in_date = raw
            .first("moveInDate")
            .and_then(|v| self.parse_move_in_date(v));

        filters.room_type = parse_selection(raw.first("roomType"));
        filters.lease_duration = parse_selection(raw.first("leaseDuration"));

        filters.amenities = parse_set(raw.first("amenities"));
        filters.house_rules = parse_set(raw.first("houseRules"));
        filters.languages = parse_set(raw.first("languages"));

        filters.sort = raw.first("sort").map(parse_sort).unwrap_or_default();

        filters.bounds = parse_bounds(raw, &mut warnings);

        Resolution { filters, warnings }
    }

    /// Valid move-in dates are today or later, and strictly inside the
    /// booking window. With today = 2025-12-29 the first rejected date is
    /// 2027-12-28.
    fn parse_move_in_date(&self, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        // tolerate an ISO datetime suffix; time of day is ignored
        let date_part = value.split('T').next().unwrap_or(value);
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;

        let window_end = self
            .today
            .checked_add_months(Months::new(24))?
            .pred_opt()?;
        if date < self.today || date >= window_end {
            debug!("move-in date {} outside booking window, dropping", date);
            return None;
        }
        Some(date)
    }
}

/// Non-negative, finite decimal or nothing. `NaN`, `inf`, and negative
/// values all read as "no bound".
fn parse_price(value: &str) -> Option<f64> {
    let v = value.trim().parse::<f64>().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

/// Single-value enum selection. Empty and the `any` sentinel mean no
/// constraint; unrecognized non-empty values are kept as `Unmatched` so the
/// active-filter count reflects them (legacy contract, see module docs on
/// `filters`).
fn parse_selection<T: FromStr>(value: Option<&str>) -> Selection<T> {
    let Some(value) = value else {
        return Selection::Any;
    };
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
        return Selection::Any;
    }
    match trimmed.parse::<T>() {
        Ok(v) => Selection::Value(v),
        Err(_) => {
            debug!("unrecognized selection value {:?}, keeping as unmatched", trimmed);
            Selection::Unmatched(trimmed.to_string())
        }
    }
}

/// Unrecognized sort values fall back to the default silently.
fn parse_sort(value: &str) -> SortKey {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
        return SortKey::default();
    }
    match trimmed.parse::<SortKey>() {
        Ok(key) => key,
        Err(_) => {
            trace!("unrecognized sort value {:?}, using default", trimmed);
            SortKey::default()
        }
    }
}

/// Comma-separated multi-select. Segments are trimmed, empty segments and
/// unknown values dropped, duplicates collapse via set semantics.
fn parse_set<T>(value: Option<&str>) -> BTreeSet<T>
where
    T: FromStr + Ord,
{
    let mut out = BTreeSet::new();
    let Some(value) = value else {
        return out;
    };
    for segment in value.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match segment.parse::<T>() {
            Ok(v) => {
                out.insert(v);
            }
            Err(_) => debug!("dropping unrecognized list value {:?}", segment),
        }
    }
    out
}

/// All four edges or nothing. Latitudes clamp to ±90, longitudes to ±180;
/// a viewport still inverted after clamping is discarded with a warning.
fn parse_bounds(raw: &RawQuery, warnings: &mut Vec<ParseWarning>) -> Option<GeoBounds> {
    let min_lat = parse_coord(raw.first("minLat"), 90.0)?;
    let max_lat = parse_coord(raw.first("maxLat"), 90.0)?;
    let min_lng = parse_coord(raw.first("minLng"), 180.0)?;
    let max_lng = parse_coord(raw.first("maxLng"), 180.0)?;

    if min_lat > max_lat || min_lng > max_lng {
        debug!("inverted geo bounds, dropping viewport");
        warnings.push(ParseWarning::InvertedGeoBounds);
        return None;
    }
    Some(GeoBounds {
        min_lat,
        max_lat,
        min_lng,
        max_lng,
    })
}

fn parse_coord(value: Option<&str>, domain: f64) -> Option<f64> {
    let v = value?.trim().parse::<f64>().ok()?;
    v.is_finite().then(|| v.clamp(-domain, domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::vocab::{Amenity, HouseRule, Language, RoomType};

    fn lens() -> FilterLens {
        FilterLens::with_today(NaiveDate::from_ymd_opt(2025, 12, 29).unwrap())
    }

    fn parse(query: &str) -> Resolution {
        lens().parse(&RawQuery::from_query_str(query))
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = RawQuery::from_query_str("q=tokyo&amenities=Wifi,Parking&minPrice=500");
        let first = lens().parse(&raw);
        let second = lens().parse(&raw);
        assert_eq!(first, second);
    }

    #[test]
    fn test_free_text_trimmed_and_empty_dropped() {
        assert_eq!(parse("q=+++tokyo++").filters.query.as_deref(), Some("tokyo"));
        assert_eq!(parse("q=++").filters.query, None);
        assert_eq!(parse("q=").filters.query, None);
        assert_eq!(parse("").filters.query, None);
    }

    #[test]
    fn test_free_text_no_case_transform_no_truncation() {
        assert_eq!(parse("q=ToKyO").filters.query.as_deref(), Some("ToKyO"));
        let long = "x".repeat(2500);
        let res = parse(&format!("q={}", long));
        assert_eq!(res.filters.query.as_deref(), Some(long.as_str()));
    }

    #[test]
    fn test_unicode_query_decodes() {
        assert_eq!(
            parse("q=%E6%9D%B1%E4%BA%AC").filters.query.as_deref(),
            Some("東京")
        );
    }

    #[test]
    fn test_injection_shaped_input_stays_inert_text() {
        let res = parse("q=%3Cscript%3Ealert(1)%3C%2Fscript%3E&sort=javascript:alert(1)");
        assert_eq!(
            res.filters.query.as_deref(),
            Some("<script>alert(1)</script>")
        );
        assert_eq!(res.filters.sort, SortKey::Newest);
    }

    #[test]
    fn test_price_bounds_parsed_independently() {
        let res = parse("minPrice=500&maxPrice=1500");
        assert_eq!(res.filters.min_price, Some(500.0));
        assert_eq!(res.filters.max_price, Some(1500.0));
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn test_price_garbage_dropped() {
        let res = parse("minPrice=abc&maxPrice=NaN");
        assert_eq!(res.filters.min_price, None);
        assert_eq!(res.filters.max_price, None);

        let res = parse("minPrice=-50&maxPrice=Infinity");
        assert_eq!(res.filters.min_price, None);
        assert_eq!(res.filters.max_price, None);

        let res = parse("minPrice=true&maxPrice=1200");
        assert_eq!(res.filters.min_price, None);
        assert_eq!(res.filters.max_price, Some(1200.0));
    }

    #[test]
    fn test_price_conflict_drops_both_with_warning() {
        let res = parse("minPrice=2000&maxPrice=500");
        assert_eq!(res.filters.min_price, None);
        assert_eq!(res.filters.max_price, None);
        assert_eq!(
            res.warnings,
            vec![ParseWarning::PriceRangeConflict {
                min: 2000.0,
                max: 500.0
            }]
        );
    }

    #[test]
    fn test_equal_price_bounds_are_not_a_conflict() {
        let res = parse("minPrice=800&maxPrice=800");
        assert_eq!(res.filters.min_price, Some(800.0));
        assert_eq!(res.filters.max_price, Some(800.0));
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn test_move_in_date_window() {
        // today fixed at 2025-12-29 in lens()
        assert_eq!(
            parse("moveInDate=2026-06-01").filters.move_in_date,
            NaiveDate::from_ymd_opt(2026, 6, 1)
        );
        // today itself is valid
        assert_eq!(
            parse("moveInDate=2025-12-29").filters.move_in_date,
            NaiveDate::from_ymd_opt(2025, 12, 29)
        );
        // the past is not
        assert_eq!(parse("moveInDate=2025-12-28").filters.move_in_date, None);
        // window end: both 2027-12-28 and 2027-12-29 rejected
        assert_eq!(parse("moveInDate=2027-12-28").filters.move_in_date, None);
        assert_eq!(parse("moveInDate=2027-12-29").filters.move_in_date, None);
        // last accepted date
        assert_eq!(
            parse("moveInDate=2027-12-27").filters.move_in_date,
            NaiveDate::from_ymd_opt(2027, 12, 27)
        );
    }

    #[test]
    fn test_move_in_date_datetime_suffix_tolerated() {
        assert_eq!(
            parse("moveInDate=2026-06-01T00:00:00").filters.move_in_date,
            NaiveDate::from_ymd_opt(2026, 6, 1)
        );
        assert_eq!(
            parse("moveInDate=2026-06-01T00:00:00Z").filters.move_in_date,
            NaiveDate::from_ymd_opt(2026, 6, 1)
        );
    }

    #[test]
    fn test_move_in_date_garbage_dropped() {
        assert_eq!(parse("moveInDate=not-a-date").filters.move_in_date, None);
        assert_eq!(parse("moveInDate=2026-13-01").filters.move_in_date, None);
        assert_eq!(parse("moveInDate=").filters.move_in_date, None);
    }

    #[test]
    fn test_room_type_aliases_resolve() {
        let res = parse("roomType=private_room");
        assert_eq!(res.filters.room_type, Selection::Value(RoomType::PrivateRoom));
        let res = parse("roomType=PRIVATE+ROOM");
        assert_eq!(res.filters.room_type, Selection::Value(RoomType::PrivateRoom));
    }

    #[test]
    fn test_any_sentinel_means_absent() {
        let res = parse("roomType=any&leaseDuration=ANY&sort=Any");
        assert!(res.filters.room_type.is_any());
        assert!(res.filters.lease_duration.is_any());
        assert_eq!(res.filters.sort, SortKey::Newest);
        assert_eq!(res.filters.active_category_count(), 0);
    }

    #[test]
    fn test_unrecognized_selection_kept_as_unmatched() {
        let res = parse("roomType=INVALID&leaseDuration=WRONG");
        assert_eq!(
            res.filters.room_type,
            Selection::Unmatched("INVALID".to_string())
        );
        assert_eq!(
            res.filters.lease_duration,
            Selection::Unmatched("WRONG".to_string())
        );
    }

    #[test]
    fn test_sort_fallback_is_silent() {
        assert_eq!(parse("sort=bogus").filters.sort, SortKey::Newest);
        assert_eq!(parse("sort=").filters.sort, SortKey::Newest);
        assert_eq!(parse("sort=price_desc").filters.sort, SortKey::PriceDesc);
        assert!(parse("sort=bogus").warnings.is_empty());
    }

    #[test]
    fn test_duplicate_keys_first_occurrence_wins() {
        let res = parse("roomType=Studio&roomType=Shared+Room");
        assert_eq!(res.filters.room_type, Selection::Value(RoomType::Studio));

        let res = parse("minPrice=500&minPrice=900");
        assert_eq!(res.filters.min_price, Some(500.0));

        let res = parse("amenities=Wifi&amenities=Kitchen");
        assert_eq!(
            res.filters.amenities.iter().copied().collect::<Vec<_>>(),
            vec![Amenity::Wifi]
        );
    }

    #[test]
    fn test_set_values_dedup() {
        let res = parse("amenities=Wifi,Wifi,Parking");
        assert_eq!(res.filters.amenities.len(), 2);
    }

    #[test]
    fn test_set_mixed_valid_invalid() {
        let res = parse("amenities=Wifi,InvalidOne,Parking,BadAmenity,Furnished");
        let got: Vec<Amenity> = res.filters.amenities.iter().copied().collect();
        assert_eq!(got, vec![Amenity::Wifi, Amenity::Parking, Amenity::Furnished]);
        assert_eq!(res.filters.active_category_count(), 1);
        assert_eq!(res.filters.active_value_count(), 3);
    }

    #[test]
    fn test_set_empty_segments_dropped() {
        let res = parse("amenities=,,Wifi,,&houseRules=,,,");
        assert_eq!(res.filters.amenities.len(), 1);
        assert!(res.filters.house_rules.is_empty());
    }

    #[test]
    fn test_set_segments_trimmed_and_case_normalized() {
        let res = parse("amenities=+wifi+,+PARKING&houseRules=pets_allowed,+Smoking++Allowed+");
        assert!(res.filters.amenities.contains(&Amenity::Wifi));
        assert!(res.filters.amenities.contains(&Amenity::Parking));
        assert!(res.filters.house_rules.contains(&HouseRule::PetsAllowed));
        assert!(res.filters.house_rules.contains(&HouseRule::SmokingAllowed));
    }

    #[test]
    fn test_languages_parse_to_codes() {
        let res = parse("languages=EN,japanese,xx,en");
        let got: Vec<Language> = res.filters.languages.iter().copied().collect();
        assert_eq!(got, vec![Language::En, Language::Ja]);
    }

    #[test]
    fn test_geo_bounds_complete_viewport() {
        let res = parse("minLat=59.30&maxLat=59.35&minLng=18.03&maxLng=18.12");
        assert_eq!(
            res.filters.bounds,
            Some(GeoBounds {
                min_lat: 59.30,
                max_lat: 59.35,
                min_lng: 18.03,
                max_lng: 18.12
            })
        );
    }

    #[test]
    fn test_geo_bounds_partial_treated_as_absent() {
        let res = parse("minLat=59.30&maxLat=59.35&minLng=18.03");
        assert_eq!(res.filters.bounds, None);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn test_geo_bounds_clamped_to_domain() {
        let res = parse("minLat=-95&maxLat=120&minLng=-200&maxLng=190.5");
        assert_eq!(
            res.filters.bounds,
            Some(GeoBounds {
                min_lat: -90.0,
                max_lat: 90.0,
                min_lng: -180.0,
                max_lng: 180.0
            })
        );
    }

    #[test]
    fn test_geo_bounds_inverted_dropped_with_warning() {
        let res = parse("minLat=60&maxLat=50&minLng=18&maxLng=19");
        assert_eq!(res.filters.bounds, None);
        assert_eq!(res.warnings, vec![ParseWarning::InvertedGeoBounds]);
    }

    #[test]
    fn test_geo_bounds_non_numeric_treated_as_absent() {
        let res = parse("minLat=abc&maxLat=59.35&minLng=18.03&maxLng=18.12");
        assert_eq!(res.filters.bounds, None);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn test_unknown_params_ignored() {
        let junk: String = (0..50).map(|i| format!("junk{}=x&", i)).collect();
        let res = parse(&format!("{}q=tokyo", junk));
        assert_eq!(res.filters.query.as_deref(), Some("tokyo"));
        assert_eq!(res.filters.active_category_count(), 1);
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn test_pagination_state_never_parsed() {
        let res = parse("cursor=abc123&cursorStack=a,b,c&pageNumber=4&page=2");
        assert_eq!(res.filters, ParsedFilters::default());
    }

    #[test]
    fn test_arbitrary_garbage_never_panics() {
        let inputs = [
            "%%%&&&===",
            "q=%2&minPrice=%ZZ",
            "moveInDate=9999-99-99",
            "minLat=NaN&maxLat=inf&minLng=-inf&maxLng=0",
            "amenities=\u{200b},\u{200b}",
            "q=javascript:alert(document.cookie)",
            "=&=&=",
        ];
        for input in inputs {
            let _ = parse(input);
        }
    }
}
