//! Active-filter counts
//!
//! The UI surfaces two different numbers: the filter-chip badge counts
//! *categories* (a nine-amenity selection is still one active filter), while
//! chip rendering counts individual *values*. Both granularities are exposed
//! rather than guessing which one a caller means.

use crate::filters::vocab::SortKey;
use crate::filters::ParsedFilters;

impl ParsedFilters {
    /// Number of distinct filter categories not in their absent/any/default
    /// state. Set-valued fields contribute at most 1; the two price bounds
    /// form a single category.
    ///
    /// Unmatched single-value selections share one category between them:
    /// `roomType=INVALID&leaseDuration=WRONG` counts 1, as does either field
    /// alone. This reproduces the inherited badge behavior that downstream
    /// consumers assert on; see DESIGN.md before changing it.
    pub fn active_category_count(&self) -> usize {
        let mut count = 0;
        if self.query.is_some() {
            count += 1;
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            count += 1;
        }
        if self.move_in_date.is_some() {
            count += 1;
        }
        if self.room_type.is_value() {
            count += 1;
        }
        if self.lease_duration.is_value() {
            count += 1;
        }
        if self.room_type.is_unmatched() || self.lease_duration.is_unmatched() {
            count += 1;
        }
        if !self.amenities.is_empty() {
            count += 1;
        }
        if !self.house_rules.is_empty() {
            count += 1;
        }
        if !self.languages.is_empty() {
            count += 1;
        }
        if self.bounds.is_some() {
            count += 1;
        }
        if self.sort != SortKey::default() {
            count += 1;
        }
        count
    }

    /// Number of individual applied values: one per scalar field, one per
    /// selected member of each multi-select field.
    pub fn active_value_count(&self) -> usize {
        let mut count = 0;
        if self.query.is_some() {
            count += 1;
        }
        if self.min_price.is_some() {
            count += 1;
        }
        if self.max_price.is_some() {
            count += 1;
        }
        if self.move_in_date.is_some() {
            count += 1;
        }
        if self.room_type.is_active() {
            count += 1;
        }
        if self.lease_duration.is_active() {
            count += 1;
        }
        count += self.amenities.len();
        count += self.house_rules.len();
        count += self.languages.len();
        if self.bounds.is_some() {
            count += 1;
        }
        if self.sort != SortKey::default() {
            count += 1;
        }
        count
    }
}
