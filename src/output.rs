//! Output format selection and rendering helpers
//!
//! Shared by the CLI commands: a unified [`OutputFormat`] enum and the
//! field/value row projection of a [`ParsedFilters`] used for table output.

use crate::filters::{ParsedFilters, Selection};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unified output format for all roomscope commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty table with borders (default)
    #[default]
    Table,
    /// Markdown table format
    Markdown,
    /// Compact JSON (single line)
    Json,
    /// Pretty-printed JSON with indentation
    JsonPretty,
}

impl OutputFormat {
    /// Check if this is a JSON variant
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonPretty)
    }

    /// Get a list of all format names for help text
    pub fn all_names() -> &'static [&'static str] {
        &["table", "markdown", "json", "json-pretty"]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::JsonPretty => write!(f, "json-pretty"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "pretty" => Ok(Self::Table),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "json-pretty" | "jsonpretty" => Ok(Self::JsonPretty),
            _ => Err(format!(
                "Unknown output format '{}'. Valid formats: {}",
                s,
                Self::all_names().join(", ")
            )),
        }
    }
}

/// One active filter projected to a display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "display", derive(tabled::Tabled))]
pub struct FilterRow {
    pub field: String,
    pub value: String,
}

impl FilterRow {
    fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Project the active fields of a filter set to display rows, in canonical
/// parameter order. Inactive fields produce no row.
pub fn summary_rows(filters: &ParsedFilters) -> Vec<FilterRow> {
    let mut rows = Vec::new();

    if let Some(q) = &filters.query {
        rows.push(FilterRow::new("q", q.clone()));
    }
    if let Some(v) = filters.min_price {
        rows.push(FilterRow::new("minPrice", v.to_string()));
    }
    if let Some(v) = filters.max_price {
        rows.push(FilterRow::new("maxPrice", v.to_string()));
    }
    if let Some(d) = filters.move_in_date {
        rows.push(FilterRow::new("moveInDate", d.format("%Y-%m-%d").to_string()));
    }
    if let Some(cell) = selection_cell(&filters.room_type) {
        rows.push(FilterRow::new("roomType", cell));
    }
    if let Some(cell) = selection_cell(&filters.lease_duration) {
        rows.push(FilterRow::new("leaseDuration", cell));
    }
    if !filters.amenities.is_empty() {
        rows.push(FilterRow::new(
            "amenities",
            filters.amenities.iter().map(|a| a.label()).join(", "),
        ));
    }
    if !filters.house_rules.is_empty() {
        rows.push(FilterRow::new(
            "houseRules",
            filters.house_rules.iter().map(|r| r.label()).join(", "),
        ));
    }
    if !filters.languages.is_empty() {
        rows.push(FilterRow::new(
            "languages",
            filters.languages.iter().map(|l| l.code()).join(", "),
        ));
    }
    if let Some(b) = &filters.bounds {
        rows.push(FilterRow::new(
            "bounds",
            format!(
                "lat {}..{}, lng {}..{}",
                b.min_lat, b.max_lat, b.min_lng, b.max_lng
            ),
        ));
    }
    if filters.sort != Default::default() {
        rows.push(FilterRow::new("sort", filters.sort.id()));
    }

    rows
}

fn selection_cell<T: fmt::Display>(selection: &Selection<T>) -> Option<String> {
    match selection {
        Selection::Any => None,
        Selection::Value(v) => Some(v.to_string()),
        Selection::Unmatched(raw) => Some(format!("{} (unmatched)", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterLens;
    use crate::query::RawQuery;
    use chrono::NaiveDate;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("pretty").unwrap(), OutputFormat::Table);
        assert_eq!(
            OutputFormat::from_str("markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("JSON-Pretty").unwrap(),
            OutputFormat::JsonPretty
        );
        assert!(OutputFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::JsonPretty.to_string(), "json-pretty");
    }

    #[test]
    fn test_output_format_is_json() {
        assert!(!OutputFormat::Table.is_json());
        assert!(!OutputFormat::Markdown.is_json());
        assert!(OutputFormat::Json.is_json());
        assert!(OutputFormat::JsonPretty.is_json());
    }

    #[test]
    fn test_summary_rows_active_fields_only() {
        let lens = FilterLens::with_today(NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
        let filters = lens
            .parse(&RawQuery::from_query_str(
                "q=tokyo&amenities=Parking,Wifi&roomType=INVALID&sort=price_asc",
            ))
            .filters;

        let rows = summary_rows(&filters);
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, vec!["q", "roomType", "amenities", "sort"]);

        assert_eq!(rows[1].value, "INVALID (unmatched)");
        assert_eq!(rows[2].value, "Wifi, Parking");
    }

    #[test]
    fn test_summary_rows_empty_for_default() {
        assert!(summary_rows(&ParsedFilters::default()).is_empty());
    }
}
