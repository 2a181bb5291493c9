//! Canonical filter vocabularies
//!
//! Fixed value sets for the enum-valued search parameters, with the alias
//! tables that map user- and machine-facing spellings onto the one canonical
//! form. Matching is case-insensitive, tolerates underscore slugs
//! (`pets_allowed`) for space-separated labels, and collapses runs of
//! whitespace. Unknown spellings are an error for the caller to drop.
//!
//! These are static lookup tables by design; the value sets are finite and
//! known ahead of time.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase, map underscore slugs to spaces, and collapse whitespace runs
/// so that `Pets_Allowed`, `pets allowed`, and `PETS  ALLOWED` all compare
/// equal.
fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .join(" ")
}

// =============================================================================
// Room type
// =============================================================================

/// The kind of space being offered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RoomType {
    #[serde(rename = "Private Room")]
    PrivateRoom,
    #[serde(rename = "Shared Room")]
    SharedRoom,
    #[serde(rename = "Entire Place")]
    EntirePlace,
    #[serde(rename = "Studio")]
    Studio,
}

impl RoomType {
    /// The canonical UI label, also the serialized query-string form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrivateRoom => "Private Room",
            Self::SharedRoom => "Shared Room",
            Self::EntirePlace => "Entire Place",
            Self::Studio => "Studio",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::PrivateRoom,
            Self::SharedRoom,
            Self::EntirePlace,
            Self::Studio,
        ]
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "private room" | "private" => Ok(Self::PrivateRoom),
            "shared room" | "shared" => Ok(Self::SharedRoom),
            "entire place" | "entire" | "whole place" => Ok(Self::EntirePlace),
            "studio" => Ok(Self::Studio),
            _ => Err(format!(
                "Unknown room type '{}'. Valid values: {}",
                s,
                Self::all().iter().map(Self::label).join(", ")
            )),
        }
    }
}

// =============================================================================
// Lease duration
// =============================================================================

/// Length of the lease the lister offers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LeaseDuration {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "3 months")]
    ThreeMonths,
    #[serde(rename = "6 months")]
    SixMonths,
    #[serde(rename = "12 months")]
    TwelveMonths,
}

impl LeaseDuration {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MonthToMonth => "Month-to-month",
            Self::ThreeMonths => "3 months",
            Self::SixMonths => "6 months",
            Self::TwelveMonths => "12 months",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::MonthToMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::TwelveMonths,
        ]
    }
}

impl fmt::Display for LeaseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LeaseDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "month-to-month" | "month to month" | "mtm" | "m2m" => Ok(Self::MonthToMonth),
            "3 months" | "3 month" | "3mo" | "3m" => Ok(Self::ThreeMonths),
            "6 months" | "6 month" | "6mo" | "6m" => Ok(Self::SixMonths),
            "12 months" | "12 month" | "12mo" | "12m" | "1 year" => Ok(Self::TwelveMonths),
            _ => Err(format!(
                "Unknown lease duration '{}'. Valid values: {}",
                s,
                Self::all().iter().map(Self::label).join(", ")
            )),
        }
    }
}

// =============================================================================
// Sort key
// =============================================================================

/// Result ordering. Unrecognized values fall back to the default silently.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently listed first (default)
    #[default]
    Newest,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl SortKey {
    /// The canonical query-string identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Newest, Self::PriceAsc, Self::PriceDesc]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "newest" | "latest" | "recent" => Ok(Self::Newest),
            "price asc" | "price-asc" | "cheapest" => Ok(Self::PriceAsc),
            "price desc" | "price-desc" => Ok(Self::PriceDesc),
            _ => Err(format!(
                "Unknown sort key '{}'. Valid values: {}",
                s,
                Self::all().iter().map(Self::id).join(", ")
            )),
        }
    }
}

// =============================================================================
// Amenities
// =============================================================================

/// Listing amenities. Declaration order is the canonical serialization
/// order, matching the filter panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Amenity {
    #[serde(rename = "Wifi")]
    Wifi,
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "Parking")]
    Parking,
    #[serde(rename = "Kitchen")]
    Kitchen,
    #[serde(rename = "Furnished")]
    Furnished,
    #[serde(rename = "Laundry")]
    Laundry,
    #[serde(rename = "Heating")]
    Heating,
    #[serde(rename = "Balcony")]
    Balcony,
    #[serde(rename = "Gym")]
    Gym,
    #[serde(rename = "Pool")]
    Pool,
}

impl Amenity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wifi => "Wifi",
            Self::Ac => "AC",
            Self::Parking => "Parking",
            Self::Kitchen => "Kitchen",
            Self::Furnished => "Furnished",
            Self::Laundry => "Laundry",
            Self::Heating => "Heating",
            Self::Balcony => "Balcony",
            Self::Gym => "Gym",
            Self::Pool => "Pool",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Wifi,
            Self::Ac,
            Self::Parking,
            Self::Kitchen,
            Self::Furnished,
            Self::Laundry,
            Self::Heating,
            Self::Balcony,
            Self::Gym,
            Self::Pool,
        ]
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Amenity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "wifi" | "wi-fi" | "wi fi" | "wireless" => Ok(Self::Wifi),
            "ac" | "a/c" | "aircon" | "air conditioning" => Ok(Self::Ac),
            "parking" => Ok(Self::Parking),
            "kitchen" => Ok(Self::Kitchen),
            "furnished" => Ok(Self::Furnished),
            "laundry" | "washer" | "washing machine" => Ok(Self::Laundry),
            "heating" => Ok(Self::Heating),
            "balcony" => Ok(Self::Balcony),
            "gym" => Ok(Self::Gym),
            "pool" => Ok(Self::Pool),
            _ => Err(format!(
                "Unknown amenity '{}'. Valid values: {}",
                s,
                Self::all().iter().map(Self::label).join(", ")
            )),
        }
    }
}

// =============================================================================
// House rules
// =============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HouseRule {
    #[serde(rename = "Pets allowed")]
    PetsAllowed,
    #[serde(rename = "Smoking allowed")]
    SmokingAllowed,
    #[serde(rename = "Couples allowed")]
    CouplesAllowed,
    #[serde(rename = "Guests allowed")]
    GuestsAllowed,
}

impl HouseRule {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PetsAllowed => "Pets allowed",
            Self::SmokingAllowed => "Smoking allowed",
            Self::CouplesAllowed => "Couples allowed",
            Self::GuestsAllowed => "Guests allowed",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::PetsAllowed,
            Self::SmokingAllowed,
            Self::CouplesAllowed,
            Self::GuestsAllowed,
        ]
    }
}

impl fmt::Display for HouseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HouseRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pets allowed" | "pets" | "pet friendly" => Ok(Self::PetsAllowed),
            "smoking allowed" | "smoking" => Ok(Self::SmokingAllowed),
            "couples allowed" | "couples" => Ok(Self::CouplesAllowed),
            "guests allowed" | "guests" => Ok(Self::GuestsAllowed),
            _ => Err(format!(
                "Unknown house rule '{}'. Valid values: {}",
                s,
                Self::all().iter().map(Self::label).join(", ")
            )),
        }
    }
}

// =============================================================================
// Languages
// =============================================================================

/// Languages spoken by the lister, as ISO 639-1 codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Nl,
    Sv,
    Ru,
    Zh,
    Ja,
    Ko,
    Ar,
    Hi,
}

impl Language {
    /// The canonical two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Nl => "nl",
            Self::Sv => "sv",
            Self::Ru => "ru",
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Ar => "ar",
            Self::Hi => "hi",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::En,
            Self::Es,
            Self::Fr,
            Self::De,
            Self::It,
            Self::Pt,
            Self::Nl,
            Self::Sv,
            Self::Ru,
            Self::Zh,
            Self::Ja,
            Self::Ko,
            Self::Ar,
            Self::Hi,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" => Ok(Self::Es),
            "fr" | "french" => Ok(Self::Fr),
            "de" | "german" => Ok(Self::De),
            "it" | "italian" => Ok(Self::It),
            "pt" | "portuguese" => Ok(Self::Pt),
            "nl" | "dutch" => Ok(Self::Nl),
            "sv" | "swedish" => Ok(Self::Sv),
            "ru" | "russian" => Ok(Self::Ru),
            "zh" | "chinese" | "mandarin" => Ok(Self::Zh),
            "ja" | "japanese" => Ok(Self::Ja),
            "ko" | "korean" => Ok(Self::Ko),
            "ar" | "arabic" => Ok(Self::Ar),
            "hi" | "hindi" => Ok(Self::Hi),
            _ => Err(format!(
                "Unknown language '{}'. Valid codes: {}",
                s,
                Self::all().iter().map(Self::code).join(", ")
            )),
        }
    }
}
