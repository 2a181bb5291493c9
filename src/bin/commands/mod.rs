pub mod count;
pub mod parse;
pub mod url;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use roomscope::FilterLens;

/// Build a lens anchored at `--today` when given, otherwise the current
/// UTC date.
pub(crate) fn lens_for(today: Option<&str>) -> Result<FilterLens> {
    match today {
        Some(s) => {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| anyhow!("invalid --today value '{}': {}", s, e))?;
            Ok(FilterLens::with_today(date))
        }
        None => Ok(FilterLens::new()),
    }
}
