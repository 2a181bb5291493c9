use clap::Args;
use roomscope::output::summary_rows;
use roomscope::{OutputFormat, ParseWarning, ParsedFilters, RawQuery, Resolution};
use serde::Serialize;
use tabled::settings::Style;
use tabled::Table;

/// Arguments for the Parse command
#[derive(Args)]
pub struct ParseArgs {
    /// Raw query string, with or without a leading '?'
    #[clap(name = "QUERY")]
    pub query: String,

    /// Reference date (YYYY-MM-DD) for the move-in window, defaults to today
    #[clap(long)]
    pub today: Option<String>,
}

#[derive(Serialize)]
struct ParseReport<'a> {
    filters: &'a ParsedFilters,
    warnings: &'a [ParseWarning],
    active_category_count: usize,
    active_value_count: usize,
    canonical_query: String,
}

pub fn run(args: ParseArgs, output_format: OutputFormat) {
    let lens = match super::lens_for(args.today.as_deref()) {
        Ok(lens) => lens,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return;
        }
    };

    let Resolution { filters, warnings } = lens.parse(&RawQuery::from_query_str(&args.query));
    let report = ParseReport {
        filters: &filters,
        warnings: &warnings,
        active_category_count: filters.active_category_count(),
        active_value_count: filters.active_value_count(),
        canonical_query: filters.to_query_string(),
    };

    match output_format {
        OutputFormat::Json => match serde_json::to_string(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("ERROR: Failed to serialize to JSON: {}", e),
        },
        OutputFormat::JsonPretty => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("ERROR: Failed to serialize to JSON: {}", e),
        },
        OutputFormat::Table | OutputFormat::Markdown => {
            for warning in &warnings {
                eprintln!("WARNING: {}", warning);
            }

            let rows = summary_rows(&filters);
            if rows.is_empty() {
                println!("no active filters");
            } else {
                match output_format {
                    OutputFormat::Table => {
                        println!("{}", Table::new(&rows).with(Style::rounded()));
                    }
                    _ => {
                        println!("{}", Table::new(&rows).with(Style::markdown()));
                    }
                }
            }

            println!(
                "{} active categories, {} active values",
                report.active_category_count, report.active_value_count
            );
            if !report.canonical_query.is_empty() {
                println!("canonical: ?{}", report.canonical_query);
            }
        }
    }
}
