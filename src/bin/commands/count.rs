use clap::Args;
use roomscope::{OutputFormat, RawQuery};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Arguments for the Count command
#[derive(Args)]
pub struct CountArgs {
    /// Raw query string, with or without a leading '?'
    #[clap(name = "QUERY")]
    pub query: String,

    /// Reference date (YYYY-MM-DD) for the move-in window, defaults to today
    #[clap(long)]
    pub today: Option<String>,
}

#[derive(Serialize, Tabled)]
struct CountReport {
    active_category_count: usize,
    active_value_count: usize,
}

pub fn run(args: CountArgs, output_format: OutputFormat) {
    let lens = match super::lens_for(args.today.as_deref()) {
        Ok(lens) => lens,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return;
        }
    };

    let filters = lens.parse(&RawQuery::from_query_str(&args.query)).filters;
    let report = CountReport {
        active_category_count: filters.active_category_count(),
        active_value_count: filters.active_value_count(),
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
        OutputFormat::Table => {
            println!("{}", Table::new(vec![&report]).with(Style::rounded()));
        }
        OutputFormat::Markdown => {
            println!("{}", Table::new(vec![&report]).with(Style::markdown()));
        }
    }
}
