use clap::Args;
use roomscope::{RawQuery, Resolution};

/// Arguments for the Url command
#[derive(Args)]
pub struct UrlArgs {
    /// Raw query string, with or without a leading '?'
    #[clap(name = "QUERY")]
    pub query: String,

    /// Reference date (YYYY-MM-DD) for the move-in window, defaults to today
    #[clap(long)]
    pub today: Option<String>,
}

pub fn run(args: UrlArgs) {
    let lens = match super::lens_for(args.today.as_deref()) {
        Ok(lens) => lens,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return;
        }
    };

    let Resolution { filters, warnings } = lens.parse(&RawQuery::from_query_str(&args.query));
    for warning in &warnings {
        eprintln!("WARNING: {}", warning);
    }
    println!("{}", filters.to_query_string());
}
