use clap::{Parser, Subcommand};
use roomscope::OutputFormat;
use tracing::Level;

mod commands;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Print debug information
    #[clap(long, global = true)]
    debug: bool,

    /// Output format: table, markdown, json, json-pretty
    #[clap(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a raw query string into canonical search filters
    Parse(commands::parse::ParseArgs),

    /// Print the canonical query string for a raw query string
    Url(commands::url::UrlArgs),

    /// Print active filter counts for a raw query string
    Count(commands::count::CountArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Parse(args) => commands::parse::run(args, cli.format),
        Commands::Url(args) => commands::url::run(args),
        Commands::Count(args) => commands::count::run(args, cli.format),
    }
}
