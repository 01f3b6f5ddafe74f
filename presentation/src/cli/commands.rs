//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for tidyquote
#[derive(Parser, Debug)]
#[command(name = "tidyquote")]
#[command(author, version, about = "Service-quote page: tabs, price estimates, and bookings")]
#[command(long_about = r#"
Tidyquote drives a service-quote page from the terminal: switch between
service tabs, compute a price estimate from an area, and submit a booking
request through the validation pipeline.

Without one-shot flags it starts an interactive session.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tidyquote.toml    Project-level config
3. ~/.config/tidyquote/config.toml   Global config

Example:
  tidyquote
  tidyquote --tab commercial --quote 50
  tidyquote --book "Alice" "a@b.c"
"#)]
pub struct Cli {
    /// Activate a service tab before other one-shot actions
    #[arg(long, value_name = "SERVICE")]
    pub tab: Option<String>,

    /// Request a quote for this area (Sq Ft) and exit
    #[arg(long, value_name = "AREA")]
    pub quote: Option<String>,

    /// Submit a booking with NAME and EMAIL and exit
    #[arg(long, value_names = ["NAME", "EMAIL"], num_args = 2)]
    pub book: Option<Vec<String>>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config_sources: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Whether any one-shot action was requested.
    pub fn is_one_shot(&self) -> bool {
        self.tab.is_some() || self.quote.is_some() || self.book.is_some()
    }
}
