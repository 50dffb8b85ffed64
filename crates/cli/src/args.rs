//! Command-line arguments for `cinema-tickets`.
use std::path::PathBuf;

use clap::Parser;

use cinema_observability::LogFormat;

/// Validate, price and purchase a cinema ticket order.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON purchase request, e.g. `{"account_id": 1, "tickets": [{"type": "ADULT", "quantity": 2}]}`.
    /// Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Log output format: json, pretty or compact.
    /// Overrides `CINEMA_LOG_FORMAT`.
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}
