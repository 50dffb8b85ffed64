//! `cinema-tickets` — runs one purchase request through the ticket service.
//!
//! ```bash
//! echo '{"account_id": 23, "tickets": [{"type": "ADULT", "quantity": 2}, {"type": "CHILD", "quantity": "3"}]}' \
//!     | cinema-tickets --log-format pretty
//! ```
//!
//! Prints the purchase summary as JSON on stdout, then takes payment and
//! reserves seats through the logging stand-in services. Exits with 2 when
//! the purchase is invalid and 1 for anything else that goes wrong (bad
//! arguments, unreadable input).
mod args;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cinema_observability::TracingConfig;
use cinema_thirdparty::{LoggingPaymentService, LoggingSeatReservationService};
use cinema_ticketing::{InvalidPurchaseError, PurchaseRequest, TicketService};

use crate::args::Args;

const EXIT_INVALID_PURCHASE: u8 = 2;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let mut env = TracingConfig::from_env();
    if let Some(format) = args.log_format {
        env.override_format(format);
    }
    env.install();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<InvalidPurchaseError>() {
            Some(invalid) => {
                eprintln!("{invalid}");
                ExitCode::from(EXIT_INVALID_PURCHASE)
            }
            None => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let request: PurchaseRequest =
        serde_json::from_str(&raw).context("failed to parse purchase request")?;
    tracing::debug!(
        account_id = %request.account_id,
        tickets = request.tickets.len(),
        "purchase request read"
    );

    let service = TicketService::new(LoggingPaymentService, LoggingSeatReservationService);

    let summary = service.quote(request.account_id, &request.tickets)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    service.purchase(&request)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
