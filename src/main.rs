//! PM Portfolio - binary entry point
//! Delegates to the library for all app logic.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match pm_portfolio::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pm-portfolio: {e}");
            ExitCode::FAILURE
        }
    }
}
