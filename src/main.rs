use std::process::ExitCode;

use clap::Parser;

use crate::config::Config;
use crate::logger::init_logger;

mod banner;
mod config;
mod error;
mod logger;
mod probe;
mod report;
mod runner;

#[cfg(test)]
mod test_support;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("Unable to initialize logger: {e}");
    }
    let _config = Config::parse();
    banner::print_banner();
    runner::run().await
}
