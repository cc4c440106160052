//! Bidtable console entry

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use bidtable::config::{Args, Config};
use bidtable::driver::Driver;
use bidtable::infrastructure::logger::initialize_logger;
use bidtable::BidTableResult;

fn run(args: &Args) -> BidTableResult<()> {
    let config = Config::resolve(args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), config)?;
    driver.run()
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
