//! Console driver
//!
//! Menu loop over one bid table. Input and output are generic so the loop
//! runs against stdin/stdout in the binary and in-memory buffers in tests.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use log::error;

use crate::bid::Bid;
use crate::config::Config;
use crate::infrastructure::hash_table::BidTable;
use crate::loader::BidSource;
use crate::types::BidTableResult;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LoadBids,
    DisplayAll,
    FindBid,
    RemoveBid,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::LoadBids),
            "2" => Some(MenuChoice::DisplayAll),
            "3" => Some(MenuChoice::FindBid),
            "4" => Some(MenuChoice::RemoveBid),
            "9" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "Menu:
  1. Load Bids
  2. Display All Bids
  3. Find Bid
  4. Remove Bid
  9. Exit";

/// Interactive driver owning the table it operates on
pub struct Driver<R, W> {
    input: R,
    output: W,
    table: BidTable,
    config: Config,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Create a driver with an empty table sized from `config`
    pub fn new(input: R, output: W, config: Config) -> BidTableResult<Self> {
        let table = BidTable::new(config.capacity)?;
        Ok(Driver {
            input,
            output,
            table,
            config,
        })
    }

    /// Table the driver operates on
    pub fn table(&self) -> &BidTable {
        &self.table
    }

    /// Run the menu until Exit or end of input
    pub fn run(&mut self) -> BidTableResult<()> {
        let mut line = String::new();

        loop {
            writeln!(self.output, "{}", MENU)?;
            write!(self.output, "Enter choice: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match MenuChoice::parse(&line) {
                Some(MenuChoice::LoadBids) => self.load_bids()?,
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::FindBid) => self.find_bid()?,
                Some(MenuChoice::RemoveBid) => self.remove_bid()?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Unknown choice: {}", line.trim())?,
            }
        }

        writeln!(self.output, "Good bye.")?;
        Ok(())
    }

    fn load_bids(&mut self) -> BidTableResult<()> {
        let path = &self.config.csv_path;
        writeln!(self.output, "Loading CSV file {}", path.display())?;

        let mut source = match BidSource::open(path) {
            Ok(source) => source,
            Err(err) => {
                // Source failures are reported and the menu carries on
                error!("failed to open {}: {}", path.display(), err);
                writeln!(self.output, "Unable to load {}: {}", path.display(), err)?;
                return Ok(());
            }
        };

        writeln!(self.output, "{} | ", source.header().join(" | "))?;

        let report = source.load_into(&mut self.table);
        writeln!(
            self.output,
            "{} bids read, {} skipped",
            report.loaded, report.skipped
        )?;
        write_elapsed(&mut self.output, report.elapsed)
    }

    fn display_all(&mut self) -> BidTableResult<()> {
        for bid in self.table.iter() {
            write_bid(&mut self.output, bid, self.config.json)?;
        }
        Ok(())
    }

    fn find_bid(&mut self) -> BidTableResult<()> {
        let start = Instant::now();
        let found = self.table.search(&self.config.bid_id);
        let elapsed = start.elapsed();

        match found {
            Some(bid) => write_bid(&mut self.output, bid, self.config.json)?,
            None => writeln!(self.output, "Bid Id {} not found.", self.config.bid_id)?,
        }
        write_elapsed(&mut self.output, elapsed)
    }

    fn remove_bid(&mut self) -> BidTableResult<()> {
        let bid_id = &self.config.bid_id;
        match self.table.remove(bid_id) {
            Some(_) => writeln!(self.output, "Bid {} removed.", bid_id)?,
            None => writeln!(self.output, "Bid {} not found.", bid_id)?,
        }
        Ok(())
    }
}

fn write_bid<W: Write>(output: &mut W, bid: &Bid, json: bool) -> BidTableResult<()> {
    if json {
        serde_json::to_writer(&mut *output, bid)?;
        writeln!(output)?;
    } else {
        writeln!(output, "{}", bid)?;
    }
    Ok(())
}

fn write_elapsed<W: Write>(output: &mut W, elapsed: Duration) -> BidTableResult<()> {
    writeln!(output, "time: {} microseconds", elapsed.as_micros())?;
    writeln!(output, "time: {} seconds", elapsed.as_secs_f64())?;
    Ok(())
}
