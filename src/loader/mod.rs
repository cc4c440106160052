//! Bid loader module
//!
//! Reads bids from a CSV export and bulk-loads them into a `BidTable`.
//! Malformed rows are logged and skipped; only a source that cannot be
//! opened fails the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

use csv::StringRecord;
use log::{info, warn};

use crate::bid::Bid;
use crate::infrastructure::hash_table::BidTable;
use crate::types::CURRENCY_SYMBOL;

pub mod error;
pub use error::{LoaderError, LoaderResult};

/// Zero-based positions of the bid fields in a source row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub title: usize,
    pub bid_id: usize,
    pub amount: usize,
    pub fund: usize,
}

impl Default for ColumnLayout {
    /// Layout of the monthly eBid sales export
    fn default() -> Self {
        ColumnLayout {
            title: 0,
            bid_id: 1,
            amount: 4,
            fund: 8,
        }
    }
}

impl ColumnLayout {
    /// Decode one data row; `row` is 1-based and used in errors only
    pub fn decode(&self, row: usize, record: &StringRecord) -> LoaderResult<Bid> {
        let field = |column: usize| {
            record
                .get(column)
                .ok_or(LoaderError::MissingColumn { row, column })
        };

        let raw_amount = field(self.amount)?;
        let amount =
            str_to_amount(raw_amount, CURRENCY_SYMBOL).ok_or_else(|| LoaderError::InvalidAmount {
                row,
                value: raw_amount.to_string(),
            })?;

        Ok(Bid::new(
            field(self.bid_id)?,
            field(self.title)?,
            field(self.fund)?,
            amount,
        ))
    }
}

/// Summary of a bulk load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Rows inserted into the table
    pub loaded: usize,
    /// Malformed rows skipped
    pub skipped: usize,
    /// Wall time spent reading and inserting
    pub elapsed: Duration,
}

/// CSV source of bids
pub struct BidSource<R> {
    reader: csv::Reader<R>,
    layout: ColumnLayout,
    header: Vec<String>,
}

impl BidSource<File> {
    /// Open a CSV file; the first line is the header
    pub fn open(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }
}

impl<R: Read> BidSource<R> {
    /// Wrap any reader producing CSV text
    pub fn from_reader(reader: R) -> LoaderResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header = reader.headers()?.iter().map(String::from).collect();

        Ok(BidSource {
            reader,
            layout: ColumnLayout::default(),
            header,
        })
    }

    /// Use a different column layout
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Header fields of the source
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Decode the remaining rows, one result per row
    pub fn records(&mut self) -> impl Iterator<Item = LoaderResult<Bid>> + '_ {
        let layout = self.layout;
        self.reader
            .records()
            .enumerate()
            .map(move |(index, result)| layout.decode(index + 1, &result?))
    }

    /// Insert every well-formed remaining row into `table`
    pub fn load_into(&mut self, table: &mut BidTable) -> LoadReport {
        let start = Instant::now();
        let mut report = LoadReport::default();

        for result in self.records() {
            match result {
                Ok(bid) => {
                    table.insert(bid);
                    report.loaded += 1;
                }
                Err(err) if err.is_fatal() => {
                    warn!("stopping load: {}", err);
                    break;
                }
                Err(err) => {
                    warn!("skipping row: {}", err);
                    report.skipped += 1;
                }
            }
        }

        report.elapsed = start.elapsed();
        report
    }
}

/// Load every bid from the CSV file at `path`
///
/// Fails only when the file cannot be opened or its header read.
pub fn load_bids(path: impl AsRef<Path>, table: &mut BidTable) -> LoaderResult<LoadReport> {
    let path = path.as_ref();
    let mut source = BidSource::open(path)?;
    let report = source.load_into(table);

    info!(
        "loaded {} bids from {} ({} skipped) in {:?}",
        report.loaded,
        path.display(),
        report.skipped,
        report.elapsed
    );

    Ok(report)
}

/// Parse a currency string after removing every `strip` character
///
/// Thousands separators are dropped too. Like C `atof`, the longest numeric
/// prefix is used and trailing text is ignored; `None` means no prefix.
pub fn str_to_amount(s: &str, strip: char) -> Option<f64> {
    let cleaned: String = s.chars().filter(|&c| c != strip && c != ',').collect();
    parse_float_prefix(&cleaned)
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
            + start
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
