//! Runtime configuration
//!
//! Values come from the command line, then an optional JSON file, then the
//! defaults in `types`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::types::{BidTableError, BidTableResult, DEFAULT_BID_ID, DEFAULT_CSV_PATH, DEFAULT_SIZE};

/// Command line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bidtable")]
#[command(about = "Load, find and remove auction bids in a chained hash table")]
pub struct Args {
    /// CSV file of bids
    pub csv_path: Option<PathBuf>,

    /// Bid id used by the find and remove menu entries
    pub bid_id: Option<String>,

    /// Number of hash table buckets
    #[arg(short = 'c', long)]
    pub capacity: Option<usize>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print bids as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// Settings read from a JSON configuration file; every field is optional
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub csv_path: Option<PathBuf>,
    pub bid_id: Option<String>,
    pub capacity: Option<usize>,
    pub json: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub csv_path: PathBuf,
    pub bid_id: String,
    pub capacity: usize,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            bid_id: DEFAULT_BID_ID.to_string(),
            capacity: DEFAULT_SIZE,
            json: false,
        }
    }
}

impl Config {
    /// Read a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> BidTableResult<FileConfig> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Merge arguments over the file named by `--config` over the defaults
    pub fn resolve(args: &Args) -> BidTableResult<Self> {
        let file = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// Merge arguments over an already loaded file configuration
    pub fn merge(args: &Args, file: FileConfig) -> BidTableResult<Self> {
        let defaults = Config::default();

        let config = Config {
            csv_path: args
                .csv_path
                .clone()
                .or(file.csv_path)
                .unwrap_or(defaults.csv_path),
            bid_id: args
                .bid_id
                .clone()
                .or(file.bid_id)
                .unwrap_or(defaults.bid_id),
            capacity: args
                .capacity
                .or(file.capacity)
                .unwrap_or(defaults.capacity),
            json: args.json || file.json.unwrap_or(defaults.json),
        };

        if config.capacity == 0 {
            return Err(BidTableError::InvalidCapacity(config.capacity));
        }
        if config.bid_id.is_empty() {
            return Err(BidTableError::Config("bid id must not be empty".to_string()));
        }

        Ok(config)
    }
}
