use super::*;
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const CSV: &str = "\
ArticleTitle,ArticleID,Department,CloseDate,WinningBid,InventoryID,VehicleID,ReceiptNumber,Fund
Python Elements,23,Books,1/1/2017,$35.00,I1,V1,R1,General Fund
C++ Primer,33,Books,1/1/2017,$80.00,I2,V2,R2,General Fund
Dell Laptop,98223,Tech,1/2/2017,$125.50,I3,V3,R3,Enterprise
";

fn csv_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CSV.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn config(csv_path: PathBuf, bid_id: &str) -> Config {
    Config {
        csv_path,
        bid_id: bid_id.to_string(),
        capacity: 10,
        json: false,
    }
}

fn run_session(config: Config, input: &str) -> (String, usize) {
    let mut output = Vec::new();
    let len = {
        let mut driver = Driver::new(input.as_bytes(), &mut output, config).unwrap();
        driver.run().unwrap();
        driver.table().len()
    };
    (String::from_utf8(output).unwrap(), len)
}

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::LoadBids));
    assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::DisplayAll));
    assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::FindBid));
    assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::RemoveBid));
    assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("5"), None);
    assert_eq!(MenuChoice::parse("load"), None);
}

#[test]
fn test_exit_immediately() {
    let (output, len) = run_session(config(PathBuf::from("unused.csv"), "98223"), "9\n");

    assert!(output.starts_with("Menu:\n  1. Load Bids"));
    assert!(output.ends_with("Good bye.\n"));
    assert_eq!(len, 0);
}

#[test]
fn test_end_of_input_exits() {
    let (output, _) = run_session(config(PathBuf::from("unused.csv"), "98223"), "");
    assert!(output.ends_with("Good bye.\n"));
}

#[test]
fn test_load_find_remove_session() {
    let file = csv_file();
    let (output, len) = run_session(
        config(file.path().to_path_buf(), "98223"),
        "1\n3\n4\n3\n4\n9\n",
    );

    assert!(output.contains("Loading CSV file"));
    assert!(output.contains("ArticleTitle | ArticleID | "));
    assert!(output.contains("3 bids read, 0 skipped"));
    assert!(output.contains("98223: Dell Laptop | 125.5 | Enterprise"));
    assert!(output.contains("Bid 98223 removed."));
    assert!(output.contains("Bid Id 98223 not found."));
    assert!(output.contains("Bid 98223 not found."));
    assert!(output.contains("time: "));
    assert_eq!(len, 2);
}

#[test]
fn test_display_all_in_bucket_order() {
    let file = csv_file();
    let (output, _) = run_session(config(file.path().to_path_buf(), "1"), "1\n2\n9\n");

    // 23 and 33 chain in bucket 3, 98223 lands in bucket 3 as well
    let first = output.find("23: Python Elements").unwrap();
    let second = output.find("33: C++ Primer").unwrap();
    let third = output.find("98223: Dell Laptop").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_display_json() {
    let file = csv_file();
    let mut config = config(file.path().to_path_buf(), "33");
    config.json = true;

    let (output, _) = run_session(config, "1\n3\n9\n");
    assert!(output.contains(r#"{"bid_id":"33","title":"C++ Primer","fund":"General Fund","amount":80.0}"#));
}

#[test]
fn test_missing_file_keeps_running() {
    let dir = tempfile::TempDir::new().unwrap();
    let (output, len) = run_session(
        config(dir.path().join("missing.csv"), "98223"),
        "1\n3\n9\n",
    );

    assert!(output.contains("Unable to load"));
    assert!(output.contains("Bid Id 98223 not found."));
    assert!(output.ends_with("Good bye.\n"));
    assert_eq!(len, 0);
}

#[test]
fn test_unknown_choice() {
    let (output, _) = run_session(config(PathBuf::from("unused.csv"), "98223"), "7\nabc\n9\n");
    assert!(output.contains("Unknown choice: 7"));
    assert!(output.contains("Unknown choice: abc"));
}

#[test]
fn test_zero_capacity_driver() {
    let mut config = config(PathBuf::from("unused.csv"), "1");
    config.capacity = 0;
    let result = Driver::new("".as_bytes(), Vec::new(), config);
    assert!(result.is_err());
}
