use super::*;

#[test]
fn test_bid_accessors() {
    let bid = Bid::new("98223", "Dell Laptop", "Enterprise", 125.5);

    assert_eq!(bid.bid_id(), "98223");
    assert_eq!(bid.title(), "Dell Laptop");
    assert_eq!(bid.fund(), "Enterprise");
    assert_eq!(bid.amount(), 125.5);
}

#[test]
fn test_bid_display() {
    let bid = Bid::new("23", "Python Elements", "General Fund", 35.0);
    assert_eq!(bid.to_string(), "23: Python Elements | 35 | General Fund");

    let bid = Bid::new("33", "C++ Primer", "General Fund", 80.25);
    assert_eq!(bid.to_string(), "33: C++ Primer | 80.25 | General Fund");
}

#[test]
fn test_bid_json() {
    let bid = Bid::new("7", "Desk", "General Fund", 12.0);
    let json = serde_json::to_string(&bid).unwrap();
    assert_eq!(
        json,
        r#"{"bid_id":"7","title":"Desk","fund":"General Fund","amount":12.0}"#
    );

    let decoded: Bid = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, bid);
}
