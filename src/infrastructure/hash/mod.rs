// Bucket key derivation for bid identifiers

use std::num::NonZeroUsize;

/// Parse the leading integer of a bid identifier
///
/// Follows C `atoi`: leading whitespace is skipped, one optional sign is
/// accepted, then the longest run of decimal digits is read. Anything after
/// the digits is ignored and input without digits yields 0. Values outside
/// the `i32` range saturate at `i32::MAX` / `i32::MIN`.
pub fn parse_key(s: &str) -> i32 {
    let bytes = s
        .trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'))
        .as_bytes();

    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    const LIMIT: i64 = i32::MAX as i64 + 1;

    let mut value: i64 = 0;
    for &byte in digits.iter().take_while(|b| b.is_ascii_digit()) {
        value = value * 10 + i64::from(byte - b'0');
        if value > LIMIT {
            break;
        }
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Reduce a parsed key to a bucket index
///
/// The key is reinterpreted as an unsigned 32-bit integer before the modulo,
/// so negative keys land on a valid bucket.
pub fn bucket_for(key: i32, capacity: NonZeroUsize) -> usize {
    (key as u32 as usize) % capacity.get()
}

/// Bucket index of a bid identifier
pub fn hash_bid_id(bid_id: &str, capacity: NonZeroUsize) -> usize {
    bucket_for(parse_key(bid_id), capacity)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
