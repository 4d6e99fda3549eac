// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for parsing dataset timestamps.
//!
//! The dataset carries two textual timestamp shapes by convention: PLT rows
//! use `2008-10-23 02:53:04` while label rows use `2008/10/23 02:53:04`.
//! The two strict parsers are kept distinct on purpose; do not unify them.

use chrono::NaiveDateTime;

/// Timestamp format of PLT data rows (activity bounds).
const PLT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format of label file rows.
const LABEL_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Shapes accepted by [`parse_flexible`], most common first.
const FLEXIBLE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a PLT date + time field pair into an activity bound (strict).
pub fn parse_plt_bound(date: &str, time: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), PLT_FORMAT)
}

/// Parse a label row timestamp (strict).
pub fn parse_label_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, LABEL_FORMAT)
}

/// Parse a per-trackpoint timestamp, tolerating the handful of shapes that
/// show up in raw rows. Returns `None` when no known shape matches.
pub fn parse_flexible(value: &str) -> Option<NaiveDateTime> {
    FLEXIBLE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plt_bound_parses_dashed_shape() {
        let parsed = parse_plt_bound("2008-10-23", "02:53:04").unwrap();
        assert_eq!(parsed.to_string(), "2008-10-23 02:53:04");
    }

    #[test]
    fn test_plt_bound_rejects_label_shape() {
        assert!(parse_plt_bound("2008/10/23", "02:53:04").is_err());
    }

    #[test]
    fn test_label_timestamp_parses_slashed_shape() {
        let parsed = parse_label_timestamp("2008/10/23 11:11:12").unwrap();
        assert_eq!(parsed.to_string(), "2008-10-23 11:11:12");
    }

    #[test]
    fn test_label_timestamp_rejects_plt_shape() {
        assert!(parse_label_timestamp("2008-10-23 11:11:12").is_err());
    }

    #[test]
    fn test_flexible_accepts_common_shapes() {
        for value in [
            "2008-10-23 02:53:04",
            "2008-10-23 02:53:04.123",
            "2008/10/23 02:53:04",
            "2008-10-23T02:53:04",
        ] {
            assert!(parse_flexible(value).is_some(), "should parse {:?}", value);
        }
    }

    #[test]
    fn test_flexible_rejects_garbage() {
        assert!(parse_flexible("not a timestamp").is_none());
        assert!(parse_flexible("2008-10-23").is_none());
    }
}
