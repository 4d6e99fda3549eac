// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion of raw PLT rows into typed trackpoints.

use crate::models::TrackPoint;
use crate::services::plt::RawTrackPoint;
use crate::time_utils;

/// Errors from trackpoint field conversion.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unrecognized timestamp '{0}'")]
    Timestamp(String),
}

/// Convert the raw rows of one activity into typed records.
///
/// When the owning activity ID is already known it is stamped onto every
/// record; otherwise `activity_id` stays absent and the relationship is left
/// to the store (embedding).
pub fn format_trackpoints(
    rows: &[RawTrackPoint],
    activity_id: Option<i64>,
) -> Result<Vec<TrackPoint>, FormatError> {
    rows.iter()
        .map(|row| format_trackpoint(row, activity_id))
        .collect()
}

fn format_trackpoint(row: &RawTrackPoint, activity_id: Option<i64>) -> Result<TrackPoint, FormatError> {
    let date_time = format!("{} {}", row.date, row.time);
    Ok(TrackPoint {
        activity_id,
        lat: parse_f64(&row.latitude, "latitude")?,
        lon: parse_f64(&row.longitude, "longitude")?,
        altitude: truncate_altitude(parse_f64(&row.altitude, "altitude")?),
        date_days: parse_f64(&row.date_days, "date_days")?,
        date_time: time_utils::parse_flexible(&date_time)
            .ok_or(FormatError::Timestamp(date_time))?,
    })
}

fn parse_f64(value: &str, field: &'static str) -> Result<f64, FormatError> {
    value.trim().parse().map_err(|_| FormatError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Truncate (not round) a raw altitude to whole feet, matching the legacy
/// loader's integer conversion.
fn truncate_altitude(value: f64) -> i32 {
    value.trunc() as i32
}
