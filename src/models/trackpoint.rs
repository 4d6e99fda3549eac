// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trackpoint model for storage.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One GPS fix within an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Back-reference to the owning activity (absent in the embedding shape)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<i64>,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Altitude in feet, truncated from the raw floating-point field
    pub altitude: i32,
    /// Fractional days since 1899-12-30 (dataset convention)
    pub date_days: f64,
    /// Timestamp of the fix
    pub date_time: NaiveDateTime,
}
