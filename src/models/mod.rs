// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the ingested entities.

pub mod activity;
pub mod trackpoint;
pub mod user;

pub use activity::Activity;
pub use trackpoint::TrackPoint;
pub use user::User;
