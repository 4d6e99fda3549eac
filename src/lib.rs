// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! GeoLife trajectory ingestion.
//!
//! This crate loads a GeoLife-style GPS trajectory dataset into a structured
//! store: it parses per-user PLT files, matches human-assigned
//! transportation-mode labels by exact time range and inserts users,
//! activities and trackpoints through a pluggable storage sink, either
//! eagerly per activity or batched globally.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

pub use config::Config;
pub use error::{IngestError, Result};
pub use services::ingest::{ActivityIdCounter, IdStrategy, IngestDriver, IngestReport};
pub use store::{MemoryStore, StorageSink};
