// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoLife dataset loader
//!
//! Reads a GeoLife-style dataset from disk and ingests users, activities and
//! trackpoints through the bundled in-memory storage sink, reporting totals
//! at the end. Deployments with a real backend swap in their own sink.

use geolife_ingest::{ActivityIdCounter, Config, IngestDriver, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        root = %config.dataset_root.display(),
        strategy = ?config.id_strategy,
        deferred_bulk = config.deferred_bulk,
        "Starting GeoLife loader"
    );

    let mut store = MemoryStore::new();
    let driver = IngestDriver::new(&mut store, config, ActivityIdCounter::new());
    let report = driver.run()?;

    tracing::info!(
        users = report.users,
        activities = report.activities,
        trackpoints = report.trackpoints,
        label_misses = report.label_misses,
        "Ingestion finished"
    );
    if !report.is_complete() {
        tracing::warn!(
            failed_chunks = ?report.failed_chunks,
            "Some trackpoint chunks failed to insert"
        );
    }
    Ok(())
}

/// Initialize logging with an env-filter defaulting to debug for this crate.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("geolife_ingest=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
