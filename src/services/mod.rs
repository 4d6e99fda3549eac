// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - ingestion pipeline layer.

pub mod assembler;
pub mod format;
pub mod ingest;
pub mod labels;
pub mod plt;

pub use assembler::{ActivityAssembler, ActivityBundle};
pub use ingest::{ActivityIdCounter, IdStrategy, IngestDriver, IngestReport};
pub use labels::LabelIndex;
