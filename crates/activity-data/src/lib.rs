//! Data ingestion and aggregation layer for the mail-activity report tool.
//!
//! Responsible for reading the CSV export into a normalized corpus, ranking
//! persons by emails sent/received, reconstructing per-person timelines,
//! bucketing them by calendar month and running the top-level report
//! pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;
pub mod report;
pub mod timeline;

pub use activity_core as core;
