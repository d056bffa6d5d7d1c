//! Output layer for the mail-activity report tool.
//!
//! Writes the ranked summary table as CSV and renders the monthly activity
//! series as PNG line charts. Everything here consumes plain data from the
//! aggregation layer; nothing feeds back into the pipeline.

pub mod charts;
pub mod table;

pub use activity_core as core;
