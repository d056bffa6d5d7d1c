//! Core data model and row normalization for the mail-activity report tool.
//!
//! Defines the normalized email record, the in-memory corpus, the derived
//! summary/event types, the shared error type, and the CLI settings.

pub mod error;
pub mod models;
pub mod normalizer;
pub mod settings;
