// ABOUTME: Persistence layer for tallybook, keeping every record in one JSON array file.
// ABOUTME: Provides the RecordStore with list, append, summarize, and raw export.

pub mod record_store;

pub use record_store::{RecordStore, StoreError};
