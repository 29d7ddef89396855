// ABOUTME: API module containing the HTTP handler functions for the tallybook REST API.
// ABOUTME: Split into record listing/creation, the summary view, and the file download.

pub mod download;
pub mod records;
pub mod summary;
