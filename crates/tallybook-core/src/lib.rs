// ABOUTME: Domain types for tallybook: the expense Record, raw input validation, and summaries.
// ABOUTME: Pure data and rules with no I/O; persistence lives in tallybook-store.

pub mod input;
pub mod record;
pub mod summary;

pub use input::{RecordInput, ValidationError};
pub use record::Record;
pub use summary::Summary;
