//! Report workflow: fetch indicators → evaluate → render → send

pub mod context;
pub mod handlers;
pub mod types;

pub use context::JobContext;
pub use types::{ReportError, ReportOutcome};
