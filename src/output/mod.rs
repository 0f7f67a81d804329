// Fri Oct 16 2026 - Alex

pub mod error;
pub mod report;
pub mod reporter;

pub use error::ReportError;
pub use report::{ReportFormat, ReportGenerator};
pub use reporter::TestReporter;
