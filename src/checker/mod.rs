// Thu Oct 15 2026 - Alex

pub mod outcome;
pub mod runner;
pub mod summary;

pub use outcome::{CheckOutcome, CheckStatus};
pub use runner::LayoutChecker;
pub use summary::{CheckRun, RunSummary};
