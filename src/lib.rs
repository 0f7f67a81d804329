// Fri Oct 16 2026 - Alex

#[macro_use]
mod macros;

pub mod checker;
pub mod config;
pub mod layout;
pub mod output;
pub mod reference;
pub mod table;
pub mod utils;
pub mod win32;

pub use checker::{CheckOutcome, CheckRun, CheckStatus, LayoutChecker};
pub use config::Config;
pub use layout::{Capabilities, CompiledLayout, LayoutSource};
pub use output::{ReportGenerator, TestReporter};
pub use table::{ConsistencyChecker, ExpectationTable, TableBuilder};
