//! Output renderers for probe reports

pub mod report;
pub mod table;

pub use report::{ReportRenderer, TableRenderer};
pub use table::TableBuilder;
