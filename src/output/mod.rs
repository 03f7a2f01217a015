mod tree_report;

pub use tree_report::{TreeReport, TreeReportError};
