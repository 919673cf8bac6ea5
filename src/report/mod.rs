//! Assembly of the final report from parsed and summarized records

pub mod builder;

pub use builder::{build_report, list_directory, summarize_file};
pub use crate::models::Report;
