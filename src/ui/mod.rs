//! Console output: progress spinners, host information and result tables

pub mod host;
pub mod progress;
pub mod table;

pub use host::HostInfo;
pub use table::print_report;
