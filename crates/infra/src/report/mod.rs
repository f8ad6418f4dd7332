//! Export report output

pub mod writer;

pub use writer::FileReportWriter;
