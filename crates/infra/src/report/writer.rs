//! File-backed export report writer
//!
//! Appends the run report the back office reads: a section banner, one entry
//! per failed record and a closing tally. The layout matches the reports the
//! ERP has always produced, so downstream tooling keeps working.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use shopsync_core::ReportSink;
use shopsync_domain::{Result, ShopSyncError};

const SECTION_RULE: &str = "-----------------------------------------------";

/// Append-only text report
pub struct FileReportWriter {
    writer: Mutex<BufWriter<File>>,
}

impl FileReportWriter {
    /// Open (or create) the report file in append mode.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .map_err(|err| ShopSyncError::Internal(format!("failed to open report: {err}")))?;

        Ok(Self { writer: Mutex::new(BufWriter::new(file)) })
    }

    fn write_raw(&self, text: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ShopSyncError::Internal("report writer poisoned".to_string()))?;
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|err| ShopSyncError::Internal(format!("failed to write report: {err}")))
    }
}

#[async_trait]
impl ReportSink for FileReportWriter {
    async fn section(&self, name: &str) -> Result<()> {
        self.write_raw(&format!("\n{SECTION_RULE}\n{name}"))
    }

    async fn failure(&self, country_id: i64, message: &str) -> Result<()> {
        self.write_raw(&format!("\n\nId - {country_id} {message}"))
    }

    async fn summary(&self, succeeded: u32, failed: u32) -> Result<()> {
        self.write_raw(&format!("\n\nSucceed : {succeeded} Anomaly : {failed}"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn writes_the_expected_report_layout() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("export.log");

        let writer = FileReportWriter::open(&path).expect("open report");
        writer.section("Country").await.expect("section");
        writer.failure(2, "Validation error: invalid country").await.expect("failure");
        writer.summary(2, 1).await.expect("summary");

        let contents = std::fs::read_to_string(&path).expect("read report");
        assert_eq!(
            contents,
            "\n-----------------------------------------------\nCountry\
             \n\nId - 2 Validation error: invalid country\
             \n\nSucceed : 2 Anomaly : 1"
        );
    }

    #[tokio::test]
    async fn appends_across_runs() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("export.log");

        {
            let writer = FileReportWriter::open(&path).expect("open report");
            writer.section("Country").await.expect("section");
            writer.summary(1, 0).await.expect("summary");
        }
        {
            let writer = FileReportWriter::open(&path).expect("open report");
            writer.section("Country").await.expect("section");
            writer.summary(0, 0).await.expect("summary");
        }

        let contents = std::fs::read_to_string(&path).expect("read report");
        assert_eq!(contents.matches("Succeed :").count(), 2);
    }
}
