//! Country export service - the reconcile-and-upsert loop
//!
//! Walks the selected change set one record at a time: validate, look the
//! record up remotely, decide create-vs-update, map to the wire shape,
//! submit, and persist the returned identifier. A failing record is written
//! to the report and skipped; the loop itself never aborts for one record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shopsync_domain::{Country, ExportSummary, Result};
use tracing::{debug, info, instrument, warn};

use super::mapper::to_remote_country;
use super::ports::{CountryRepository, ReportSink, StorefrontGateway};
use super::resolver::{ensure_exportable, resolve, ExportAction};

/// Report section name for the country entity
const SECTION_COUNTRY: &str = "Country";

/// Orchestrates one export run over constructor-supplied collaborators.
pub struct CountryExportService {
    repository: Arc<dyn CountryRepository>,
    gateway: Arc<dyn StorefrontGateway>,
    report: Arc<dyn ReportSink>,
}

impl CountryExportService {
    /// Create a new export service.
    pub fn new(
        repository: Arc<dyn CountryRepository>,
        gateway: Arc<dyn StorefrontGateway>,
        report: Arc<dyn ReportSink>,
    ) -> Self {
        Self { repository, gateway, report }
    }

    /// Run one export pass over the change set selected by `cutoff`.
    ///
    /// Every selected record ends up either succeeded or failed; the
    /// returned tally always satisfies `succeeded + failed == processed`.
    /// Only a selector or report-sink failure aborts the run.
    #[instrument(skip(self))]
    pub async fn export(&self, cutoff: Option<DateTime<Utc>>) -> Result<ExportSummary> {
        let countries = self.repository.find_for_export(cutoff).await?;
        info!(count = countries.len(), "starting country export");

        self.report.section(SECTION_COUNTRY).await?;

        let mut summary = ExportSummary::default();
        for country in &countries {
            match self.export_one(country).await {
                Ok(remote_id) => {
                    debug!(country_id = country.id, remote_id, "country exported");
                    summary.record_success();
                }
                Err(err) => {
                    warn!(country_id = country.id, error = %err, "country export failed");
                    let message = err.to_string();
                    self.report.failure(country.id, &message).await?;
                    summary.record_failure(country.id, message);
                }
            }
        }

        self.report.summary(summary.succeeded, summary.failed).await?;
        info!(succeeded = summary.succeeded, failed = summary.failed, "country export finished");

        Ok(summary)
    }

    /// Push a single record through the pipeline and return the storefront
    /// identifier it ended up with.
    async fn export_one(&self, country: &Country) -> Result<i64> {
        ensure_exportable(country)?;

        let lookup = self.gateway.find_country_id(&country.alpha2_code).await?;
        let action = resolve(country, lookup);
        let payload = to_remote_country(country, action.remote_id());

        let remote_id = match action {
            ExportAction::Create => self.gateway.create_country(&payload).await?,
            ExportAction::UpdateByLookup(id) | ExportAction::UpdateByStored(id) => {
                self.gateway.update_country(id, &payload).await?
            }
        };

        self.repository.save_remote_id(country.id, remote_id).await?;
        Ok(remote_id)
    }
}
