//! Port interfaces for the country export pipeline

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shopsync_domain::{Country, RemoteCountry, Result};

/// Trait for reading and writing local country records
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Select the change set for one export run.
    ///
    /// Without a cutoff every record is returned. With one, records created
    /// or updated after the cutoff are returned, plus records that have
    /// never been synced regardless of their timestamps.
    async fn find_for_export(&self, cutoff: Option<DateTime<Utc>>) -> Result<Vec<Country>>;

    /// Persist the storefront identifier onto a local record.
    async fn save_remote_id(&self, country_id: i64, remote_id: i64) -> Result<()>;
}

/// Trait for talking to the storefront webservice
#[async_trait]
pub trait StorefrontGateway: Send + Sync {
    /// Look up a country by ISO alpha-2 code.
    ///
    /// Returns `None` when the storefront has no match; transport and API
    /// failures propagate to the caller.
    async fn find_country_id(&self, iso_code: &str) -> Result<Option<i64>>;

    /// Create a country resource and return the assigned identifier.
    async fn create_country(&self, country: &RemoteCountry) -> Result<i64>;

    /// Update an existing country resource and return its identifier.
    async fn update_country(&self, remote_id: i64, country: &RemoteCountry) -> Result<i64>;

    /// Probe the webservice for reachability.
    async fn health_check(&self) -> Result<bool>;
}

/// Trait for the human-readable export report
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Open a named section, one per exported entity type.
    async fn section(&self, name: &str) -> Result<()>;

    /// Record one failed record.
    async fn failure(&self, country_id: i64, message: &str) -> Result<()>;

    /// Write the final tally for the current section.
    async fn summary(&self, succeeded: u32, failed: u32) -> Result<()>;
}
