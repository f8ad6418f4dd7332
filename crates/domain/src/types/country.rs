//! Local country entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Country reference record as stored in the ERP database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    /// ISO 3166-1 alpha-2 code; the natural join key to the storefront
    pub alpha2_code: String,
    /// Display name; records without one cannot be exported
    pub name: Option<String>,
    /// Identifier assigned by the storefront, set after the first successful
    /// sync
    pub remote_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Country {
    /// Returns true once the record has been synced to the storefront.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.remote_id.is_some()
    }
}
