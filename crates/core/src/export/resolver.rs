//! Create-vs-update resolution for a single country record

use shopsync_domain::constants::INVALID_COUNTRY;
use shopsync_domain::{Country, Result, ShopSyncError};
use tracing::warn;

/// Action to take against the storefront for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    /// No identifier known anywhere; a new resource is created
    Create,
    /// Identifier found on the storefront during this run
    UpdateByLookup(i64),
    /// Identifier remembered from a previous run
    UpdateByStored(i64),
}

impl ExportAction {
    /// The remote identifier the payload should carry, if any.
    #[must_use]
    pub fn remote_id(&self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::UpdateByLookup(id) | Self::UpdateByStored(id) => Some(*id),
        }
    }
}

/// Reject records that cannot be represented remotely.
///
/// Runs before any webservice call, so an invalid record never leaves the
/// process.
pub fn ensure_exportable(country: &Country) -> Result<()> {
    match country.name.as_deref() {
        Some(name) if !name.trim().is_empty() => Ok(()),
        _ => Err(ShopSyncError::Validation(INVALID_COUNTRY.to_string())),
    }
}

/// Decide between create and the two update flavours.
///
/// A fresh lookup wins over the stored identifier; after a successful update
/// the stored id is overwritten with whatever the storefront returned.
#[must_use]
pub fn resolve(country: &Country, lookup: Option<i64>) -> ExportAction {
    match (lookup, country.remote_id) {
        (Some(found), stored) => {
            if stored.is_some_and(|stored| stored != found) {
                warn!(
                    country_id = country.id,
                    stored_id = country.remote_id,
                    lookup_id = found,
                    "stored storefront id differs from lookup; using lookup"
                );
            }
            ExportAction::UpdateByLookup(found)
        }
        (None, Some(stored)) => ExportAction::UpdateByStored(stored),
        (None, None) => ExportAction::Create,
    }
}
