//! Mapping from the local entity to the storefront wire shape

use shopsync_domain::constants::{
    ACTIVE, CONTAINS_STATES, DEFAULT_LANGUAGE_ID, DEFAULT_ZONE_ID, DISPLAY_TAX_LABEL,
    NEED_IDENTIFICATION_NUMBER,
};
use shopsync_domain::{Country, LanguageValue, LocalizedValue, RemoteCountry};

/// Shape a local country for the storefront schema.
///
/// The zone and flag fields are fixed storefront defaults; only the name,
/// the ISO code and the identifier vary per record. The identifier is left
/// empty for create operations.
#[must_use]
pub fn to_remote_country(country: &Country, remote_id: Option<i64>) -> RemoteCountry {
    RemoteCountry {
        id: remote_id.map(|id| id.to_string()),
        id_zone: DEFAULT_ZONE_ID.to_string(),
        name: LocalizedValue {
            language: LanguageValue {
                id: DEFAULT_LANGUAGE_ID.to_string(),
                value: country.name.clone().unwrap_or_default(),
            },
        },
        iso_code: country.alpha2_code.clone(),
        contains_states: CONTAINS_STATES.to_string(),
        need_identification_number: NEED_IDENTIFICATION_NUMBER.to_string(),
        display_tax_label: DISPLAY_TAX_LABEL.to_string(),
        active: ACTIVE.to_string(),
    }
}
