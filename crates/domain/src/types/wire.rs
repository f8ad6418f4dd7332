//! Wire-schema types for the storefront webservice
//!
//! The storefront exchanges XML documents wrapped in a `<prestashop>`
//! envelope. These structs are plain serde models; the XML binding itself
//! lives in the gateway adapter.

use serde::{Deserialize, Serialize};

/// Envelope around a single country resource, used for create and update
/// payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "prestashop")]
pub struct CountryEnvelope {
    pub country: RemoteCountry,
}

impl CountryEnvelope {
    #[must_use]
    pub fn new(country: RemoteCountry) -> Self {
        Self { country }
    }
}

/// Country as the storefront schema shapes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCountry {
    /// Remote identifier; absent when creating a new resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub id_zone: String,
    pub name: LocalizedValue,
    pub iso_code: String,
    pub contains_states: String,
    pub need_identification_number: String,
    pub display_tax_label: String,
    pub active: String,
}

/// Language-keyed text value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedValue {
    pub language: LanguageValue,
}

/// One `<language id="...">text</language>` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageValue {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Lenient view of a create/update response; only the assigned identifier is
/// of interest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "prestashop")]
pub struct CountryIdResponse {
    pub country: CountryIdBody,
}

/// Body of [`CountryIdResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct CountryIdBody {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Filtered collection response returned by the ISO-code lookup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "prestashop")]
pub struct CountriesResponse {
    #[serde(default)]
    pub countries: CountryRefs,
}

impl CountriesResponse {
    /// Remote identifier of the first matching country, if any.
    #[must_use]
    pub fn first_id(&self) -> Option<i64> {
        self.countries.country.first().map(|c| c.id)
    }
}

/// Collection of country references
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryRefs {
    #[serde(default)]
    pub country: Vec<CountryRef>,
}

/// Reference to a remote country, carried as attributes on an empty element
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRef {
    #[serde(rename = "@id")]
    pub id: i64,
}
