//! Domain types and models

pub mod country;
pub mod report;
pub mod wire;

pub use country::Country;
pub use report::{ExportFailure, ExportSummary};
pub use wire::{
    CountriesResponse, CountryEnvelope, CountryIdResponse, LanguageValue, LocalizedValue,
    RemoteCountry,
};
