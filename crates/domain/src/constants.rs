//! Application constants
//!
//! Centralized location for the domain-level constants used throughout the
//! application.

// Storefront defaults applied to every exported country. The remote schema
// requires these fields even though the ERP does not track them.
pub const DEFAULT_LANGUAGE_ID: &str = "1";
pub const DEFAULT_ZONE_ID: &str = "1";
pub const CONTAINS_STATES: &str = "0";
pub const NEED_IDENTIFICATION_NUMBER: &str = "0";
pub const DISPLAY_TAX_LABEL: &str = "1";
pub const ACTIVE: &str = "1";

// Validation messages
pub const INVALID_COUNTRY: &str = "invalid country";

// Webservice resource paths
pub const COUNTRIES_RESOURCE: &str = "api/countries";
