//! # ShopSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The create-vs-update resolver and wire-shape mapper
//! - The country export service
//!
//! ## Architecture Principles
//! - Only depends on `shopsync-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod export;

// Re-export specific items to avoid ambiguity
pub use export::ports::{CountryRepository, ReportSink, StorefrontGateway};
pub use export::resolver::ExportAction;
pub use export::CountryExportService;
