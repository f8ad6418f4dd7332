//! Storefront webservice adapter

pub mod client;
pub mod errors;

pub use client::{PrestashopClient, StorefrontClientConfig};
pub use errors::{GatewayError, GatewayErrorCategory};
