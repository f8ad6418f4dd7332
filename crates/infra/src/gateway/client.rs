//! Storefront webservice client
//!
//! HTTP adapter for a PrestaShop-compatible XML webservice. The webservice
//! key travels as the basic-auth username with an empty password; request
//! and response bodies are `<prestashop>` envelopes encoded with quick-xml.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shopsync_core::StorefrontGateway;
use shopsync_domain::constants::COUNTRIES_RESOURCE;
use shopsync_domain::types::wire::{CountriesResponse, CountryEnvelope, CountryIdResponse};
use shopsync_domain::{RemoteCountry, Result};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::GatewayError;

/// Configuration for the storefront client
#[derive(Debug, Clone)]
pub struct StorefrontClientConfig {
    /// Base shop URL (e.g. `https://shop.example.com`)
    pub base_url: String,
    /// Webservice key, sent as the basic-auth username
    pub api_key: String,
    /// Timeout for webservice requests
    pub timeout: Duration,
}

impl Default for StorefrontClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the storefront country resource
pub struct PrestashopClient {
    http: Client,
    base_url: Url,
    config: StorefrontClientConfig,
}

impl PrestashopClient {
    /// Create a new client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn with_config(config: StorefrontClientConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|err| GatewayError::Config(format!("invalid base url: {err}")))?;
        // Resource paths are joined against the base, which needs a trailing
        // slash to keep its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder().timeout(config.timeout).build().map_err(|err| {
            GatewayError::Config(format!("failed to build HTTP client: {err}"))
        })?;

        Ok(Self { http, base_url, config })
    }

    fn countries_url(&self) -> Result<Url> {
        self.base_url
            .join(COUNTRIES_RESOURCE)
            .map_err(|err| GatewayError::Config(format!("invalid resource url: {err}")).into())
    }

    fn country_url(&self, remote_id: i64) -> Result<Url> {
        self.base_url
            .join(&format!("{COUNTRIES_RESOURCE}/{remote_id}"))
            .map_err(|err| GatewayError::Config(format!("invalid resource url: {err}")).into())
    }

    /// Send a request with webservice authentication and map non-success
    /// statuses onto gateway errors.
    async fn send(&self, builder: RequestBuilder) -> std::result::Result<Response, GatewayError> {
        let response = builder
            .basic_auth(&self.config.api_key, Some(""))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    GatewayError::Timeout(self.config.timeout)
                } else {
                    GatewayError::Network(err.to_string())
                }
            })?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(GatewayError::Auth(format!("webservice rejected the key ({status})")))
            }
            status if status.is_server_error() => {
                Err(GatewayError::Server(format!("webservice error ({status})")))
            }
            status if status.is_client_error() => {
                Err(GatewayError::Client(format!("webservice rejected the request ({status})")))
            }
            _ => Ok(response),
        }
    }

    async fn read_body(response: Response) -> std::result::Result<String, GatewayError> {
        response.text().await.map_err(|err| GatewayError::Network(err.to_string()))
    }
}

#[async_trait]
impl StorefrontGateway for PrestashopClient {
    #[instrument(skip(self))]
    async fn find_country_id(&self, iso_code: &str) -> Result<Option<i64>> {
        let mut url = self.countries_url()?;
        url.query_pairs_mut().append_pair("filter[iso_code]", iso_code);

        debug!(%url, "looking up country by iso code");
        let response = self.send(self.http.get(url)).await?;
        let body = Self::read_body(response).await?;
        let found = decode_lookup(&body)?;

        debug!(iso_code, remote_id = ?found, "country lookup finished");
        Ok(found)
    }

    #[instrument(skip(self, country), fields(iso_code = %country.iso_code))]
    async fn create_country(&self, country: &RemoteCountry) -> Result<i64> {
        let url = self.countries_url()?;
        let payload = encode_envelope(country)?;

        debug!(%url, "creating country");
        let response = self.send(self.http.post(url).body(payload)).await?;
        let body = Self::read_body(response).await?;
        let remote_id = decode_country_id(&body)?;

        info!(iso_code = %country.iso_code, remote_id, "country created");
        Ok(remote_id)
    }

    #[instrument(skip(self, country), fields(iso_code = %country.iso_code))]
    async fn update_country(&self, remote_id: i64, country: &RemoteCountry) -> Result<i64> {
        let url = self.country_url(remote_id)?;
        let payload = encode_envelope(country)?;

        debug!(%url, "updating country");
        let response = self.send(self.http.put(url).body(payload)).await?;
        let body = Self::read_body(response).await?;
        let confirmed_id = decode_country_id(&body)?;

        info!(iso_code = %country.iso_code, remote_id = confirmed_id, "country updated");
        Ok(confirmed_id)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool> {
        let url = self.countries_url()?;

        debug!(%url, "probing storefront webservice");
        let response = self
            .http
            .get(url)
            .basic_auth(&self.config.api_key, Some(""))
            .send()
            .await
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        let healthy = response.status().is_success();
        if healthy {
            debug!("storefront webservice is reachable");
        } else {
            warn!(status = %response.status(), "storefront webservice returned non-success status");
        }
        Ok(healthy)
    }
}

fn encode_envelope(country: &RemoteCountry) -> std::result::Result<String, GatewayError> {
    let envelope = CountryEnvelope::new(country.clone());
    quick_xml::se::to_string(&envelope)
        .map_err(|err| GatewayError::Parse(format!("failed to encode country: {err}")))
}

fn decode_country_id(body: &str) -> std::result::Result<i64, GatewayError> {
    let response: CountryIdResponse = quick_xml::de::from_str(body)
        .map_err(|err| GatewayError::Parse(format!("failed to decode country response: {err}")))?;
    response
        .country
        .id
        .ok_or_else(|| GatewayError::Parse("response carries no country id".to_string()))
}

fn decode_lookup(body: &str) -> std::result::Result<Option<i64>, GatewayError> {
    let response: CountriesResponse = quick_xml::de::from_str(body).map_err(|err| {
        GatewayError::Parse(format!("failed to decode countries response: {err}"))
    })?;
    Ok(response.first_id())
}
