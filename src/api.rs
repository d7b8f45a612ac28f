// API key provider and booking submission client
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error};

use crate::booking::{BookingRequest, BookingResponse};
use crate::wire::{RawBookingResponse, RawKeyResponse};

// Fixed production host; point ClientConfig elsewhere for a stage
// environment or a test double.
pub const DEFAULT_BASE_URL: &str = "https://731xy9c2ak.execute-api.eu-north-1.amazonaws.com";

pub const API_KEY_HEADER: &str = "x-api-key";

// Credential fetch failures. Any of these leaves the session without a key
// and blocks submission until reload.
#[derive(Error, Debug)]
pub enum KeyFetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Key endpoint returned status {0}")]
    Status(u16),

    #[error("API key not found in response")]
    MissingKey,
}

// Booking creation failures. All of them reset the session to a retryable
// state; none is shown to the user verbatim.
#[derive(Error, Debug)]
pub enum BookingSubmitError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Booking endpoint returned status {0}")]
    Status(u16),

    #[error("Service reported the booking as unsuccessful")]
    Rejected,

    #[error("Booking details missing from response")]
    MissingDetails,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Initialization error: {0}")]
    Init(#[from] reqwest::Error),
}

// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

// The two calls the booking service exposes. The session is generic over
// this trait so tests can drive it with a scripted implementation.
#[async_trait]
pub trait BookingApi: Send + Sync {
    // One GET to the key-issuing endpoint; called once at startup.
    async fn fetch_api_key(&self) -> Result<String, KeyFetchError>;

    // One POST creating the booking; the credential rides in a header.
    async fn create_booking(
        &self,
        api_key: &str,
        request: &BookingRequest,
    ) -> Result<BookingResponse, BookingSubmitError>;
}

// reqwest-backed client against the real service.
pub struct HttpBookingClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpBookingClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl BookingApi for HttpBookingClient {
    async fn fetch_api_key(&self) -> Result<String, KeyFetchError> {
        let url = format!("{}/key", self.config.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(KeyFetchError::Status(response.status().as_u16()));
        }

        let body: RawKeyResponse = response.json().await?;
        match body.key {
            Some(key) => {
                debug!("API key fetched");
                Ok(key)
            }
            None => {
                error!(secondary_key = ?body.api_key, "unexpected key response shape");
                Err(KeyFetchError::MissingKey)
            }
        }
    }

    async fn create_booking(
        &self,
        api_key: &str,
        request: &BookingRequest,
    ) -> Result<BookingResponse, BookingSubmitError> {
        let url = format!("{}/booking", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BookingSubmitError::Status(response.status().as_u16()));
        }

        let raw: RawBookingResponse = response.json().await?;
        debug!(?raw, "raw booking response");
        raw.into_booking()
    }
}
