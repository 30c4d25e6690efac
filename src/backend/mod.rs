pub mod api;

pub use api::ApiBackend;

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::error::{DeliveryError, SendError};

/// Endpoint used when `EMAILJS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// One template send, as it goes over the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    /// The public key
    pub user_id: String,
    pub template_params: Value,
    /// The private key, only when explicitly provided
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Provider acknowledgment of an accepted send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    pub status: u16,
    pub text: String,
}

/// Backend trait for the provider's send operation.
///
/// Implementations issue exactly one request per call and never retry.
pub trait SendBackend {
    fn send(&self, request: &SendRequest) -> Result<SendResponse, DeliveryError>;
}

impl<T: SendBackend + ?Sized> SendBackend for &T {
    fn send(&self, request: &SendRequest) -> Result<SendResponse, DeliveryError> {
        (**self).send(request)
    }
}

impl<T: SendBackend + ?Sized> SendBackend for Box<T> {
    fn send(&self, request: &SendRequest) -> Result<SendResponse, DeliveryError> {
        (**self).send(request)
    }
}

/// Settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_url: Option<String>,
    pub private_key: Option<String>,
}

impl BackendConfig {
    /// Read `EMAILJS_API_URL` and `EMAILJS_PRIVATE_KEY`. Empty values count as unset.
    pub fn from_env(envs: &[(String, String)]) -> Self {
        let lookup = |name: &str| {
            envs.iter()
                .find(|(k, v)| k == name && !v.is_empty())
                .map(|(_, v)| v.clone())
        };
        Self {
            api_url: lookup("EMAILJS_API_URL"),
            private_key: lookup("EMAILJS_PRIVATE_KEY"),
        }
    }
}

/// Create the REST API backend from configuration.
pub fn create_from_config(config: &BackendConfig) -> Result<Box<dyn SendBackend>, SendError> {
    let url = config.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
    info!("Using EmailJS REST API backend");
    debug!("API backend: url={}", url);
    Ok(Box::new(ApiBackend::new(url)?))
}
