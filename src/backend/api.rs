use log::{debug, info, trace};
use url::Url;

use super::{SendBackend, SendRequest, SendResponse};
use crate::error::{DeliveryError, SendError};

/// Status text the provider returns for an accepted send.
const ACCEPTED_TEXT: &str = "OK";

#[derive(Debug)]
pub struct ApiBackend {
    url: Url,
}

impl ApiBackend {
    pub fn new(url: &str) -> Result<Self, SendError> {
        let parsed = Url::parse(url).map_err(|e| {
            SendError::Config(format!("Failed to parse API URL '{}': {}", url, e))
        })?;
        Ok(Self { url: parsed })
    }
}

impl SendBackend for ApiBackend {
    fn send(&self, request: &SendRequest) -> Result<SendResponse, DeliveryError> {
        info!(
            "API backend: sending template {} via service {}",
            request.template_id, request.service_id
        );
        trace!("API backend: template_params={}", request.template_params);

        let response = ureq::post(self.url.as_str())
            .set("Content-Type", "application/json")
            .send_json(request);

        let (status, text) = match response {
            Ok(resp) => {
                let status = resp.status();
                let text = resp
                    .into_string()
                    .map_err(|e| DeliveryError::Transport(e.to_string()))?;
                (status, text)
            }
            Err(ureq::Error::Status(code, resp)) => {
                (code, resp.into_string().unwrap_or_default())
            }
            Err(ureq::Error::Transport(e)) => {
                debug!("API backend: transport error for {}: {}", self.url, e);
                return Err(DeliveryError::Transport(e.to_string()));
            }
        };

        debug!("API backend: status={} text={:?}", status, text);

        if status == 200 || text == ACCEPTED_TEXT {
            info!("API backend: message accepted for delivery");
            Ok(SendResponse { status, text })
        } else {
            Err(DeliveryError::Rejected { status, text })
        }
    }
}
