use thiserror::Error;

/// Exit code for a message the provider accepted
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for bad arguments, bad JSON or bad configuration. Nothing was sent.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for a send the provider rejected or that never reached it
pub const EXIT_DELIVERY: i32 = 2;

/// Failure of the outbound send call.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The provider answered with something other than an acceptance.
    #[error("provider rejected the send ({status}): {text}")]
    Rejected { status: u16, text: String },

    /// The request never produced a provider response.
    #[error("HTTP transport error: {0}")]
    Transport(String),
}

impl DeliveryError {
    /// The most descriptive detail available: the provider's response text
    /// if it sent one, otherwise the raw error.
    pub fn detail(&self) -> String {
        match self {
            DeliveryError::Rejected { text, .. } if !text.is_empty() => text.clone(),
            other => format!("{:?}", other),
        }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Invalid TEMPLATE_VARS_JSON: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Config(String),

    #[error("FAILED {}", DeliveryError::detail(.0))]
    Delivery(#[from] DeliveryError),
}

impl SendError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SendError::Usage(e) if !e.use_stderr() => EXIT_SUCCESS,
            SendError::Usage(_) | SendError::MalformedPayload(_) | SendError::Config(_) => {
                EXIT_USAGE
            }
            SendError::Delivery(_) => EXIT_DELIVERY,
        }
    }
}

impl From<serde_json::Error> for SendError {
    fn from(e: serde_json::Error) -> Self {
        SendError::MalformedPayload(e.to_string())
    }
}
