use email_address::EmailAddress;
use log::{debug, trace};
use serde_json::Value;

use crate::error::SendError;

/// Template variable the recipient is written to by `--to`.
pub const RECIPIENT_PARAM: &str = "to_email";

/// Decode the template variables argument.
///
/// Any JSON document is accepted; whether the template can use it is left to
/// the provider.
pub fn decode_template_params(raw: &str) -> Result<Value, SendError> {
    trace!("Decoding {} byte(s) of template variables", raw.len());
    let params: Value = serde_json::from_str(raw)?;
    debug!("Template variables decoded as {}", kind(&params));
    Ok(params)
}

/// Set the recipient template variable, replacing any value already present.
pub fn with_recipient(mut params: Value, recipient: &EmailAddress) -> Result<Value, SendError> {
    if let Some(map) = params.as_object_mut() {
        let previous = map.insert(
            RECIPIENT_PARAM.to_string(),
            Value::String(recipient.as_str().to_string()),
        );
        if previous.is_some() {
            debug!("Replaced existing {} template variable", RECIPIENT_PARAM);
        }
        return Ok(params);
    }
    Err(SendError::MalformedPayload(format!(
        "--to requires a JSON object, got {}",
        kind(&params)
    )))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
