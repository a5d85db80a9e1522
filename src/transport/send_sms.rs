use serde::{Deserialize, Serialize};

use super::text::TransportText;
use crate::domain::{Credentials, EchoedRequest, SendOutcome};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SendSmsJsonRequest<'a> {
    sender_username: &'a str,
    sender_id: &'a str,
    sender_message: &'a str,
    msisdn: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendSmsJsonResponse {
    status: TransportText,
    #[serde(default)]
    message: Option<TransportText>,
    #[serde(default)]
    data: Option<EchoJson>,
    #[serde(default)]
    error: Option<TransportText>,
}

#[derive(Debug, Default, Deserialize)]
struct EchoJson {
    #[serde(default)]
    sender_username: Option<TransportText>,
    #[serde(default)]
    sender_id: Option<TransportText>,
    #[serde(default)]
    sender_message: Option<TransportText>,
    #[serde(default)]
    msisdn: Option<TransportText>,
}

/// Encode the `text/plain` request body: a JSON object with the four sender fields.
pub fn encode_send_sms_body(
    credentials: &Credentials,
    recipient: &str,
    message: &str,
) -> Result<String, TransportError> {
    let body = SendSmsJsonRequest {
        sender_username: credentials.username(),
        sender_id: credentials.id(),
        sender_message: message,
        msisdn: recipient,
    };
    Ok(serde_json::to_string(&body)?)
}

/// Decode a provider response.
///
/// Echo fields the provider left out are filled from the request so the outcome
/// always identifies what was sent.
pub fn decode_send_sms_json_response(
    credentials: &Credentials,
    recipient: &str,
    message: &str,
    json: &str,
) -> Result<SendOutcome, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    let echo = parsed.data.unwrap_or_default();
    let fallback = EchoedRequest::new(credentials, recipient, message);

    Ok(SendOutcome {
        status: parsed.status.into_string(),
        message: parsed.message.map(TransportText::into_string),
        data: EchoedRequest {
            sender_username: or_fallback(echo.sender_username, fallback.sender_username),
            sender_id: or_fallback(echo.sender_id, fallback.sender_id),
            sender_message: or_fallback(echo.sender_message, fallback.sender_message),
            msisdn: or_fallback(echo.msisdn, fallback.msisdn),
        },
        error: parsed.error.map(TransportText::into_string),
        failure: None,
    })
}

fn or_fallback(value: Option<TransportText>, fallback: String) -> String {
    value.map(TransportText::into_string).unwrap_or(fallback)
}
