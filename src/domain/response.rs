use serde::{Deserialize, Serialize};

use crate::domain::failure::SendFailure;
use crate::domain::request::SendRequest;
use crate::domain::value::{Credentials, KnownStatus};

/// Status text used for sends that never reached (or never came back from) the provider.
pub const STATUS_NOT_SENT: &str = "Request not sent";
/// Detail text paired with [`STATUS_NOT_SENT`].
pub const MESSAGE_NOT_SENT: &str = "Data not sent";

/// Request fields mirrored back in a [`SendOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoedRequest {
    pub sender_username: String,
    pub sender_id: String,
    pub sender_message: String,
    pub msisdn: String,
}

impl EchoedRequest {
    pub fn new(credentials: &Credentials, recipient: &str, message: &str) -> Self {
        Self {
            sender_username: credentials.username().to_owned(),
            sender_id: credentials.id().to_owned(),
            sender_message: message.to_owned(),
            msisdn: recipient.to_owned(),
        }
    }
}

/// Result of one send attempt.
///
/// Either the provider response as decoded, or an outcome synthesized locally
/// when validation or the HTTP exchange failed (see [`SendOutcome::failure`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    /// Provider status text, e.g. `successful` or `user not valid`.
    pub status: String,
    /// Provider detail text, e.g. `Data received successfully`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: EchoedRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Typed cause for outcomes synthesized locally.
    #[serde(skip)]
    pub failure: Option<SendFailure>,
}

impl SendOutcome {
    /// Outcome for a send that was not delivered to the provider.
    pub fn not_sent(
        credentials: &Credentials,
        recipient: &str,
        message: &str,
        failure: SendFailure,
    ) -> Self {
        Self {
            status: STATUS_NOT_SENT.to_owned(),
            message: Some(MESSAGE_NOT_SENT.to_owned()),
            data: EchoedRequest::new(credentials, recipient, message),
            error: Some(failure.to_string()),
            failure: Some(failure),
        }
    }

    /// `true` iff the status is `successful` (case-insensitive).
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case(KnownStatus::Successful.as_str())
    }

    pub fn known_status(&self) -> Option<KnownStatus> {
        KnownStatus::from_text(&self.status)
    }

    /// Text reported for a failed send: the error if present, else the status.
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.status)
    }
}

/// Per-recipient failure in a bulk send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    #[serde(rename = "number")]
    pub recipient: String,
    pub error: String,
}

impl BatchError {
    /// Recipient placeholder used when the batch itself is empty.
    pub const NO_RECIPIENT: &'static str = "N/A";
    pub const NO_DATA: &'static str = "No data provided";

    pub fn new(recipient: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            error: error.into(),
        }
    }

    pub(crate) fn no_data() -> Self {
        Self::new(Self::NO_RECIPIENT, Self::NO_DATA)
    }
}

/// Aggregated report of a bulk send.
///
/// Invariant: each field is `None` rather than an empty list when there is nothing to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<BatchError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<Vec<SendRequest>>,
}

impl BatchResult {
    pub fn new(errors: Vec<BatchError>, duplicates: Vec<SendRequest>) -> Self {
        Self {
            errors: non_empty(errors),
            duplicates: non_empty(duplicates),
        }
    }

    /// `true` when no entry failed (duplicates are not failures).
    pub fn is_clean(&self) -> bool {
        self.errors.is_none()
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
