//! Credential-per-call form of the client.
//!
//! Each call builds its own [`SavannacomClient`], so nothing is pooled between
//! calls. Prefer the handle when sending repeatedly with the same account.

use crate::client::SavannacomClient;
use crate::domain::{
    BatchError, BatchResult, Credentials, DuplicatePolicy, SendFailure, SendOutcome, SendRequest,
    plan_batch, validate_msisdn,
};

/// Send one SMS with explicit credentials. See [`SavannacomClient::send_sms`].
pub async fn send_sms(id: &str, username: &str, recipient: &str, message: &str) -> SendOutcome {
    let credentials = Credentials::new(id, username);
    match SavannacomClient::builder(credentials.clone()).build() {
        Ok(client) => client.send_sms(recipient, message).await,
        Err(err) => {
            let failure = match validate_msisdn(recipient) {
                Err(invalid) => SendFailure::Validation(invalid),
                Ok(()) => SendFailure::Client(err.to_string()),
            };
            SendOutcome::not_sent(&credentials, recipient, message, failure)
        }
    }
}

/// Send many SMS with explicit credentials. See [`SavannacomClient::send_bulk`].
pub async fn send_bulk(
    id: &str,
    username: &str,
    entries: Vec<SendRequest>,
    policy: DuplicatePolicy,
) -> BatchResult {
    let credentials = Credentials::new(id, username);
    match SavannacomClient::builder(credentials).build() {
        Ok(client) => client.send_bulk(entries, policy).await,
        Err(err) => {
            // Every entry that would have been dispatched fails the same way.
            let plan = plan_batch(entries, policy);
            let failure = SendFailure::Client(err.to_string()).to_string();
            let mut errors = plan.rejected;
            errors.extend(
                plan.dispatch
                    .into_iter()
                    .map(|entry| BatchError::new(entry.recipient, failure.clone())),
            );
            BatchResult::new(errors, plan.duplicates)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_sms_rejects_invalid_recipient_without_sending() {
        let outcome = send_sms("10001", "club", "260991234567", "hello").await;
        assert!(!outcome.is_success());
        assert_eq!(outcome.status, "Request not sent");
        assert_eq!(outcome.message.as_deref(), Some("Data not sent"));
        assert_eq!(outcome.error.as_deref(), Some("Carrier not allowed."));
        assert_eq!(outcome.data.sender_id, "10001");
        assert_eq!(outcome.data.sender_username, "club");
        assert_eq!(outcome.data.msisdn, "260991234567");
    }

    #[tokio::test]
    async fn send_bulk_empty_batch() {
        let result = send_bulk("10001", "club", Vec::new(), DuplicatePolicy::Skip).await;
        assert_eq!(
            result,
            BatchResult {
                errors: Some(vec![BatchError::new("N/A", "No data provided")]),
                duplicates: None,
            }
        );
    }

    #[tokio::test]
    async fn send_bulk_with_only_invalid_entries_sends_nothing() {
        let entries = vec![
            SendRequest::new("26abc1234567", "a"),
            SendRequest::new("123097123456", "b"),
        ];
        let result = send_bulk("10001", "club", entries, DuplicatePolicy::Keep).await;
        assert_eq!(
            result.errors,
            Some(vec![
                BatchError::new("26abc1234567", "Number provided is invalid."),
                BatchError::new("123097123456", "Number does not begin with 26."),
            ])
        );
        assert_eq!(result.duplicates, None);
    }
}
