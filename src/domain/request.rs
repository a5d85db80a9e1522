use serde::{Deserialize, Serialize};

/// One recipient/message pair of a bulk send.
///
/// The recipient is kept as provided; it is validated when the batch is planned
/// so that invalid entries can be reported instead of rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(rename = "number")]
    pub recipient: String,
    #[serde(rename = "content")]
    pub message: String,
}

impl SendRequest {
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
        }
    }
}

/// Whether repeated recipients in a bulk send are dispatched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Send only the first entry per recipient; later ones are reported as duplicates.
    #[default]
    Skip,
    /// Send every valid entry; repeated recipients are still reported as duplicates.
    Keep,
}

impl DuplicatePolicy {
    pub fn from_keep_duplicates(keep_duplicates: bool) -> Self {
        if keep_duplicates { Self::Keep } else { Self::Skip }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_uses_number_and_content_on_the_wire() {
        let req = SendRequest::new("260971234567", "hi");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "number": "260971234567", "content": "hi" })
        );
    }

    #[test]
    fn duplicate_policy_defaults_to_skip() {
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Skip);
        assert_eq!(
            DuplicatePolicy::from_keep_duplicates(true),
            DuplicatePolicy::Keep
        );
        assert_eq!(
            DuplicatePolicy::from_keep_duplicates(false),
            DuplicatePolicy::Skip
        );
    }
}
