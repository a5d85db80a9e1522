//! Domain layer: strong types, number validation and batch planning (no I/O).

mod batch;
mod failure;
mod request;
mod response;
mod validation;
mod value;

pub use batch::{BatchPlan, plan_batch};
pub use failure::SendFailure;
pub use request::{DuplicatePolicy, SendRequest};
pub use response::{
    BatchError, BatchResult, EchoedRequest, MESSAGE_NOT_SENT, STATUS_NOT_SENT, SendOutcome,
};
pub use validation::ValidationError;
pub use value::{
    COUNTRY_CODE, Carrier, Credentials, KnownStatus, MSISDN_LEN, Msisdn, validate_msisdn,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_reference_cases() {
        assert_eq!(validate_msisdn("260971234567"), Ok(()));
        assert_eq!(
            validate_msisdn("26abc1234567").unwrap_err().to_string(),
            "Number provided is invalid."
        );
        assert_eq!(
            validate_msisdn("2609712345").unwrap_err().to_string(),
            "Number length is incorrect."
        );
        assert_eq!(
            validate_msisdn("123097123456").unwrap_err().to_string(),
            "Number does not begin with 26."
        );
        assert_eq!(
            validate_msisdn("260991234567").unwrap_err().to_string(),
            "Carrier not allowed."
        );
    }

    #[test]
    fn validator_is_pure() {
        for input in ["260971234567", "26abc1234567", "260991234567", ""] {
            assert_eq!(validate_msisdn(input), validate_msisdn(input));
        }
    }

    #[test]
    fn mixed_validity_batch_plan() {
        let entries = vec![
            SendRequest::new("26097123456x", "bad"),
            SendRequest::new("260971234567", "a"),
            SendRequest::new("260771234567", "b"),
        ];

        let plan = plan_batch(entries, DuplicatePolicy::default());
        assert_eq!(plan.rejected.len(), 1);
        assert_eq!(plan.rejected[0].recipient, "26097123456x");
        assert_eq!(plan.rejected[0].error, "Number provided is invalid.");
        assert_eq!(plan.dispatch.len(), 2);
        assert!(plan.duplicates.is_empty());
    }
}
