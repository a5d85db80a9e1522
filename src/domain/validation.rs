use std::fmt;

/// Reason a recipient number was rejected before any network call.
///
/// `Display` yields the exact error text reported back to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotDigits { input: String },
    WrongLength { input: String, actual: usize },
    WrongCountryCode { input: String },
    CarrierNotAllowed { input: String, prefix: String },
}

impl ValidationError {
    /// The recipient string that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::NotDigits { input }
            | Self::WrongLength { input, .. }
            | Self::WrongCountryCode { input }
            | Self::CarrierNotAllowed { input, .. } => input,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDigits { .. } => f.write_str("Number provided is invalid."),
            Self::WrongLength { .. } => f.write_str("Number length is incorrect."),
            Self::WrongCountryCode { .. } => f.write_str("Number does not begin with 26."),
            Self::CarrierNotAllowed { .. } => f.write_str("Carrier not allowed."),
        }
    }
}

impl std::error::Error for ValidationError {}
