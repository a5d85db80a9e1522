use crate::domain::validation::ValidationError;

/// Number of characters in a valid MSISDN (`26` + carrier prefix + subscriber).
pub const MSISDN_LEN: usize = 12;

/// Country code every accepted MSISDN must start with.
pub const COUNTRY_CODE: &str = "26";

/// Check a recipient number against the national numbering plan.
///
/// Rules are checked in order and the first failure wins:
/// 1. digits only,
/// 2. exactly [`MSISDN_LEN`] characters,
/// 3. begins with [`COUNTRY_CODE`],
/// 4. the next three digits are an allowed [`Carrier`] prefix.
///
/// No trimming or normalization is performed.
pub fn validate_msisdn(recipient: &str) -> Result<(), ValidationError> {
    check_msisdn(recipient).map(|_| ())
}

fn check_msisdn(recipient: &str) -> Result<Carrier, ValidationError> {
    if recipient.is_empty() || !recipient.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotDigits {
            input: recipient.to_owned(),
        });
    }

    // All bytes are ASCII digits from here on, so byte offsets are char offsets.
    if recipient.len() != MSISDN_LEN {
        return Err(ValidationError::WrongLength {
            input: recipient.to_owned(),
            actual: recipient.len(),
        });
    }

    if !recipient.starts_with(COUNTRY_CODE) {
        return Err(ValidationError::WrongCountryCode {
            input: recipient.to_owned(),
        });
    }

    let prefix = &recipient[2..5];
    Carrier::from_prefix(prefix).ok_or_else(|| ValidationError::CarrierNotAllowed {
        input: recipient.to_owned(),
        prefix: prefix.to_owned(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account credentials issued by Savannacom.
///
/// Both values are opaque and passed through unchanged; the provider is the
/// authority on whether they are valid (it answers `user not valid`).
pub struct Credentials {
    id: String,
    username: String,
}

impl Credentials {
    /// JSON field name used by Savannacom for the id (`sender_id`).
    pub const ID_FIELD: &'static str = "sender_id";
    /// JSON field name used by Savannacom for the username (`sender_username`).
    pub const USERNAME_FIELD: &'static str = "sender_username";

    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }

    /// Sender id, e.g. `10001`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sender username, e.g. `Local_council`.
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient number that passed [`validate_msisdn`].
///
/// Invariant: 12 ASCII digits, starting with `26` followed by an allowed carrier prefix.
pub struct Msisdn {
    number: String,
    carrier: Carrier,
}

impl Msisdn {
    /// JSON field name used by Savannacom (`msisdn`).
    pub const FIELD: &'static str = "msisdn";

    /// Create a validated [`Msisdn`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let number = value.into();
        let carrier = check_msisdn(&number)?;
        Ok(Self { number, carrier })
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// Network the number belongs to.
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }
}

impl AsRef<str> for Msisdn {
    fn as_ref(&self) -> &str {
        &self.number
    }
}

impl std::str::FromStr for Msisdn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
/// Mobile networks whose prefixes are accepted.
pub enum Carrier {
    /// Prefixes `097` and `077`.
    Airtel,
    /// Prefixes `096` and `076`.
    Mtn,
    /// Prefixes `095` and `075`.
    Zamtel,
}

impl Carrier {
    /// Every accepted three-digit prefix.
    pub const ALLOWED_PREFIXES: [&'static str; 6] = ["097", "077", "096", "076", "095", "075"];

    /// Map a three-digit prefix to its carrier, if the prefix is allowed.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Some(match prefix {
            "097" | "077" => Self::Airtel,
            "096" | "076" => Self::Mtn,
            "095" | "075" => Self::Zamtel,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Status texts documented by Savannacom.
///
/// Unknown texts are preserved verbatim in [`crate::SendOutcome::status`].
pub enum KnownStatus {
    Successful,
    UserNotValid,
    MobileNumberMustBe10Digits,
    OnlyDigitsAllowed,
    RequestNotSent,
}

impl KnownStatus {
    /// Map a raw status text to a known variant.
    ///
    /// `successful` is matched case-insensitively; the rest must match exactly.
    pub fn from_text(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("successful") {
            return Some(Self::Successful);
        }
        Some(match text {
            "user not valid" => Self::UserNotValid,
            "Mobile number must be 10 digits" => Self::MobileNumberMustBe10Digits,
            "Only digits allowed for mobile number allowed" => Self::OnlyDigitsAllowed,
            "Request not sent" => Self::RequestNotSent,
            _ => return None,
        })
    }

    /// Status text as the provider spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::UserNotValid => "user not valid",
            Self::MobileNumberMustBe10Digits => "Mobile number must be 10 digits",
            Self::OnlyDigitsAllowed => "Only digits allowed for mobile number allowed",
            Self::RequestNotSent => "Request not sent",
        }
    }

    /// Whether the status reports a rejected or invalid account.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::UserNotValid)
    }
}
