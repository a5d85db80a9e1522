use serde::Deserialize;
use serde::de::Error as DeError;

/// Text-like value the provider may return as a JSON string or any other token.
///
/// Strings are unescaped; numbers, booleans, arrays and objects keep their raw
/// JSON token so nothing the provider said is lost (`10001` stays `"10001"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportText(String);

impl TransportText {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(_) => Ok(Self(token.to_owned())),
            None => Err(D::Error::custom("expected a JSON value")),
        }
    }
}
