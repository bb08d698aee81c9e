//! Opaque continuation tokens
//!
//! A token is either empty (start from the beginning), the [`END_OF_DATA`] sentinel, or the
//! url-safe base64 encoding of a small JSON object holding the identifier of the last folder
//! returned, `{"lastId":"<uuid>"}`. Callers must treat it as opaque.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Token returned once the listing is exhausted
pub const END_OF_DATA: &str = "END_OF_DATA";

/// Errors while decoding a continuation token
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not valid url-safe base64")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is malformed")]
    Payload(#[from] serde_json::Error),
}

#[derive(serde::Deserialize)]
struct TokenPayload {
    #[serde(rename = "lastId")]
    last_id: Uuid,
}

/// The decoded form of a continuation token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// No token, the listing starts with the first folder
    #[default]
    Start,
    /// Resume right after the folder with this identifier
    After(Uuid),
    /// Nothing left to list
    EndOfData,
}

impl Cursor {
    /// Decodes a wire token
    ///
    /// ```
    /// use folders::token::Cursor;
    ///
    /// assert_eq!(Cursor::decode("").unwrap(), Cursor::Start);
    /// assert_eq!(Cursor::decode("END_OF_DATA").unwrap(), Cursor::EndOfData);
    /// assert!(Cursor::decode("invalidToken").is_err());
    /// ```
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        match token {
            "" => Ok(Self::Start),
            END_OF_DATA => Ok(Self::EndOfData),
            other => {
                let bytes = URL_SAFE.decode(other)?;
                let payload: TokenPayload = serde_json::from_slice(&bytes)?;
                Ok(Self::After(payload.last_id))
            }
        }
    }

    /// Encodes the cursor into its wire token
    pub fn encode(&self) -> String {
        match self {
            Self::Start => String::new(),
            Self::After(last_id) => encode(*last_id),
            Self::EndOfData => END_OF_DATA.to_string(),
        }
    }

    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Self::EndOfData)
    }

    pub fn last_id(&self) -> Option<Uuid> {
        match self {
            Self::After(value) => Some(*value),
            _ => None,
        }
    }
}

/// Builds the resumable token pointing right after `last_id`
pub fn encode(last_id: Uuid) -> String {
    let payload = serde_json::json!({ "lastId": last_id });
    URL_SAFE.encode(payload.to_string())
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Cursor {
    type Err = TokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::decode(value)
    }
}

impl From<Uuid> for Cursor {
    fn from(value: Uuid) -> Self {
        Self::After(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{encode, Cursor, TokenError, END_OF_DATA};
    use base64::engine::general_purpose::URL_SAFE;
    use base64::Engine;
    use uuid::Uuid;

    #[test]
    fn should_round_trip() {
        for _ in 0..32 {
            let id = Uuid::new_v4();
            assert_eq!(Cursor::decode(&encode(id)).unwrap(), Cursor::After(id));
        }
        assert_eq!(
            Cursor::decode(&encode(Uuid::nil())).unwrap(),
            Cursor::After(Uuid::nil())
        );
    }

    #[test]
    fn should_wrap_last_id_in_json() {
        let id = crate::tests::FOLDER_A;
        let raw = URL_SAFE.decode(encode(id)).unwrap();
        assert_eq!(
            String::from_utf8(raw).unwrap(),
            format!(r#"{{"lastId":"{id}"}}"#)
        );
    }

    #[test]
    fn should_be_url_safe() {
        for _ in 0..32 {
            let token = encode(Uuid::new_v4());
            assert!(token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=')));
            assert!(token.starts_with("eyJ"));
            assert_ne!(token, END_OF_DATA);
        }
    }

    #[test]
    fn should_decode_special_values() {
        assert_eq!(Cursor::decode("").unwrap(), Cursor::Start);
        assert_eq!(Cursor::decode(END_OF_DATA).unwrap(), Cursor::EndOfData);
        assert_eq!(Cursor::Start.to_string(), "");
        assert_eq!(Cursor::EndOfData.to_string(), END_OF_DATA);
    }

    #[test]
    fn should_reject_invalid_base64() {
        let err = Cursor::decode("invalidToken!").unwrap_err();
        assert!(matches!(err, TokenError::Base64(_)));
    }

    #[test]
    fn should_reject_malformed_payload() {
        // valid base64, not json
        let err = Cursor::decode(&URL_SAFE.encode("hello world")).unwrap_err();
        assert!(matches!(err, TokenError::Payload(_)));
        // json without the expected key
        let err = Cursor::decode(&URL_SAFE.encode(r#"{"id":"nope"}"#)).unwrap_err();
        assert!(matches!(err, TokenError::Payload(_)));
        // key present, not a uuid
        let err = Cursor::decode(&URL_SAFE.encode(r#"{"lastId":"abc"}"#)).unwrap_err();
        assert!(matches!(err, TokenError::Payload(_)));
    }

    #[test]
    fn should_parse_from_str() {
        let id = Uuid::new_v4();
        let cursor: Cursor = encode(id).parse().unwrap();
        assert_eq!(cursor.last_id(), Some(id));
        assert!(!cursor.is_end_of_data());
        assert_eq!(Cursor::from(id).to_string(), encode(id));
    }
}
