use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use thiserror::Error;

use crate::model::profile::Profile;

/// Characters left untouched by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet, padded on encode, padding optional on decode.
const FRAGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("fragment is empty")]
    Empty,
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("malformed percent escape at byte {0}")]
    Percent(usize),
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("invalid profile json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("profile json must be an object")]
    NotAnObject,
}

pub fn uri_component_encode(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Strict like `decodeURIComponent`: every `%` must start a two hex digit
/// escape.
pub fn uri_component_decode(text: &str) -> Result<String, CodecError> {
    let bytes = text.as_bytes();
    for (idx, byte) in bytes.iter().enumerate() {
        if *byte != b'%' {
            continue;
        }
        let escape = bytes.get(idx + 1..idx + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(CodecError::Percent(idx));
        }
    }
    Ok(percent_decode_str(text).decode_utf8()?.into_owned())
}

/// Serialize a profile into the text stored under the storage key.
pub fn to_json(profile: &Profile) -> Result<String, CodecError> {
    Ok(serde_json::to_string(profile)?)
}

/// Parse stored profile text. Fields missing from the stored object are
/// taken from the built-in default profile.
pub fn from_json(text: &str) -> Result<Profile, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(fields) = value else {
        return Err(CodecError::NotAnObject);
    };
    let mut merged = serde_json::to_value(Profile::default())?;
    if let Value::Object(base) = &mut merged {
        base.extend(fields);
    }
    Ok(serde_json::from_value(merged)?)
}

/// Token carried in the URL fragment: base64(uri-encode(json)).
pub fn encode_fragment(profile: &Profile) -> Result<String, CodecError> {
    let json = to_json(profile)?;
    Ok(FRAGMENT_ENGINE.encode(uri_component_encode(&json)))
}

/// Inverse of [`encode_fragment`]. Accepts the token with or without the
/// leading `#`.
pub fn decode_fragment(fragment: &str) -> Result<Profile, CodecError> {
    let token = fragment.strip_prefix('#').unwrap_or(fragment).trim();
    if token.is_empty() {
        return Err(CodecError::Empty);
    }
    let bytes = FRAGMENT_ENGINE.decode(token)?;
    let encoded = std::str::from_utf8(&bytes)?;
    let json = uri_component_decode(encoded)?;
    from_json(&json)
}
