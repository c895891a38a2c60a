//! # Wire Types
//!
//! Request bodies, response views and the `/stars/` selector. Request fields
//! default to empty so a missing field is reported with its own message
//! instead of a generic deserialization failure.

use super::error::ApiError;
use serde::{Deserialize, Serialize};
use shared_types::{is_valid_address, Address};
use sl_01_chain_storage::{Block, BlockBody, Star};
use sl_02_request_mempool::VerifiedRequest;

/// Body of `POST /requestValidation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressRequest {
    #[serde(default)]
    pub address: String,
}

impl AddressRequest {
    pub fn validated(self) -> Result<Address, ApiError> {
        if !is_valid_address(&self.address) {
            return Err(ApiError::InvalidInput("address data is missing".into()));
        }
        Ok(self.address)
    }
}

/// Body of `POST /message-signature/validate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignatureValidationRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub signature: String,
}

impl SignatureValidationRequest {
    pub fn validated(self) -> Result<(Address, String), ApiError> {
        if !is_valid_address(&self.address) || self.signature.is_empty() {
            return Err(ApiError::InvalidInput(
                "address or signature data is missing".into(),
            ));
        }
        Ok((self.address, self.signature))
    }
}

/// Body of `POST /block`.
///
/// `star` stays untyped until validation so a non-object value gets its own
/// error message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterStarRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub star: Option<serde_json::Value>,
}

/// Star fields as submitted. `story` is plain text here.
///
/// Fields are taken as any JSON value so a numeric magnitude or declination
/// is accepted and kept as its text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StarSubmission {
    #[serde(default)]
    pub ra: Option<serde_json::Value>,
    #[serde(default)]
    pub dec: Option<serde_json::Value>,
    #[serde(default)]
    pub magnitude: Option<serde_json::Value>,
    #[serde(default)]
    pub constellation: Option<serde_json::Value>,
    #[serde(default)]
    pub story: Option<serde_json::Value>,
}

/// Text of a submitted field: strings as-is, other values as JSON, `null`
/// as absent.
fn field_text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl RegisterStarRequest {
    /// Checks required fields and returns the owner plus a star whose story is
    /// still plain text.
    pub fn validated(self) -> Result<(Address, Star), ApiError> {
        let star = match self.star {
            Some(star) if is_valid_address(&self.address) && !star.is_null() => star,
            _ => {
                return Err(ApiError::InvalidInput(
                    "request data is missing; check your request and try again".into(),
                ))
            }
        };

        let submission: StarSubmission = if star.is_object() {
            serde_json::from_value(star).map_err(|_| star_invalid())?
        } else {
            return Err(star_invalid());
        };

        let dec = required(field_text(submission.dec), "dec")?;
        let ra = required(field_text(submission.ra), "ra")?;
        let story = required(field_text(submission.story), "story")?;

        Ok((
            self.address,
            Star {
                ra,
                dec,
                magnitude: field_text(submission.magnitude),
                constellation: field_text(submission.constellation),
                story,
            },
        ))
    }
}

fn star_invalid() -> ApiError {
    ApiError::InvalidInput(
        "star data is missing or invalid; check your request and try again".into(),
    )
}

fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::InvalidInput(format!(
            "star {} property is missing; check your request and try again",
            name
        ))),
    }
}

/// Parsed `/stars/:selector` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarSelector {
    Hash(String),
    Address(Address),
}

impl StarSelector {
    pub fn parse(selector: &str) -> Result<Self, ApiError> {
        let (key, value) = selector
            .split_once(':')
            .ok_or_else(|| ApiError::InvalidInput(format!("invalid path: /stars/{}", selector)))?;

        match key {
            "hash" if value.is_empty() => Err(ApiError::InvalidInput("empty hash value".into())),
            "hash" => Ok(StarSelector::Hash(value.to_string())),
            "address" if value.is_empty() => {
                Err(ApiError::InvalidInput("empty address value".into()))
            }
            "address" => Ok(StarSelector::Address(value.to_string())),
            _ => Err(ApiError::InvalidInput(format!(
                "invalid path: /stars/{}",
                selector
            ))),
        }
    }
}

/// A block as returned by the API.
///
/// Text bodies serialize as a bare string and star bodies as
/// `{address, star}`, with `storyDecoded` added next to the stored hex story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    pub hash: String,
    pub height: u64,
    pub body: BodyView,
    pub time: u64,
    pub previous_block_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BodyView {
    Text(String),
    Star { address: Address, star: StarView },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarView {
    pub ra: String,
    pub dec: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
    pub story: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_decoded: Option<String>,
}

impl From<&Block> for BlockView {
    fn from(block: &Block) -> Self {
        let body = match &block.body {
            BlockBody::Text(text) => BodyView::Text(text.clone()),
            BlockBody::Star(record) => BodyView::Star {
                address: record.address.clone(),
                star: StarView {
                    ra: record.star.ra.clone(),
                    dec: record.star.dec.clone(),
                    magnitude: record.star.magnitude.clone(),
                    constellation: record.star.constellation.clone(),
                    story: record.star.story.clone(),
                    story_decoded: record.star.decoded_story(),
                },
            },
        };

        Self {
            hash: block.hash.clone(),
            height: block.height,
            body,
            time: block.time,
            previous_block_hash: block.previous_block_hash.clone(),
        }
    }
}

/// Response of `POST /message-signature/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureValidationResponse {
    pub register_star: bool,
    pub status: SignatureStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    pub address: Address,
    #[serde(rename = "requestTimeStamp")]
    pub request_timestamp: u64,
    pub message: String,
    pub validation_window: u64,
    pub message_signature: bool,
}

impl From<VerifiedRequest> for SignatureValidationResponse {
    fn from(verified: VerifiedRequest) -> Self {
        Self {
            register_star: true,
            status: SignatureStatus {
                address: verified.request.wallet_address,
                request_timestamp: verified.request.request_timestamp,
                message: verified.request.message,
                validation_window: verified.request.validation_window,
                message_signature: verified.message_signature,
            },
        }
    }
}
