//! Wire-format DTOs shared by all routes.

use serde::{Deserialize, Serialize};

/// Uniform response envelope: `{success, message?, data?}`.
///
/// Reads carry only `data`, writes carry a verb-specific confirmation plus
/// the affected record, deletes carry only the confirmation. Absent fields
/// are omitted from the JSON, not serialized as null.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Envelope {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: &str, data: T) -> Self {
        Envelope {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message_only(message: &str) -> Self {
        Envelope {
            success: true,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

/// `PUT` request body: `{"data": {<partial fields>}}`.
#[derive(Deserialize, Debug)]
pub struct UpdateBody<P> {
    pub data: P,
}
