//! Success envelope wrapping single-entity and collection results.

use serde::{Deserialize, Serialize};

/// Message attached to successful reads.
pub const SUCCESSFUL_MESSAGE: &str = "Successful";
/// Message attached to successful creations.
pub const SUCCESSFULLY_CREATED: &str = "Successfully created";

/// Outcome status carried by a [`ResponseMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    Created,
}

/// Envelope of a constant message, an outcome status, and the payload.
///
/// # Examples
/// ```
/// use pmp_backend::domain::{ResponseMessage, ResponseStatus};
///
/// let envelope = ResponseMessage::created(42);
/// assert_eq!(envelope.status(), ResponseStatus::Created);
/// assert_eq!(envelope.message(), "Successfully created");
/// assert_eq!(envelope.into_payload(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage<T> {
    message: String,
    status: ResponseStatus,
    payload: T,
}

impl<T> ResponseMessage<T> {
    /// Wrap a successfully read payload.
    pub fn ok(payload: T) -> Self {
        Self {
            message: SUCCESSFUL_MESSAGE.to_owned(),
            status: ResponseStatus::Ok,
            payload,
        }
    }

    /// Wrap a freshly persisted payload.
    pub fn created(payload: T) -> Self {
        Self {
            message: SUCCESSFULLY_CREATED.to_owned(),
            status: ResponseStatus::Created,
            payload,
        }
    }

    /// Constant human-readable outcome message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Outcome status.
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Borrow the wrapped payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the envelope, returning the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}
