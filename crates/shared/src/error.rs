//! Protocol encode/decode errors.

/// Failure to translate between wire text and protocol types.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Inbound text is not JSON, or a field is missing or has the wrong type
    #[error("Failed to decode server message: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode client message: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ProtocolError {
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
