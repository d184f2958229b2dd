use crate::constants::{NETWORK_ERROR, WHEEL_OUT_OF_DATE_ERROR};

/// Failure reaching, or hearing back from, the outcome collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OutcomeError {
    /// No response, a non-JSON body, or a body of unknown shape.
    #[error("outcome request failed: {0}")]
    Request(String),
    /// Well-formed `{ "error": ... }` payload.
    #[error("{0}")]
    Declined(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WheelError {
    #[error("the wheel has no prize units")]
    EmptyWheel,
    #[error("prize {prize} is not on the wheel")]
    PrizeNotFound { prize: u64 },
    #[error("outcome request failed: {0}")]
    OutcomeRequest(String),
    #[error("{0}")]
    OutcomeDeclined(String),
    #[error("a spin is already in progress")]
    SpinInProgress,
    #[error("an animation run is already active")]
    AnimationInProgress,
}

impl From<OutcomeError> for WheelError {
    fn from(err: OutcomeError) -> Self {
        match err {
            OutcomeError::Request(reason) => WheelError::OutcomeRequest(reason),
            OutcomeError::Declined(message) => WheelError::OutcomeDeclined(message),
        }
    }
}

impl WheelError {
    /// Text shown to the viewer. Declined messages pass through untouched.
    pub fn user_message(&self) -> String {
        match self {
            WheelError::OutcomeDeclined(message) => message.clone(),
            WheelError::OutcomeRequest(_) => NETWORK_ERROR.to_string(),
            WheelError::PrizeNotFound { .. } => WHEEL_OUT_OF_DATE_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declined_message_is_verbatim() {
        let err: WheelError = OutcomeError::Declined("no prizes left".to_string()).into();
        assert_eq!(err, WheelError::OutcomeDeclined("no prizes left".to_string()));
        assert_eq!(err.user_message(), "no prizes left");
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let err: WheelError = OutcomeError::Request("connection reset".to_string()).into();
        assert_eq!(err.user_message(), NETWORK_ERROR);
        assert!(err.to_string().contains("connection reset"));
    }
}
