use thiserror::Error;

/// The only failure text the view ever shows, whatever went wrong underneath.
pub const FETCH_FAILURE_MESSAGE: &str = "There was an error fetching the repositories.";

/// Why a popular-repositories fetch failed. Kept for logging; the UI collapses
/// every variant into [`FETCH_FAILURE_MESSAGE`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("search api answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed search payload: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }

    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_shows_the_same_message() {
        let errors = [
            FetchError::Transport("offline".to_string()),
            FetchError::Status {
                status: 403,
                message: "API rate limit exceeded".to_string(),
            },
            FetchError::Decode("missing items".to_string()),
        ];

        for error in &errors {
            assert_eq!(error.user_message(), FETCH_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn status_display_keeps_api_message() {
        let error = FetchError::Status {
            status: 422,
            message: "Validation Failed".to_string(),
        };
        assert_eq!(error.to_string(), "search api answered 422: Validation Failed");
        assert_eq!(error.class(), "status");
    }
}
