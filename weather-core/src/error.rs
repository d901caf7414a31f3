use reqwest::StatusCode;
use thiserror::Error;

/// Failure categories shown to the user. Each carries one fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("Please enter a city name")]
    InvalidInput,
    #[error("City not found")]
    NotFound,
    #[error("API configuration error")]
    AuthFailure,
    #[error("Unable to fetch weather data")]
    NetworkOrOther,
    #[error("No internet connection")]
    Offline,
}

/// Technical cause of a failed fetch. Logged, never shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather service has no match for the requested city")]
    NotFound,

    #[error("weather service rejected the API key")]
    Unauthorized,

    #[error("weather service responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to reach weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed weather response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::NotFound => ErrorKind::NotFound,
            FetchError::Unauthorized => ErrorKind::AuthFailure,
            FetchError::Status { .. } | FetchError::Transport(_) | FetchError::Parse(_) => {
                ErrorKind::NetworkOrOther
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed_per_kind() {
        assert_eq!(ErrorKind::InvalidInput.to_string(), "Please enter a city name");
        assert_eq!(ErrorKind::NotFound.to_string(), "City not found");
        assert_eq!(ErrorKind::AuthFailure.to_string(), "API configuration error");
        assert_eq!(ErrorKind::NetworkOrOther.to_string(), "Unable to fetch weather data");
        assert_eq!(ErrorKind::Offline.to_string(), "No internet connection");
    }

    #[test]
    fn fetch_errors_map_to_kinds() {
        assert_eq!(FetchError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(FetchError::Unauthorized.kind(), ErrorKind::AuthFailure);
        assert_eq!(
            FetchError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            }
            .kind(),
            ErrorKind::NetworkOrOther
        );
        assert_eq!(
            FetchError::Parse("missing field `main`".into()).kind(),
            ErrorKind::NetworkOrOther
        );
    }
}
