use std::fmt;

#[derive(Debug)]
pub enum GraphError {
    /// A user-context operation was invoked on an adapter that was not
    /// constructed in an authorized-for-user state. Raised locally, before
    /// any network interaction.
    AuthorizationRequired(String),
    /// Error response returned by the Graph API itself.
    Api {
        error_type: String,
        code: Option<i64>,
        message: String,
    },
    /// Network or protocol failure below the API level.
    Transport(anyhow::Error),
    /// A payload that could not be decoded into the requested shape.
    Deserialization(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::AuthorizationRequired(msg) => {
                write!(f, "Authorization required: {}", msg)
            }
            GraphError::Api {
                error_type,
                code,
                message,
            } => match code {
                Some(code) => {
                    write!(f, "Graph API error {} (code {}): {}", error_type, code, message)
                }
                None => write!(f, "Graph API error {}: {}", error_type, message),
            },
            GraphError::Transport(err) => write!(f, "Transport error: {}", err),
            GraphError::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::Transport(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for GraphError {
    fn from(err: anyhow::Error) -> Self {
        GraphError::Transport(err)
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Deserialization(err.to_string())
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
