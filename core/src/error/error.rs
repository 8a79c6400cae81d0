use thiserror::Error;

/// Local input check failures. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The sanitized input is not JSON. Holds the parser message for logs.
    #[error("Invalid JSON format")]
    InvalidFormat(String),
    #[error("Invalid input: 'data' must be an array.")]
    InvalidShape,
}

impl ValidationError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidFormat(detail) => Some(detail.as_str()),
            ValidationError::InvalidShape => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Request,
    Body,
    Unknown,
}

impl TransportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Body => "body",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Non-2xx reply. `message` is the service's own `message` field, when it sent one.
    #[error("service returned status {status}: {body_preview}")]
    Status {
        status: u16,
        message: Option<String>,
        body_preview: String,
    },
    #[error("transport error kind={kind}: {message}")]
    Transport { kind: TransportKind, message: String },
    #[error("{message} (status {status})")]
    Decode { status: u16, message: String },
}

impl ServiceError {
    /// Service-provided message first, transport-level message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Status {
                status, message, ..
            } => match message {
                Some(m) => m.clone(),
                None => format!("Request failed with status code {}", status),
            },
            ServiceError::Transport { message, .. } => message.clone(),
            ServiceError::Decode { message, .. } => message.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("API error: {}", .0.user_message())]
    Service(#[from] ServiceError),
    #[error("config error: {0}")]
    Config(String),
    #[error("command failed: {0}")]
    Command(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
