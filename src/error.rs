use thiserror::Error;

/// Why a review collection attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionFailure {
    NoApiKey,
    InvalidCompanyName,
    NoReviewsFound,
    ProviderError,
}

impl std::fmt::Display for CollectionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionFailure::NoApiKey => write!(f, "no-api-key"),
            CollectionFailure::InvalidCompanyName => write!(f, "invalid-company-name"),
            CollectionFailure::NoReviewsFound => write!(f, "no-reviews-found"),
            CollectionFailure::ProviderError => write!(f, "provider-error"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Template selection failed: {message}")]
    TemplateSelection {
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },

    #[error("ICP build failed for template '{template_id}': {source}")]
    IcpBuild {
        template_id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Review collection failed ({reason}): {message}")]
    ReviewCollection {
        reason: CollectionFailure,
        message: String,
    },

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Could not generate profiles: {0}")]
    Generation(#[source] Box<Error>),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn collection(reason: CollectionFailure, message: impl Into<String>) -> Self {
        Error::ReviewCollection {
            reason,
            message: message.into(),
        }
    }

    pub fn selection(message: impl Into<String>) -> Self {
        Error::TemplateSelection {
            message: message.into(),
            source: None,
        }
    }

    /// Whether a review source call that failed with this error is worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::ReviewCollection { reason, .. } => matches!(
                reason,
                CollectionFailure::ProviderError | CollectionFailure::NoReviewsFound
            ),
            Error::Network(_) => true,
            _ => false,
        }
    }

    /// The error that started it all, looking through the pipeline-level wrapper.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Generation(inner) => inner.root_cause(),
            other => other,
        }
    }

    /// The deepest error in the chain, such as the network failure behind a failed build.
    pub fn innermost(&self) -> &Error {
        match self {
            Error::Generation(inner)
            | Error::IcpBuild { source: inner, .. }
            | Error::TemplateSelection {
                source: Some(inner),
                ..
            } => inner.innermost(),
            other => other,
        }
    }

    pub fn collection_failure(&self) -> Option<CollectionFailure> {
        match self.root_cause() {
            Error::ReviewCollection { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
