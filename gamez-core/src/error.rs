use thiserror::Error;

/// Errors raised while loading the embedded hub datasets.
#[derive(Debug, Error)]
pub enum HubDataError {
    #[error("JSON parsing error in {dataset}: {source}")]
    Json {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },
}

/// Intro or background media that could not be shown.
///
/// Never fatal: the owning component flips to its fallback and carries on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MediaFailure {
    #[error("media failed to load")]
    Load,
    #[error("playback was rejected: {0}")]
    Playback(String),
}

impl MediaFailure {
    /// Short inline notice shown to the visitor.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::Load => "Intro video unavailable, skipping ahead.",
            Self::Playback(_) => "Intro video could not start, skipping ahead.",
        }
    }
}
