use thiserror::Error;

/// Rejected typewriter setup. Raised while building, never from a tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("phrase list is empty, nothing to type")]
    NoPhrases,

    #[error("all {count} phrases are empty strings")]
    AllPhrasesEmpty { count: usize },

    #[error("'{field}' must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("max_cycles = 0 would stop before the first phrase")]
    ZeroCycles,
}
