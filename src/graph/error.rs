use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for cave graph construction.
/// Every variant is a precondition failure: no partial graph is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Error when an edge record is not of the form `A-B`.
    #[error("Malformed edge '{record}': {reason}")]
    MalformedEdge { record: String, reason: String },

    /// Error when no cave named `start` exists after construction.
    #[error("Cave system has no 'start' cave")]
    MissingStart,

    /// Error when no cave named `end` exists after construction.
    #[error("Cave system has no 'end' cave")]
    MissingEnd,

    /// Error when two large caves share an edge, which allows endless walks.
    #[error("Large caves '{0}' and '{1}' are connected; path enumeration would never terminate")]
    AdjacentLargeCaves(String, String),
}
