//! Failure classes for a history fetch.

use thiserror::Error;

/// Why a history fetch did not produce a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The service answered with a non-2xx status and a `detail` body.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Every `detail[].msg`, one per line.
        message: String,
    },
    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),
    /// A response arrived but its body was not what the service promises.
    #[error("Parse error: {0}")]
    Decode(String),
}

impl HistoryError {
    /// Application-level failures are shown to the operator; transport-level
    /// ones only reach the developer log.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
