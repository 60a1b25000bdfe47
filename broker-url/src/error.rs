//! Error types for URL decomposition.
//!
//! Broker URLs routinely carry passwords, so no error in this module ever
//! embeds the input string. Callers that need to point at the offending
//! value should log it through [`crate::maybe_sanitize_url`] first.

use thiserror::Error;

/// Main error type for broker URL operations.
///
/// # Security
/// Error messages describe what was wrong with the URL, never the URL itself.
#[derive(Debug, Error)]
pub enum UrlError {
    /// The input has no `scheme://` prefix
    #[error("URL has no scheme: expected the form 'scheme://...'")]
    MissingScheme,

    /// The generic URL parser rejected the authority (bad port, forbidden host
    /// characters, credentials without a host)
    #[error("Malformed URL: {context}")]
    Parse {
        /// What failed, naming the scheme but never the URL
        context: String,
        /// Underlying `url` crate error
        #[source]
        source: url::ParseError,
    },
}

/// Convenience type alias for Results with UrlError
pub type Result<T> = std::result::Result<T, UrlError>;

impl UrlError {
    /// Wraps a `url` crate parse failure for the given scheme.
    ///
    /// Only the scheme is recorded; everything after `://` may contain
    /// credentials.
    pub fn parse_failed(scheme: &str, source: url::ParseError) -> Self {
        Self::Parse {
            context: format!("cannot parse '{scheme}' URL remainder: {source}"),
            source,
        }
    }
}
