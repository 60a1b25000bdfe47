//! Scheme-specific handling of the URL remainder.

use serde::{Deserialize, Serialize};

/// Scheme whose host list is handed to the driver unparsed.
pub const MONGODB_SCHEME: &str = "mongodb";

/// How the part after `scheme://` is interpreted.
///
/// The variant is chosen from the scheme name alone; every place that
/// treats some schemes differently matches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlKind {
    /// `[user[:password]@]host[:port]/[path][?query]`, parsed with generic
    /// URL rules.
    Standard,
    /// Replica-set or sharded URI (`h1:27017,h2:27017/db`). The host list is
    /// opaque: `host` keeps the whole remainder and `port` is never set, so
    /// the driver resolves hosts and ports itself.
    MongoMultiHost,
}

impl UrlKind {
    /// Selects the variant for a scheme name.
    ///
    /// ```rust
    /// use broker_url::UrlKind;
    ///
    /// assert_eq!(UrlKind::for_scheme("mongodb"), UrlKind::MongoMultiHost);
    /// assert_eq!(UrlKind::for_scheme("amqp"), UrlKind::Standard);
    /// ```
    pub fn for_scheme(scheme: &str) -> Self {
        if scheme == MONGODB_SCHEME {
            Self::MongoMultiHost
        } else {
            Self::Standard
        }
    }

    /// True when `host` carries the full remainder instead of a hostname.
    pub const fn passes_host_through(self) -> bool {
        matches!(self, Self::MongoMultiHost)
    }
}

/// Splits `authority[/path][?query][#fragment]` at the end of the authority,
/// which is the first `/`, `?` or `#`.
pub(crate) fn split_authority(remainder: &str) -> (&str, &str) {
    let authority_end = remainder.find(['/', '?', '#']).unwrap_or(remainder.len());
    remainder.split_at(authority_end)
}

/// Splits what follows the authority into path and query, dropping any
/// fragment. The path is returned as written, dot segments included.
pub(crate) fn split_path_query(after_authority: &str) -> (&str, Option<&str>) {
    let without_fragment = after_authority
        .split_once('#')
        .map_or(after_authority, |(before, _)| before);

    match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    }
}

/// Splits the userinfo off an opaque `[userinfo@]authority[/path][?query]`
/// remainder.
///
/// Inside the authority the last `@` separates userinfo from the host list,
/// so an unencoded `@` in a password stays with the userinfo.
pub(crate) fn split_userinfo(remainder: &str) -> (Option<&str>, &str) {
    let (authority, _) = split_authority(remainder);

    match authority.rfind('@') {
        Some(at) => {
            let (userinfo, rest) = remainder.split_at(at);
            (Some(userinfo), rest.strip_prefix('@').unwrap_or(rest))
        }
        None => (None, remainder),
    }
}
