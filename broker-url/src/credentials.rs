//! Password container with automatic memory zeroing.
//!
//! Decoded passwords are moved into [`Password`] as soon as they leave the
//! parser, so they are cleared from memory when the owning
//! [`crate::ConnectionUrl`] is dropped and never show up in `Debug` output.

use std::fmt;

use zeroize::Zeroizing;

/// Marker printed in place of the password by `Debug`.
const REDACTED: &str = "****";

/// Decoded URL password that zeros its memory on drop.
///
/// # Example
///
/// ```rust
/// use broker_url::Password;
///
/// let password = Password::from("secret");
/// assert_eq!(password.expose(), "secret");
/// assert!(!format!("{password:?}").contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wraps a plain password.
    ///
    /// # Arguments
    /// * `password` - Decoded password, moved into a zeroizing container
    ///
    /// # Returns
    /// A `Password` whose memory is cleared on drop
    pub fn new(password: String) -> Self {
        Self(Zeroizing::new(password))
    }

    /// Returns the plain password.
    ///
    /// Only the composer and [`crate::parse_url`] should need this; anything
    /// that ends up in a log must go through the sanitizer instead.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the password is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&REDACTED).finish()
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self::new(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self::new(password.to_owned())
    }
}
