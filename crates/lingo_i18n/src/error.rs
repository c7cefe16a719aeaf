//! Locale detection error types

use thiserror::Error;

/// Reasons system locale detection can come up empty.
///
/// Never surfaced by [`get_system_language`](crate::get_system_language);
/// it resolves every variant to [`DEFAULT_LOCALE`](crate::DEFAULT_LOCALE).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// None of `LC_ALL`, `LC_MESSAGES`, `LANG` is set to a non-empty value
    #[error("no locale environment variable is set")]
    Unset,

    /// The locale is the POSIX default (`C` or `POSIX`)
    #[error("locale `{0}` is the POSIX default")]
    PosixDefault(String),

    /// Nothing was left after normalization
    #[error("locale `{0}` is empty after normalization")]
    Empty(String),

    /// An OS locale API call failed
    #[error("system locale query failed: {0}")]
    Api(String),

    /// The OS returned a name that is not valid Unicode
    #[error("system locale name is not valid UTF-16/UTF-8")]
    Encoding,

    /// No locale source exists for this target
    #[error("locale detection is not supported on this platform")]
    Unsupported,
}

/// Result type for locale detection
pub type Result<T> = std::result::Result<T, LocaleError>;
