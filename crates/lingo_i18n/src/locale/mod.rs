//! System locale detection.
//!
//! Each target gets one [`SystemLocale`] implementation, picked at build
//! time through [`HostLocale`]:
//!
//! | Target | Source | Normalization |
//! |--------|--------|---------------|
//! | Windows | `GetUserDefaultLocaleName` | none, already `ll-CC` |
//! | macOS / iOS | `NSLocale.currentLocale.localeIdentifier` | `_` to `-`, script subtag dropped |
//! | Other unix | `LC_ALL`, `LC_MESSAGES`, `LANG` | see [`normalize_locale`] |
//! | Anything else | none | always [`DEFAULT_LOCALE`] |

mod apple;
mod posix;
mod win32;

use tracing::debug;

use crate::error::Result;

pub use apple::normalize_apple_identifier;
pub use posix::{normalize_locale, LocaleEnv, PosixLocale, ProcessEnv, POSIX_LOCALE_VARS};
pub use win32::wide_to_locale;

#[cfg(target_vendor = "apple")]
pub use apple::AppleLocale;
#[cfg(target_os = "windows")]
pub use win32::WindowsLocale;

/// A normalized `language-REGION` tag such as `en-US`.
pub type LocaleTag = String;

/// Returned whenever the system locale can't be determined.
pub const DEFAULT_LOCALE: &str = "en-US";

/// A source for the user's current locale.
pub trait SystemLocale {
    /// Query the locale, reporting why it could not be determined.
    fn detect_system_locale(&self) -> Result<LocaleTag>;

    /// Query the locale, degrading to [`DEFAULT_LOCALE`] on any failure.
    fn locale_or_default(&self) -> LocaleTag {
        match self.detect_system_locale() {
            Ok(tag) => tag,
            Err(err) => {
                debug!(
                    error = %err,
                    fallback = DEFAULT_LOCALE,
                    "System locale unavailable, using fallback"
                );
                DEFAULT_LOCALE.to_string()
            }
        }
    }
}

/// Locale source for targets with no known locale API.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnsupportedPlatform;

impl SystemLocale for UnsupportedPlatform {
    fn detect_system_locale(&self) -> Result<LocaleTag> {
        Err(crate::LocaleError::Unsupported)
    }
}

/// The [`SystemLocale`] implementation for the build target.
#[cfg(target_os = "windows")]
pub type HostLocale = WindowsLocale;

/// The [`SystemLocale`] implementation for the build target.
#[cfg(target_vendor = "apple")]
pub type HostLocale = AppleLocale;

/// The [`SystemLocale`] implementation for the build target.
#[cfg(all(unix, not(target_vendor = "apple")))]
pub type HostLocale = PosixLocale;

/// The [`SystemLocale`] implementation for the build target.
#[cfg(not(any(target_os = "windows", unix)))]
pub type HostLocale = UnsupportedPlatform;

/// Get the user's current locale as an `ll-CC` tag.
///
/// Never fails: returns [`DEFAULT_LOCALE`] when the OS gives nothing usable.
pub fn get_system_language() -> LocaleTag {
    HostLocale::default().locale_or_default()
}
