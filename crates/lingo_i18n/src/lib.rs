//! Lingo internationalization (i18n)
//!
//! Two independent building blocks:
//! - `locale`: ask the OS for the user's locale as an `ll-CC` tag
//!   ([`get_system_language`]), never failing.
//! - `catalog`: [`TextCatalog`], a (language, id) -> text table that falls
//!   back to a default language and then to a fixed error text.
//!
//! Loading translation files is left to the caller; the catalog only
//! stores and looks up what it is given.

#[cfg(feature = "locale")]
mod error;
#[cfg(feature = "locale")]
mod locale;

#[cfg(feature = "catalog")]
mod catalog;

#[cfg(feature = "locale")]
pub use error::LocaleError;
#[cfg(feature = "locale")]
pub use locale::{
    get_system_language, normalize_apple_identifier, normalize_locale, wide_to_locale, HostLocale,
    LocaleEnv, LocaleTag, PosixLocale, ProcessEnv, SystemLocale, UnsupportedPlatform,
    DEFAULT_LOCALE, POSIX_LOCALE_VARS,
};

#[cfg(all(feature = "locale", target_vendor = "apple"))]
pub use locale::AppleLocale;
#[cfg(all(feature = "locale", target_os = "windows"))]
pub use locale::WindowsLocale;

#[cfg(feature = "catalog")]
pub use catalog::{LangTextMap, TextCatalog, TextMap, DEFAULT_ERROR_TEXT};
