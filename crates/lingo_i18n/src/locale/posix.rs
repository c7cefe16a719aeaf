use tracing::debug;

use super::{LocaleTag, SystemLocale, DEFAULT_LOCALE};
use crate::error::{LocaleError, Result};

/// Environment variables consulted for the locale, highest priority first.
pub const POSIX_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Read-only environment access used by [`PosixLocale`].
///
/// Any `Fn(&str) -> Option<String>` works, which keeps tests away from the
/// real process environment.
pub trait LocaleEnv {
    /// Fetch the value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct ProcessEnv;

impl LocaleEnv for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> LocaleEnv for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Locale source reading the POSIX locale environment variables.
#[derive(Debug, Default, Clone)]
pub struct PosixLocale<E = ProcessEnv> {
    env: E,
}

impl<E: LocaleEnv> PosixLocale<E> {
    /// Read locale variables through `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: LocaleEnv> SystemLocale for PosixLocale<E> {
    fn detect_system_locale(&self) -> Result<LocaleTag> {
        let (key, raw) = POSIX_LOCALE_VARS
            .iter()
            .find_map(|&key| {
                self.env
                    .var(key)
                    .filter(|value| !value.is_empty())
                    .map(|value| (key, value))
            })
            .ok_or(LocaleError::Unset)?;

        debug!(var = key, value = %raw, "Read locale from environment");
        normalize_posix(&raw)
    }
}

fn is_posix_default(s: &str) -> bool {
    s == "C" || s == "POSIX"
}

/// Normalize a POSIX locale value (`zh_CN.UTF-8`, `en_US@euro`, `EN_us`)
/// to `ll-CC` form.
///
/// - `_` becomes `-`.
/// - Text before the first `-` is lowercased, everything after it uppercased.
/// - `.encoding` and `@modifier` suffixes are dropped.
/// - `C`, `POSIX` and empty values give [`DEFAULT_LOCALE`].
///
/// ```
/// use lingo_i18n::normalize_locale;
///
/// assert_eq!(normalize_locale("zh_CN.UTF-8"), "zh-CN");
/// assert_eq!(normalize_locale("EN_us"), "en-US");
/// assert_eq!(normalize_locale("POSIX"), "en-US");
/// ```
pub fn normalize_locale(raw: &str) -> LocaleTag {
    normalize_posix(raw).unwrap_or_else(|_| DEFAULT_LOCALE.to_string())
}

pub(crate) fn normalize_posix(raw: &str) -> Result<LocaleTag> {
    // Examples: "en_US.UTF-8", "ko_KR", "en-US", "C.UTF-8"
    let s = raw.trim();
    let s = s.split_once('.').map_or(s, |(part, _)| part);
    let s = s.split_once('@').map_or(s, |(part, _)| part);
    if is_posix_default(s) {
        return Err(LocaleError::PosixDefault(raw.to_string()));
    }
    if s.is_empty() {
        return Err(LocaleError::Empty(raw.to_string()));
    }

    let tag = s.replace('_', "-");
    match tag.find('-') {
        Some(dash) if dash + 1 < tag.len() => {
            let (lang, region) = tag.split_at(dash);
            Ok(format!(
                "{}{}",
                lang.to_ascii_lowercase(),
                region.to_ascii_uppercase()
            ))
        }
        _ => Ok(tag),
    }
}
