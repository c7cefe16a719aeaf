use super::{LocaleTag, DEFAULT_LOCALE};
use crate::error::{LocaleError, Result};

#[cfg(target_vendor = "apple")]
use objc2::rc::Retained;
#[cfg(target_vendor = "apple")]
use objc2_foundation::{NSLocale, NSString};

/// Locale source backed by Foundation's current `NSLocale`.
#[cfg(target_vendor = "apple")]
#[derive(Debug, Default, Copy, Clone)]
pub struct AppleLocale;

#[cfg(target_vendor = "apple")]
impl super::SystemLocale for AppleLocale {
    fn detect_system_locale(&self) -> Result<LocaleTag> {
        let identifier: Retained<NSString> =
            unsafe { NSLocale::currentLocale().localeIdentifier() };
        apple_tag(&identifier.to_string())
    }
}

/// Collapse a Foundation locale identifier to `language-region`.
///
/// `zh_Hans_CN` and `zh-Hans-CN` both become `zh-CN`; `en_US@rg=gbzzzz`
/// becomes `en-US`. Unusable identifiers give [`DEFAULT_LOCALE`].
pub fn normalize_apple_identifier(raw: &str) -> LocaleTag {
    apple_tag(raw).unwrap_or_else(|_| DEFAULT_LOCALE.to_string())
}

fn is_script_subtag(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic())
}

pub(crate) fn apple_tag(raw: &str) -> Result<LocaleTag> {
    let id = raw.trim();
    let id = id.split_once('@').map_or(id, |(base, _)| base);
    let id = id.replace('_', "-");

    let parts: Vec<&str> = id.split('-').filter(|p| !p.is_empty()).collect();
    match parts.as_slice() {
        [] => Err(LocaleError::Empty(raw.to_string())),
        [lang] => Ok(lang.to_string()),
        [lang, script, region, ..] if is_script_subtag(script) => Ok(format!("{lang}-{region}")),
        [lang, region, ..] => Ok(format!("{lang}-{region}")),
    }
}
