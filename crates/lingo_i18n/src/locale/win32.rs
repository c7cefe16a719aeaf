use super::LocaleTag;
use crate::error::{LocaleError, Result};

/// Locale source backed by `GetUserDefaultLocaleName`.
#[cfg(target_os = "windows")]
#[derive(Debug, Default, Copy, Clone)]
pub struct WindowsLocale;

#[cfg(target_os = "windows")]
impl super::SystemLocale for WindowsLocale {
    fn detect_system_locale(&self) -> Result<LocaleTag> {
        use ::windows::Win32::Globalization::GetUserDefaultLocaleName;

        // LOCALE_NAME_MAX_LENGTH
        let mut buffer = [0u16; 85];
        let written = unsafe { GetUserDefaultLocaleName(&mut buffer) };
        if written <= 0 {
            return Err(LocaleError::Api(format!(
                "GetUserDefaultLocaleName: {}",
                std::io::Error::last_os_error()
            )));
        }

        // `written` includes the terminating NUL.
        let len = (written as usize - 1).min(buffer.len());
        wide_to_locale(&buffer[..len])
    }
}

/// Convert a UTF-16 Windows locale name (`en-US`, `zh-CN`) to a tag.
///
/// Windows names are already `ll-CC`, so no other rewriting happens. A
/// trailing NUL, if present, ends the name.
pub fn wide_to_locale(wide: &[u16]) -> Result<LocaleTag> {
    let end = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    let name = String::from_utf16(&wide[..end]).map_err(|_| LocaleError::Encoding)?;
    if name.is_empty() {
        return Err(LocaleError::Empty(name));
    }
    Ok(name)
}
