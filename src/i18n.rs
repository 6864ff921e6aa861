//! Internationalization: a key→string lookup with embedded translation
//! files and a `t!("key")` macro.
//!
//! SmudgePad ships English and Simplified Chinese.  The active language
//! falls back to English per key, and can be switched at runtime.

use std::collections::HashMap;
use std::sync::Mutex;

static I18N: Mutex<Option<I18nState>> = Mutex::new(None);

struct I18nState {
    current_lang: String,
    /// lang_code → (key → translated string)
    translations: HashMap<String, HashMap<String, String>>,
}

/// Supported languages: (code, native name).
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("zh-CN", "中文(简体)")];

/// Load the embedded translation tables.  Call once at startup.
pub fn init() {
    let mut translations = HashMap::new();
    translations.insert(
        "en".to_string(),
        parse_translations(include_str!("../locales/en.txt")),
    );
    translations.insert(
        "zh-CN".to_string(),
        parse_translations(include_str!("../locales/zh-CN.txt")),
    );

    *I18N.lock().unwrap_or_else(|e| e.into_inner()) = Some(I18nState {
        current_lang: "en".to_string(),
        translations,
    });
}

/// Set the active language; unknown codes fall back to English.
pub fn set_language(code: &str) {
    if let Ok(mut guard) = I18N.lock()
        && let Some(ref mut state) = *guard
    {
        state.current_lang = if state.translations.contains_key(code) {
            code.to_string()
        } else {
            "en".to_string()
        };
    }
}

pub fn current_language() -> String {
    if let Ok(guard) = I18N.lock()
        && let Some(ref state) = *guard
    {
        return state.current_lang.clone();
    }
    "en".to_string()
}

/// Look up a key in the active language, falling back to English, falling
/// back to the key itself.
pub fn translate(key: &str) -> String {
    if let Ok(guard) = I18N.lock()
        && let Some(ref state) = *guard
    {
        if let Some(map) = state.translations.get(&state.current_lang)
            && let Some(val) = map.get(key)
        {
            return val.clone();
        }
        if state.current_lang != "en"
            && let Some(map) = state.translations.get("en")
            && let Some(val) = map.get(key)
        {
            return val.clone();
        }
    }
    key.to_string()
}

/// Best-matching supported language for the host environment ("en" when
/// nothing matches).
pub fn detect_system_language() -> String {
    for var in &["LANG", "LC_ALL", "LC_MESSAGES", "LANGUAGE"] {
        if let Ok(val) = std::env::var(var)
            && let Some(lang) = match_system_locale(&val)
        {
            return lang;
        }
    }
    "en".to_string()
}

/// Match a system locale string (e.g. "zh_CN.UTF-8", "en-US") against the
/// supported languages, by exact code first, then by primary subtag.
fn match_system_locale(locale: &str) -> Option<String> {
    let normalized = locale.to_lowercase().replace('_', "-");
    let lang_part = normalized.split(['.', '@']).next().unwrap_or(&normalized);

    for &(code, _) in LANGUAGES {
        if code.to_lowercase() == lang_part {
            return Some(code.to_string());
        }
    }
    let primary = lang_part.split('-').next().unwrap_or(lang_part);
    for &(code, _) in LANGUAGES {
        if code.split('-').next().unwrap_or(code).to_lowercase() == primary {
            return Some(code.to_string());
        }
    }
    None
}

/// Parse a `key=value`-per-line translation file.  `#` lines are comments,
/// empty lines are ignored.
fn parse_translations(data: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            map.insert(key.trim().to_string(), val.trim().to_string());
        }
    }
    map
}

/// Translation macro.  `t!("toolbar.clear")`, or with placeholders:
/// `t!("status.picked_rgb", r = 255, g = 0, b = 0)`.
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::translate($key)
    };
    ($key:expr, $($name:ident = $val:expr),+ $(,)?) => {{
        let mut s = $crate::i18n::translate($key);
        $(
            s = s.replace(concat!("{", stringify!($name), "}"), &format!("{}", $val));
        )+
        s
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_matching_handles_suffixes_and_case() {
        assert_eq!(match_system_locale("zh_CN.UTF-8"), Some("zh-CN".to_string()));
        assert_eq!(match_system_locale("en-US"), Some("en".to_string()));
        assert_eq!(match_system_locale("zh"), Some("zh-CN".to_string()));
        assert_eq!(match_system_locale("fr_FR"), None);
    }

    #[test]
    fn parser_skips_comments_and_blank_lines() {
        let map = parse_translations("# comment\n\nfoo.bar = Baz\nplain=x=y\n");
        assert_eq!(map.get("foo.bar").map(String::as_str), Some("Baz"));
        // Only the first '=' splits key from value.
        assert_eq!(map.get("plain").map(String::as_str), Some("x=y"));
    }
}
