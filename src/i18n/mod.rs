//! i18n - Internationalization Module
//!
//! Static locale dictionaries with dotted key lookup. A key that cannot be
//! resolved for a locale translates to the key itself.

mod dictionary;

pub use dictionary::*;

/// Translate a key for an explicit locale
pub fn t_with(locale: &str, key: &str) -> String {
    catalog().translate(locale, key)
}

/// Translate a key and substitute `{name}` placeholders
///
/// # Example
/// ```ignore
/// // With translation "results.count" = "{count} works"
/// t_format_with("en", "results.count", &[("count", "3")])
/// // Returns "3 works"
/// ```
pub fn t_format_with(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    catalog().format(locale, key, args)
}

/// Language codes with an embedded dictionary
pub fn available_locales() -> Vec<String> {
    catalog().codes().map(str::to_string).collect()
}

/// Whether a language code has an embedded dictionary
pub fn has_locale(code: &str) -> bool {
    catalog().has_locale(code)
}
