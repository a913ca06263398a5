//! Embedded assets for the Repo Saga client
//!
//! Uses rust-embed to bundle the locale dictionaries at compile time.

use rust_embed::RustEmbed;

/// Locale dictionaries from the `locales` directory, one `<code>.toml` per language
#[derive(RustEmbed)]
#[folder = "locales"]
pub struct LocaleAssets;

const LOCALE_EXTENSION: &str = ".toml";

impl LocaleAssets {
    /// Iterate embedded dictionaries as `(language code, source text)`
    ///
    /// Files that are not `.toml` or not valid UTF-8 are skipped.
    pub fn sources() -> impl Iterator<Item = (String, String)> {
        Self::iter().filter_map(|path| {
            let code = path.strip_suffix(LOCALE_EXTENSION)?.to_string();
            let file = Self::get(&path)?;
            match std::str::from_utf8(&file.data) {
                Ok(text) => Some((code, text.to_string())),
                Err(e) => {
                    tracing::error!(error = %e, path = %path, "Locale file is not UTF-8");
                    None
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_both_dictionaries() {
        let mut codes: Vec<String> = LocaleAssets::sources().map(|(code, _)| code).collect();
        codes.sort();
        assert_eq!(codes, vec!["en".to_string(), "zh-TW".to_string()]);
    }
}
