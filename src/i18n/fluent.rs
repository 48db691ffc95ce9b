// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        // Skip Unicode isolation marks so interpolated values
                        // render cleanly in plain widgets.
                        bundle.set_use_isolating(false);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }
        available_locales.sort_by_key(std::string::ToString::to_string);

        let default_locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Whether the current locale is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.current_locale.language.as_str() == "ar"
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments for interpolation.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {key}")
    }
}

/// Picks the display locale: CLI flag first, then the config file, then the
/// OS locale, matching on the primary language subtag so `ar-SA` still finds
/// the `ar` bundle.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.language.clone(),
        sys_locale::get_locale(),
    ];

    for candidate in candidates.into_iter().flatten() {
        if let Ok(wanted) = candidate.parse::<LanguageIdentifier>() {
            if let Some(found) = available.iter().find(|a| a.language == wanted.language) {
                return Some(found.clone());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn resolve_locale_prefers_cli_over_config() {
        let config = Config {
            language: Some("en".to_string()),
        };
        let available: Vec<LanguageIdentifier> =
            vec!["ar".parse().unwrap(), "en".parse().unwrap()];
        let lang = resolve_locale(Some("ar".to_string()), &config, &available);
        assert_eq!(lang, Some("ar".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config_when_no_cli_flag() {
        let config = Config {
            language: Some("ar".to_string()),
        };
        let available: Vec<LanguageIdentifier> =
            vec!["ar".parse().unwrap(), "en".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("ar".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_matches_on_primary_language_subtag() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["ar".parse().unwrap(), "en".parse().unwrap()];
        let lang = resolve_locale(Some("ar-SA".to_string()), &config, &available);
        assert_eq!(lang, Some("ar".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_include_english_and_arabic() {
        let i18n = I18n::default();
        let tags: Vec<String> = i18n
            .available_locales
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(tags.contains(&"en".to_string()));
        assert!(tags.contains(&"ar".to_string()));
    }

    #[test]
    fn tr_resolves_exact_english_wording() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap());
        assert_eq!(
            i18n.tr("validation-vehicle-missing"),
            "Please select a vehicle."
        );
        assert_eq!(
            i18n.tr("validation-departure-missing"),
            "Please enter departure date and time."
        );
    }

    #[test]
    fn tr_resolves_exact_arabic_wording() {
        let mut i18n = I18n::default();
        i18n.set_locale("ar".parse().unwrap());
        assert_eq!(i18n.tr("validation-vehicle-missing"), "يرجى اختيار سيارة.");
        assert_eq!(
            i18n.tr("validation-purpose-missing"),
            "يرجى إدخال الغرض من الرحلة."
        );
    }

    #[test]
    fn tr_with_args_interpolates_values() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap());
        let text = i18n.tr_with_args("flash-leave-saved", &[("number", "LR-2026-00042")]);
        assert_eq!(text, "Leave request LR-2026-00042 saved.");
    }

    #[test]
    fn unknown_key_is_marked_missing() {
        let i18n = I18n::default();
        assert!(i18n.tr("no-such-key").starts_with("MISSING:"));
    }

    #[test]
    fn set_locale_ignores_unavailable_locale() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn arabic_is_rtl_english_is_not() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap());
        assert!(!i18n.is_rtl());
        i18n.set_locale("ar".parse().unwrap());
        assert!(i18n.is_rtl());
    }
}
