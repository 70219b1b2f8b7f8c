//! Host language to Azure Translator code mapping.
//!
//! <https://learn.microsoft.com/en-us/azure/ai-services/translator/language-support>

use translate_plugin_interface::Language;

/// Target used when the caller asks for [`Language::Auto`].
pub const DEFAULT_TARGET: &str = "en";

fn to_azure(lang: Language) -> Option<&'static str> {
    Some(match lang {
        Language::ChineseSimplified => "zh-Hans",
        Language::ChineseTraditional => "zh-Hant",
        Language::Cantonese => "yue",
        Language::English => "en",
        Language::Japanese => "ja",
        Language::Korean => "ko",
        Language::French => "fr",
        Language::Spanish => "es",
        Language::Russian => "ru",
        Language::German => "de",
        Language::Italian => "it",
        Language::Turkish => "tr",
        Language::PortuguesePortugal => "pt-pt",
        Language::PortugueseBrazil => "pt",
        Language::Vietnamese => "vi",
        Language::Indonesian => "id",
        Language::Thai => "th",
        Language::Malay => "ms",
        Language::Arabic => "ar",
        Language::Hindi => "hi",
        Language::MongolianCyrillic => "mn-Cyrl",
        Language::MongolianTraditional => "mn-Mong",
        Language::Khmer => "km",
        Language::NorwegianBokmal => "nb",
        // Azure has no separate Nynorsk code here, both variants share "nb".
        Language::NorwegianNynorsk => "nb",
        Language::Persian => "fa",
        Language::Swedish => "sv",
        Language::Polish => "pl",
        Language::Dutch => "nl",
        Language::Ukrainian => "uk",
        _ => return None,
    })
}

/// `None` for [`Language::Auto`] so the `from` parameter is left out and Azure detects it.
pub fn source_code(lang: Language) -> Option<&'static str> {
    match lang {
        Language::Auto => None,
        lang => to_azure(lang),
    }
}

/// Azure cannot detect a target, so [`Language::Auto`] falls back to [`DEFAULT_TARGET`].
pub fn target_code(lang: Language) -> Option<&'static str> {
    match lang {
        Language::Auto => Some(DEFAULT_TARGET),
        lang => to_azure(lang),
    }
}
