use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages and regional variants known to the host.
///
/// Providers map these onto their own code vocabulary; a provider is free to
/// leave any of them unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Source: let the provider detect it. Target: provider default.
    Auto,
    ChineseSimplified,
    ChineseTraditional,
    Cantonese,
    English,
    Japanese,
    Korean,
    French,
    Spanish,
    Russian,
    German,
    Italian,
    Turkish,
    PortuguesePortugal,
    PortugueseBrazil,
    Vietnamese,
    Indonesian,
    Thai,
    Malay,
    Arabic,
    Hindi,
    MongolianCyrillic,
    MongolianTraditional,
    Khmer,
    NorwegianBokmal,
    NorwegianNynorsk,
    Persian,
    Swedish,
    Polish,
    Dutch,
    Ukrainian,
    Burmese,
    Filipino,
    Lao,
    Uzbek,
}

impl Language {
    pub const ALL: [Language; 35] = [
        Language::Auto,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Cantonese,
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::French,
        Language::Spanish,
        Language::Russian,
        Language::German,
        Language::Italian,
        Language::Turkish,
        Language::PortuguesePortugal,
        Language::PortugueseBrazil,
        Language::Vietnamese,
        Language::Indonesian,
        Language::Thai,
        Language::Malay,
        Language::Arabic,
        Language::Hindi,
        Language::MongolianCyrillic,
        Language::MongolianTraditional,
        Language::Khmer,
        Language::NorwegianBokmal,
        Language::NorwegianNynorsk,
        Language::Persian,
        Language::Swedish,
        Language::Polish,
        Language::Dutch,
        Language::Ukrainian,
        Language::Burmese,
        Language::Filipino,
        Language::Lao,
        Language::Uzbek,
    ];

    pub fn is_auto(&self) -> bool {
        *self == Language::Auto
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
