use std::fmt;

use crate::Language;

pub const UNSUPPORTED_TARGET_LANG: &str = "UnsupportedTargetLang";
pub const API_KEY_REQUIRED: &str = "STranslate_Plugin_Translate_AzureTranslator_ApiKey_Required";
pub const REGION_REQUIRED: &str = "STranslate_Plugin_Translate_AzureTranslator_Region_Required";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Translator doesnt support target language {0}")]
    UnsupportedTargetLanguage(Language),
    #[error("{0} is required")]
    MissingCredential(Credential),
    #[error("Endpoint is not a valid url: {0}")]
    InvalidEndpoint(String),
    #[error("Failed to fetch: {0}")]
    Transport(String),
    #[error("Api returned invalid response: {0}")]
    MalformedResponse(String),
    #[error("Translation was cancelled")]
    Cancelled,
}

impl Error {
    /// Localization key for errors that have a stable user-facing message.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Error::UnsupportedTargetLanguage(_) => Some(UNSUPPORTED_TARGET_LANG),
            Error::MissingCredential(Credential::ApiKey) => Some(API_KEY_REQUIRED),
            Error::MissingCredential(Credential::Region) => Some(REGION_REQUIRED),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    ApiKey,
    Region,
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey => f.write_str("Api key"),
            Credential::Region => f.write_str("Region"),
        }
    }
}
