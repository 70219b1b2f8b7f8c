pub mod error;
pub mod language;
pub mod localize;
pub mod storage;
pub mod transport;

use std::sync::Arc;

pub use crate::error::{Credential, Error};
pub use crate::language::Language;
pub use crate::localize::Localizer;
pub use crate::storage::SettingsStorage;
pub use crate::transport::{HttpTransport, Options};
pub use tokio_util::sync::CancellationToken;

#[async_trait::async_trait]
pub trait AsyncTranslator: Send + Sync {
    fn local(&self) -> bool;

    /// Provider code for `lang` as a source, `None` means auto-detect or unsupported.
    fn source_code(&self, lang: Language) -> Option<&'static str>;

    /// Provider code for `lang` as a target, `None` means unsupported.
    fn target_code(&self, lang: Language) -> Option<&'static str>;

    /// Never fails outright: every failure is reported in the result.
    async fn translate(
        &self,
        request: &TranslateRequest,
        cancel: &CancellationToken,
    ) -> TranslateResult;
}

/// Collaborators the host hands to a provider at init.
#[derive(Clone)]
pub struct PluginContext {
    pub transport: Arc<dyn HttpTransport>,
    pub storage: Arc<dyn SettingsStorage>,
    pub localizer: Arc<dyn Localizer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub from: Language,
    pub to: Language,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, from: Language, to: Language) -> Self {
        Self {
            text: text.into(),
            from,
            to,
        }
    }
}

/// Outcome of one translation call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslateResult {
    Success(String),
    Failed {
        error: Error,
        /// Display text: localized where a key exists, raw provider body for bad responses
        message: String,
    },
    Cancelled,
}

impl TranslateResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TranslateResult::Success(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            TranslateResult::Success(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            TranslateResult::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            TranslateResult::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
