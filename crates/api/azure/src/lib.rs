pub mod lang;
pub mod request;
pub mod response;
pub mod settings;
pub mod transport;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use translate_plugin_interface::{
    AsyncTranslator, CancellationToken, Error, Language, PluginContext, TranslateRequest,
    TranslateResult, storage::SettingsStorageExt as _,
};

pub use crate::request::AzureRequest;
pub use crate::response::parse_response;
pub use crate::settings::{SettingsField, SettingsStore, SharedSettings, TranslationSettings};
pub use crate::transport::ReqwestTransport;

pub struct AzureTranslator {
    context: PluginContext,
    settings: SharedSettings,
    store: Mutex<Option<Arc<SettingsStore>>>,
}

impl AzureTranslator {
    /// Loads the saved settings from the context's storage.
    pub fn init(context: PluginContext) -> anyhow::Result<Self> {
        let settings: TranslationSettings = context.storage.load()?;
        Ok(Self::new(context, settings))
    }

    pub fn new(context: PluginContext, settings: TranslationSettings) -> Self {
        Self {
            context,
            settings: Arc::new(RwLock::new(settings)),
            store: Mutex::new(None),
        }
    }

    pub fn settings(&self) -> TranslationSettings {
        settings::snapshot(&self.settings)
    }

    /// Editing surface for the settings. Created on first use and reused until [`Self::dispose`].
    pub fn settings_store(&self) -> Arc<SettingsStore> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(|| {
                Arc::new(SettingsStore::new(
                    self.settings.clone(),
                    self.context.storage.clone(),
                ))
            })
            .clone()
    }

    pub fn dispose(&self) {
        if let Some(store) = self
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            store.dispose();
        }
    }

    async fn try_translate(
        &self,
        request: &TranslateRequest,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        let from = lang::source_code(request.from);
        let to = lang::target_code(request.to)
            .ok_or(Error::UnsupportedTargetLanguage(request.to))?;

        let settings = self.settings();
        settings.check_credentials()?;

        let AzureRequest { url, options, body } =
            AzureRequest::build(&settings, from, to, &request.text)?;
        log::debug!(
            "translating {} chars {:?} -> {to}",
            request.text.chars().count(),
            from
        );

        let post = self
            .context
            .transport
            .post(url.as_str(), &body, &options, cancel);
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            response = post => response,
        };
        let raw = match response {
            Ok(raw) => raw,
            Err(_) if cancel.is_cancelled() => return Err(Error::Cancelled),
            Err(e) => return Err(Error::Transport(format!("{e:#}"))),
        };
        parse_response(&raw)
    }

    fn failure_message(&self, error: &Error) -> String {
        match error {
            Error::MalformedResponse(raw) => raw.clone(),
            error => match error.message_key() {
                Some(key) => self.context.localizer.translate(key),
                None => error.to_string(),
            },
        }
    }
}

impl Drop for AzureTranslator {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[async_trait::async_trait]
impl AsyncTranslator for AzureTranslator {
    fn local(&self) -> bool {
        false
    }

    fn source_code(&self, lang: Language) -> Option<&'static str> {
        lang::source_code(lang)
    }

    fn target_code(&self, lang: Language) -> Option<&'static str> {
        lang::target_code(lang)
    }

    async fn translate(
        &self,
        request: &TranslateRequest,
        cancel: &CancellationToken,
    ) -> TranslateResult {
        match self.try_translate(request, cancel).await {
            Ok(text) => TranslateResult::Success(text),
            Err(Error::Cancelled) => TranslateResult::Cancelled,
            Err(error) => {
                let message = self.failure_message(&error);
                log::warn!("Azure translation failed: {error}");
                TranslateResult::Failed { error, message }
            }
        }
    }
}
