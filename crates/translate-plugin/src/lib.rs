pub use translate_plugin_interface::{
    AsyncTranslator, CancellationToken, Credential, Error, HttpTransport, Language, Localizer,
    Options, PluginContext, SettingsStorage, TranslateRequest, TranslateResult,
    localize::StaticLocalizer,
    storage::{JsonFileStorage, MemoryStorage, SettingsStorageExt, StoredSettings},
};

#[cfg(feature = "azure")]
pub use translate_plugin_azure::{
    AzureTranslator, ReqwestTransport, SettingsField, SettingsStore, TranslationSettings,
};

#[cfg(feature = "azure")]
pub mod azure {
    pub use translate_plugin_azure::{lang, request, response, settings};
}

#[cfg(all(test, feature = "azure"))]
mod tests {
    use std::sync::Arc;

    use crate::{
        AsyncTranslator as _, AzureTranslator, CancellationToken, Credential, Error, Language,
        MemoryStorage, PluginContext, ReqwestTransport, StaticLocalizer, TranslateRequest,
    };

    #[tokio::test]
    async fn facade_wires_a_usable_translator() {
        let context = PluginContext {
            transport: Arc::new(ReqwestTransport::new()),
            storage: Arc::new(MemoryStorage::new()),
            localizer: Arc::new(StaticLocalizer::default()),
        };
        let trans = AzureTranslator::init(context).expect("Failed to init translator");
        let result = trans
            .translate(
                &TranslateRequest::new("Hello", Language::English, Language::German),
                &CancellationToken::new(),
            )
            .await;
        assert_eq!(
            result.error(),
            Some(&Error::MissingCredential(Credential::ApiKey))
        );
    }
}
