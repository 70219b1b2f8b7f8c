use reqwest::Url;
use serde_json::{Value, json};
use translate_plugin_interface::{Error, Options};

use crate::settings::TranslationSettings;

pub const API_URL: &str = "https://api.cognitive.microsofttranslator.com/translate";
pub const API_VERSION: &str = "3.0";

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// Custom endpoint without trailing slashes when enabled and set, the public endpoint otherwise.
pub fn base_url(settings: &TranslationSettings) -> &str {
    if settings.use_custom_endpoint && !settings.custom_endpoint.is_empty() {
        settings.custom_endpoint.trim_end_matches('/')
    } else {
        API_URL
    }
}

/// A ready to send translate call.
#[derive(Debug, Clone, PartialEq)]
pub struct AzureRequest {
    pub url: Url,
    pub options: Options,
    pub body: Value,
}

impl AzureRequest {
    /// `from` is left out of the query when `None` so Azure detects the source language.
    pub fn build(
        settings: &TranslationSettings,
        from: Option<&str>,
        to: &str,
        text: &str,
    ) -> Result<Self, Error> {
        let base = base_url(settings);
        let mut url =
            Url::parse(base).map_err(|e| Error::InvalidEndpoint(format!("{base}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api-version", API_VERSION);
            query.append_pair("to", to);
            if let Some(from) = from.filter(|f| !f.is_empty()) {
                query.append_pair("from", from);
            }
        }

        let mut options = Options::default();
        options
            .headers
            .insert(SUBSCRIPTION_KEY_HEADER.to_owned(), settings.api_key.clone());
        options
            .headers
            .insert(SUBSCRIPTION_REGION_HEADER.to_owned(), settings.region.clone());

        // batch endpoint, one element
        let body = json!([{ "Text": text }]);

        Ok(Self { url, options, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> TranslationSettings {
        TranslationSettings {
            api_key: "key".into(),
            region: "westeurope".into(),
            ..Default::default()
        }
    }

    #[test]
    fn custom_endpoint_strips_trailing_slash() {
        let s = TranslationSettings {
            use_custom_endpoint: true,
            custom_endpoint: "https://x.example/api/".into(),
            ..settings()
        };
        assert_eq!(base_url(&s), "https://x.example/api");
        let req = AzureRequest::build(&s, None, "en", "hi").unwrap();
        assert!(
            req.url.as_str().starts_with("https://x.example/api?"),
            "{}",
            req.url
        );
    }

    #[test]
    fn disabled_custom_endpoint_is_ignored() {
        let s = TranslationSettings {
            use_custom_endpoint: false,
            custom_endpoint: "https://x.example/api/".into(),
            ..settings()
        };
        assert_eq!(base_url(&s), API_URL);
    }

    #[test]
    fn empty_custom_endpoint_falls_back() {
        let s = TranslationSettings {
            use_custom_endpoint: true,
            ..settings()
        };
        assert_eq!(base_url(&s), API_URL);
    }

    #[test]
    fn query_has_version_target_and_source() {
        let req = AzureRequest::build(&settings(), Some("en"), "zh-Hans", "Hello").unwrap();
        assert_eq!(
            req.url.as_str(),
            "https://api.cognitive.microsofttranslator.com/translate?api-version=3.0&to=zh-Hans&from=en"
        );
    }

    #[test]
    fn auto_source_omits_from() {
        let req = AzureRequest::build(&settings(), None, "zh-Hans", "Hello").unwrap();
        assert!(req.url.as_str().contains("to=zh-Hans"));
        assert!(req.url.query_pairs().all(|(k, _)| k != "from"));
    }

    #[test]
    fn headers_carry_credentials_verbatim() {
        let s = TranslationSettings {
            api_key: "a b+c".into(),
            ..settings()
        };
        let req = AzureRequest::build(&s, None, "en", "x").unwrap();
        assert_eq!(req.options.headers.len(), 2);
        assert_eq!(req.options.headers[SUBSCRIPTION_KEY_HEADER], "a b+c");
        assert_eq!(req.options.headers[SUBSCRIPTION_REGION_HEADER], "westeurope");
    }

    #[test]
    fn body_is_single_text_batch() {
        let req = AzureRequest::build(&settings(), None, "en", "Hallo \"Welt\"").unwrap();
        assert_eq!(req.body, json!([{ "Text": "Hallo \"Welt\"" }]));
    }

    #[test]
    fn unparsable_endpoint_is_rejected() {
        let s = TranslationSettings {
            use_custom_endpoint: true,
            custom_endpoint: "not a url".into(),
            ..settings()
        };
        assert!(matches!(
            AzureRequest::build(&s, None, "en", "x"),
            Err(Error::InvalidEndpoint(_))
        ));
    }
}
