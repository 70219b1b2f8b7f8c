use serde::Deserialize;
use translate_plugin_interface::Error;

#[derive(Deserialize)]
struct Translations1 {
    text: String,
}

#[derive(Deserialize)]
struct Root1 {
    translations: Vec<Translations1>,
}

/// Pulls `[0].translations[0].text` out of a translate response.
///
/// Anything else, including Azure's own `{"error": ...}` envelope, fails with
/// the raw body attached.
pub fn parse_response(raw: &str) -> Result<String, Error> {
    let malformed = || Error::MalformedResponse(raw.to_owned());
    let roots: Vec<Root1> = serde_json::from_str(raw).map_err(|e| {
        log::debug!("Failed to decode translate response: {e}");
        malformed()
    })?;
    roots
        .into_iter()
        .next()
        .and_then(|root| root.translations.into_iter().next())
        .map(|t| t.text)
        .ok_or_else(malformed)
}
