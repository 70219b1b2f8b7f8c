use std::collections::HashMap;

use maplit::hashmap;

use crate::error::{API_KEY_REQUIRED, REGION_REQUIRED, UNSUPPORTED_TARGET_LANG};

/// Host lookup for user-facing text.
pub trait Localizer: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Fixed key to text table. Unknown keys come back unchanged.
pub struct StaticLocalizer {
    table: HashMap<String, String>,
}

impl StaticLocalizer {
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    pub fn english() -> Self {
        Self::new(hashmap! {
            UNSUPPORTED_TARGET_LANG.to_owned() => "Unsupported target language".to_owned(),
            API_KEY_REQUIRED.to_owned() => "Api key is required".to_owned(),
            REGION_REQUIRED.to_owned() => "Region is required".to_owned(),
        })
    }
}

impl Default for StaticLocalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for StaticLocalizer {
    fn translate(&self, key: &str) -> String {
        self.table
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}
