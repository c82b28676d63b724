//! Locale-aware description ordering via `String.prototype.localeCompare`.

use std::cmp::Ordering;

use packing_list::Collator;

#[derive(Debug, Clone, Default)]
pub struct LocaleCollator {
    locale: Option<String>,
}

impl LocaleCollator {
    pub fn new(locale: Option<String>) -> Self {
        Self { locale }
    }
}

impl Collator for LocaleCollator {
    #[cfg(target_arch = "wasm32")]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        use wasm_bindgen::JsValue;

        let locales = js_sys::Array::new();
        if let Some(locale) = &self.locale {
            locales.push(&JsValue::from_str(locale));
        }
        js_sys::JsString::from(a).locale_compare(b, &locales).cmp(&0)
    }

    // no Intl off the browser
    #[cfg(not(target_arch = "wasm32"))]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        packing_list::CaseFoldCollator.compare(a, b)
    }
}
