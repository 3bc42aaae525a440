//! Page data model.

use serde::Deserialize;
use serde_json::{Number, Value};

/// A single value from a page entry.
///
/// Anything that is not a JSON scalar lands in `Nested`, so that loading never
/// rejects a document because of one odd field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Flag(bool),
    Nested(Value),
}

impl FieldValue {
    /// Text content of this value, or `None` when it counts as "not provided".
    ///
    /// Empty strings, `"0"`, numeric zero, `false` and empty arrays/objects are all
    /// treated as absent. A non-empty array or object has no text form and is an error.
    pub fn as_text(&self) -> Result<Option<String>, String> {
        match self {
            Self::Text(s) if s.is_empty() || s == "0" => Ok(None),
            Self::Text(s) => Ok(Some(s.clone())),
            Self::Number(n) if n.as_f64().is_some_and(|v| v == 0.0) => Ok(None),
            Self::Number(n) => Ok(Some(n.to_string())),
            Self::Flag(false) => Ok(None),
            Self::Flag(true) => Ok(Some("1".to_string())),
            Self::Nested(Value::Null) => Ok(None),
            Self::Nested(Value::Array(items)) if items.is_empty() => Ok(None),
            Self::Nested(Value::Object(map)) if map.is_empty() => Ok(None),
            Self::Nested(other) => Err(format!("expected a string or number, found {other}")),
        }
    }
}

/// One record of the input `pages` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageEntry {
    /// Path appended to the base URL (required)
    #[serde(default)]
    pub link: Option<FieldValue>,

    /// Last modification date, emitted verbatim
    #[serde(default)]
    pub lastmod: Option<FieldValue>,

    /// Change frequency, emitted verbatim
    #[serde(default)]
    pub changefreq: Option<FieldValue>,

    /// Priority, emitted verbatim
    #[serde(default)]
    pub priority: Option<FieldValue>,
}

/// A `PageEntry` whose fields have been resolved to text.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub link: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<String>,
}

impl PageEntry {
    /// Resolve all fields, enforcing a non-empty `link`.
    pub fn resolve(&self) -> Result<ResolvedPage, String> {
        let link = text_of("link", self.link.as_ref())?
            .ok_or_else(|| "\"link\" must be assigned a value".to_string())?;

        Ok(ResolvedPage {
            link,
            lastmod: text_of("lastmod", self.lastmod.as_ref())?,
            changefreq: text_of("changefreq", self.changefreq.as_ref())?,
            priority: text_of("priority", self.priority.as_ref())?,
        })
    }
}

fn text_of(field: &str, value: Option<&FieldValue>) -> Result<Option<String>, String> {
    match value {
        Some(v) => v.as_text().map_err(|e| format!("\"{field}\": {e}")),
        None => Ok(None),
    }
}

/// The loaded input document.
///
/// Entries stay as raw JSON until generation, where each one is checked in turn.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageSet {
    #[serde(default)]
    pub pages: Option<Vec<Value>>,
}

impl PageSet {
    /// Number of raw entries, zero when there is no `pages` list.
    pub fn len(&self) -> usize {
        self.pages.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> PageEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_mixed_scalar_fields() {
        let page = entry(json!({
            "link": "/about",
            "lastmod": "2020-01-01",
            "priority": 0.8
        }));

        assert_eq!(page.link, Some(FieldValue::Text("/about".into())));
        assert!(matches!(page.priority, Some(FieldValue::Number(_))));
        assert!(page.changefreq.is_none());
    }

    #[test]
    fn empty_values_count_as_absent() {
        for value in [json!(""), json!("0"), json!(0), json!(0.0), json!(false), json!([]), json!({})] {
            let field: FieldValue = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(field.as_text(), Ok(None), "value {value} should be absent");
        }
    }

    #[test]
    fn scalar_values_render_verbatim() {
        let cases = [
            (json!("weekly"), "weekly"),
            (json!("0.0"), "0.0"),
            (json!(0.5), "0.5"),
            (json!(1), "1"),
            (json!(true), "1"),
        ];

        for (value, expected) in cases {
            let field: FieldValue = serde_json::from_value(value).unwrap();
            assert_eq!(field.as_text(), Ok(Some(expected.to_string())));
        }
    }

    #[test]
    fn nested_values_are_rejected() {
        let field: FieldValue = serde_json::from_value(json!(["a"])).unwrap();
        assert!(field.as_text().is_err());
    }

    #[test]
    fn null_field_is_absent() {
        let page = entry(json!({ "link": "/x", "lastmod": null }));

        let resolved = page.resolve().unwrap();
        assert_eq!(resolved.lastmod, None);
    }

    #[test]
    fn resolve_requires_link() {
        let missing = entry(json!({ "priority": 0 }));
        let empty = entry(json!({ "link": "" }));

        assert!(missing.resolve().unwrap_err().contains("link"));
        assert!(empty.resolve().unwrap_err().contains("link"));
    }

    #[test]
    fn resolve_names_offending_field() {
        let page = entry(json!({ "link": "/x", "changefreq": { "every": "day" } }));

        let err = page.resolve().unwrap_err();
        assert!(err.starts_with("\"changefreq\""));
    }

    #[test]
    fn page_set_counts_entries() {
        let set: PageSet = serde_json::from_value(json!({ "pages": [{}, {}] })).unwrap();
        let bare: PageSet = serde_json::from_value(json!({})).unwrap();

        assert_eq!(set.len(), 2);
        assert!(bare.pages.is_none());
        assert!(bare.is_empty());
    }
}
