//! The caller-supplied word list: disallowed term or phrase → suggestion.
//!
//! Entry order is preserved from the source document so findings come out
//! in a stable order.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{WordListError, WordListResult};

/// Ordered mapping from a disallowed term to its suggested replacement.
///
/// Deserializing goes through the same validation as [`WordList::from_json`]:
/// entries whose value is not a string are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct WordList {
    entries: IndexMap<String, String>,
}

impl WordList {
    /// Create an empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a JSON document into a word list.
    ///
    /// The top level must be an object. Entries whose value is not a string
    /// are dropped with a warning rather than rejected wholesale.
    #[tracing::instrument(skip_all, fields(json_len = json.len()))]
    pub fn from_json(json: &str) -> WordListResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(map) = value else {
            return Err(WordListError::NotAnObject {
                found: json_type_name(&value),
            });
        };

        Ok(Self::from_object(map))
    }

    fn from_object(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut entries = IndexMap::with_capacity(map.len());
        for (term, suggestion) in map {
            match suggestion {
                serde_json::Value::String(s) => {
                    entries.insert(term, s);
                }
                other => {
                    tracing::warn!(
                        term,
                        found = json_type_name(&other),
                        "dropping word-list entry with non-string suggestion"
                    );
                }
            }
        }

        tracing::debug!(entries = entries.len(), "word list validated");
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the suggestion for an exact term.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Iterate `(term, suggestion)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, s)| (t.as_str(), s.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WordList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for WordList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Self::from_object(map))
    }
}

const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_preserves_document_order() {
        let list = WordList::from_json(r#"{"zebra": "z", "apple": "a", "mango": "m"}"#).unwrap();
        let terms: Vec<&str> = list.iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn from_json_drops_non_string_values() {
        let list = WordList::from_json(
            r#"{"utilize": "use", "count": 3, "nested": {"a": "b"}, "gone": null}"#,
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("utilize"), Some("use"));
    }

    #[test]
    fn deserialize_agrees_with_from_json() {
        let doc = r#"{"fine": "great", "count": 3, "utilize": "use", "flag": true}"#;
        let validated = WordList::from_json(doc).unwrap();
        let deserialized: WordList = serde_json::from_str(doc).unwrap();
        assert_eq!(deserialized, validated);
        assert_eq!(deserialized.len(), 2);
        assert_eq!(deserialized.get("fine"), Some("great"));
    }

    #[test]
    fn deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<WordList>(r#"["fine"]"#).is_err());
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = WordList::from_json(r#"["utilize", "use"]"#).unwrap_err();
        assert!(matches!(err, WordListError::NotAnObject { found: "array" }));
    }

    #[test]
    fn from_json_rejects_invalid_json() {
        let err = WordList::from_json("{not json").unwrap_err();
        assert!(matches!(err, WordListError::InvalidJson(_)));
    }

    #[test]
    fn empty_object_is_empty_list() {
        let list = WordList::from_json("{}").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let list: WordList = [("click here", "select"), ("sign-in", "sign in")]
            .into_iter()
            .collect();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("sign-in"), Some("sign in"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let list: WordList = [("a", "b")].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"{"a":"b"}"#);
    }
}
