use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ESearch API response structures

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchResult {
    pub esearchresult: ESearchData,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub idlist: Vec<String>,
}

// ESummary API response structures

/// ESummary returns a JSON object with "result" containing a "uids" array and
/// one object per UID. The per-UID keys are dynamic, so the container is kept
/// as a raw map and each document is decoded on its own.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESummaryResponse {
    pub result: serde_json::Map<String, Value>,
}

/// Per-publication summary as returned by ESummary
///
/// Every field is optional. Fields with an unexpected JSON type decode as
/// absent so that a single odd field never discards the whole document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ESummaryDocSum {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pubdate: Option<String>,
    /// Semicolon-delimited affiliation blob
    #[serde(default, deserialize_with = "lenient")]
    pub affiliation: Option<String>,
    #[serde(default, deserialize_with = "lenient_authors")]
    pub authors: Option<Vec<ESummaryAuthor>>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub correspondence: Option<ESummaryCorrespondence>,
    /// Set by ESummary when it could not produce a summary for this UID
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ESummaryAuthor {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub affiliation: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ESummaryCorrespondence {
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
}

/// Decode `T` if the value has the right shape, otherwise `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`], but only a JSON object may decode into a struct
///
/// Derived struct impls also accept arrays positionally, which would turn
/// `["x@y.example"]` into data.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_object(value))
}

/// Author list where elements that are not objects are dropped
fn lenient_authors<'de, D>(deserializer: D) -> Result<Option<Vec<ESummaryAuthor>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(items.into_iter().filter_map(decode_object).collect()))
}

fn decode_object<T: serde::de::DeserializeOwned>(value: Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}
