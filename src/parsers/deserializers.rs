use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient deserializer: a value of the wrong shape decodes as `T::default()`
///
/// History logs are not schema-validated, so a field with an unexpected type is
/// treated as if it were absent instead of failing the whole line.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Like [`deserialize_lenient`] but only accepts JSON objects
///
/// serde decodes structs from arrays positionally, which would turn `[1, 2]` into
/// a struct with its first fields populated. Anything other than an object is
/// treated as absent.
pub fn deserialize_lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Lenient sequence deserializer
///
/// A non-array value yields an empty Vec. Elements that are not JSON objects, or
/// that fail to decode, are skipped.
pub fn deserialize_lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Records field presence: a present `null` becomes `Some(Value::Null)`
///
/// Combine with `#[serde(default)]` so a missing field stays `None`.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
