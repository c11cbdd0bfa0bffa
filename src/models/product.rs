use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Product — the single persisted record
// ---------------------------------------------------------------------------

/// A product row. The same shape is used on the wire and in the `products`
/// table.
///
/// Every field defaults when absent from incoming JSON or set to `null`, so a
/// request body missing a field stores that field's zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "promotionalcode", deserialize_with = "null_as_default")]
    pub promotional_code: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Return a copy carrying `id` in place of whatever id this record had.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }
}
