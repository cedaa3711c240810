use serde::{Deserialize, Deserializer};

pub mod api;

/// A paste as returned by a lookup. The server omits empty fields, so
/// anything missing is left at its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paste {
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub filetype: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_at: String,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPaste {
    pub uuid: String,
    pub access_key: Option<String>,
    pub expires_at: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedPaste {
    pub uuid: String,
    pub expires_at: Option<String>,
    pub url: String,
}

/// The optional parts of an update. Empty content, an empty filetype and a
/// zero expiry all count as "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteUpdate {
    pub content: Vec<String>,
    pub filetype: Option<String>,
    pub expires_in: Option<u32>,
}
