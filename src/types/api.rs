use serde::{Deserialize, Serialize};

use super::PasteUpdate;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPasteRequest<'a> {
    pub content: &'a [String],
    pub filetype: &'a str,
    pub expires_in: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPasteResponse {
    pub uuid: String,
    pub access_key: Option<String>,
    pub expires_at: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasteRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
    pub access_key: &'a str,
}

impl<'a> UpdatePasteRequest<'a> {
    /// Keep only the fields the caller actually supplied.
    pub fn sparse(update: &'a PasteUpdate, access_key: &'a str) -> Self {
        UpdatePasteRequest {
            content: Some(update.content.as_slice()).filter(|c| !c.is_empty()),
            filetype: update.filetype.as_deref().filter(|t| !t.is_empty()),
            expires_in: update.expires_in.filter(|&days| days != 0),
            access_key,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasteResponse {
    pub uuid: Option<String>,
    pub expires_at: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePasteRequest<'a> {
    pub access_key: &'a str,
}
