use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;
use urlencoding::encode;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::types::api::{
    DeletePasteRequest, NewPasteRequest, NewPasteResponse, UpdatePasteRequest,
    UpdatePasteResponse,
};
use crate::types::{CreatedPaste, Paste, PasteUpdate, UpdatedPaste};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub const DEFAULT_FILETYPE: &str = "plaintext";
pub const DEFAULT_EXPIRES_IN: u32 = 14;

/// Client for the paste server's JSON API. Every call is a single round
/// trip; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct PasteClient {
    http: reqwest::Client,
    base_url: String,
}

impl PasteClient {
    pub fn new(config: &Config) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        // zero means no timeout, like an unset value
        if let Some(secs) = config.timeout_secs.filter(|&secs| secs != 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(PasteClient {
            http: builder.build()?,
            base_url: config.url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The URL a paste is served from.
    pub fn paste_url(&self, uuid: &str) -> String {
        format!("{}/{}", self.base_url, encode(uuid))
    }

    /// Create a paste. An unset or empty filetype becomes `plaintext` and an
    /// unset expiry becomes 14 days.
    pub async fn create(
        &self,
        content: &[String],
        filetype: Option<&str>,
        expires_in: Option<u32>,
    ) -> ClientResult<CreatedPaste> {
        let body = to_body(&NewPasteRequest {
            content,
            filetype: filetype
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_FILETYPE),
            expires_in: expires_in.unwrap_or(DEFAULT_EXPIRES_IN),
        })?;

        let text = self.send(Method::POST, &self.base_url, Some(body)).await?;
        let response: NewPasteResponse = serde_json::from_str(&text)?;
        let url = self.paste_url(&response.uuid);

        Ok(CreatedPaste {
            uuid: response.uuid,
            access_key: response.access_key,
            expires_at: response.expires_at,
            url,
        })
    }

    pub async fn get(&self, uuid: &str) -> ClientResult<Paste> {
        let text = self.send(Method::GET, &self.paste_url(uuid), None).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Update a paste, sending only the fields present in `update`.
    pub async fn update(
        &self,
        uuid: &str,
        access_key: &str,
        update: &PasteUpdate,
    ) -> ClientResult<UpdatedPaste> {
        let url = self.paste_url(uuid);
        let body = to_body(&UpdatePasteRequest::sparse(update, access_key))?;

        let text = self.send(Method::PUT, &url, Some(body)).await?;
        let response: UpdatePasteResponse = serde_json::from_str(&text)?;

        Ok(UpdatedPaste {
            uuid: response.uuid.unwrap_or_else(|| uuid.to_owned()),
            expires_at: response.expires_at,
            url,
        })
    }

    /// Delete a paste, returning the server's response body untouched.
    pub async fn delete(&self, uuid: &str, access_key: &str) -> ClientResult<String> {
        let body = to_body(&DeletePasteRequest { access_key })?;
        self.send(Method::DELETE, &self.paste_url(uuid), Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<String> {
        debug!("{method} {url}");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("status={status}, size={size}", size = text.len());

        if status.as_u16() >= 400 {
            return Err(ClientError::Server { status, body: text });
        }
        Ok(text)
    }
}

fn to_body<T: Serialize>(value: &T) -> ClientResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}
