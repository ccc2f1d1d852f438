// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Translation Client
//!
//! Thin client for the Google Cloud Translation v2 REST endpoint. The
//! API key is handed in at construction; nothing here reads ambient
//! process state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Errors from one translation request. Batch callers report the locale
/// and move on; there is no retry policy here.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("translation response is empty")]
    EmptyResponse,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslationData,
}

#[derive(Deserialize)]
struct TranslationData {
    translations: Vec<TranslatedText>,
}

#[derive(Deserialize)]
struct TranslatedText {
    #[serde(rename = "translatedText")]
    text: String,
}

/// Client for the translation service.
pub struct TranslateClient {
    http: reqwest::Client,
    api_key: String,
}

impl TranslateClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Translates `text` into the language identified by `target`
    /// (an ISO 639 code). The source language is auto-detected by the
    /// service.
    pub async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let request = TranslateRequest {
            q: text,
            target,
            format: "text",
        };

        let response = self
            .http
            .post(ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api { status, body });
        }

        let payload: TranslateResponse = response.json().await?;
        payload
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or(TranslateError::EmptyResponse)
    }
}
