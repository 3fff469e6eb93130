//! # Upstream report service client
//!
//! The server never computes reports or checks passwords itself. Each API
//! call is re-posted as JSON to `{base_url}{path}` and the upstream answer is
//! relayed back unchanged: status code, content type and body bytes.
//!
//! Failures that happen before an upstream answer exists are turned into a
//! JSON `{ "error": ... }` body through [`ServerError`]'s `ResponseError`
//! implementation:
//!
//! | Failure                     | Status |
//! |-----------------------------|--------|
//! | no upstream configured      | 503    |
//! | upstream timed out          | 504    |
//! | connect / transport failure | 502    |
//!
//! Request bodies carry the report password, so only the path and the
//! resulting status are logged.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ErrorBody;
use log::{error, info, warn};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("보고서 서비스가 설정되지 않았습니다.")]
    NotConfigured,
    #[error("보고서 서비스 응답 시간이 초과되었습니다.")]
    Timeout,
    #[error("보고서 서비스에 연결할 수 없습니다.")]
    Unreachable(#[source] reqwest::Error),
    #[error("HTTP 클라이언트를 만들 수 없습니다: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServerError::Timeout
        } else {
            ServerError::Unreachable(err)
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ServerError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ServerError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Shared handle on the report service. Cheap to clone; the inner
/// `reqwest::Client` pools connections across workers.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl Upstream {
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self, ServerError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ServerError::Client)?;

        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Absolute upstream URL for an API path such as `/api/accounts`.
    pub fn endpoint(&self, path: &str) -> Option<String> {
        self.base_url.as_ref().map(|base| format!("{base}{path}"))
    }

    /// Posts `body` to the upstream `path` and relays whatever comes back.
    pub async fn forward<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpResponse, ServerError> {
        let Some(url) = self.endpoint(path) else {
            warn!("{path}: no upstream configured");
            return Err(ServerError::NotConfigured);
        };

        let response = self.client.post(&url).json(body).send().await.map_err(|err| {
            error!("{path}: upstream request failed: {err}");
            ServerError::from(err)
        })?;

        let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let bytes = response.bytes().await.map_err(|err| {
            error!("{path}: failed to read upstream body: {err}");
            ServerError::from(err)
        })?;

        info!("{path} -> {}", status.as_u16());
        Ok(HttpResponse::build(status).content_type(content_type).body(bytes))
    }
}
