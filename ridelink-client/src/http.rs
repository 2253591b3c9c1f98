use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::error;

use ridelink_core::paging::{Page, PageRequest};
use ridelink_core::token::TokenCache;
use ridelink_core::{ApiError, ApiResult};

use crate::app_config::ApiConfig;

/// The one place that talks HTTP. Every response is decoded here into the
/// `ApiResult` shape, so callers above this boundary never see transport
/// details or inconsistent envelopes.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenCache>,
}

impl HttpApi {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenCache>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authorized requests carry the current bearer token, read fresh from
    /// the cache on every call.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.load() {
            Some(record) => builder.bearer_auth(record.token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .authorize(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    pub(crate) async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode_empty(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .authorize(self.http.put(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    pub(crate) async fn delete_empty(&self, path: &str) -> ApiResult<()> {
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await
            .map_err(transport_error)?;
        decode_empty(response).await
    }

    /// Paged GET with the server's `page`/`size` query params (0-based).
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        request: PageRequest,
    ) -> ApiResult<Page<T>> {
        let response = self
            .authorize(self.http.get(self.url(path)))
            .query(&[("page", request.page), ("size", request.size)])
            .send()
            .await
            .map_err(transport_error)?;
        let body: PagedBody<T> = decode(response).await?;
        Ok(Page {
            content: body.content,
            page: request.page,
            size: request.size,
            total_pages: body.total_pages,
        })
    }
}

/// Wire shape of a paged response.
#[derive(Debug, Deserialize)]
struct PagedBody<T> {
    content: Vec<T>,
    #[serde(rename = "totalPages")]
    total_pages: u32,
}

/// Structured error payloads the server may send.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<BTreeMap<String, String>>,
}

fn transport_error(err: reqwest::Error) -> ApiError {
    error!("transport failure: {}", err);
    ApiError::Network(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("malformed response body: {}", e)));
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify(status, &body))
}

async fn decode_empty(response: Response) -> ApiResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify(status, &body))
}

/// Status classification, one rule set for the whole portal: 401 funnels
/// into the session store's logout path, a 400 with field errors keeps the
/// same map shape local validation produces.
fn classify(status: StatusCode, body: &str) -> ApiError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    match status.as_u16() {
        401 => ApiError::Auth(message),
        404 => ApiError::NotFound(message),
        400 | 422 => match parsed.and_then(|b| b.errors) {
            Some(errors) => ApiError::Validation(errors.into()),
            None => ApiError::Network(message),
        },
        _ => ApiError::Network(message),
    }
}
