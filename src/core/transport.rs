use crate::utils::error::{ApiError, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.umrahflex.com/api";

/// One reqwest client bound to the API base URL. Shared by every resource client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidConfigValue {
                field: "api.base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut request = self.request(Method::GET, segments);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
            });
        }
        read_json(response).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B, fallback: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, segments).json(body);
        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(rejection(response, fallback).await);
        }
        read_json(response).await
    }

    pub async fn put<B, T>(&self, segments: &[&str], body: &B, fallback: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, segments).json(body);
        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(rejection(response, fallback).await);
        }
        read_json(response).await
    }

    /// Issues a DELETE; the response body is ignored.
    pub async fn delete(&self, segments: &[&str]) -> Result<()> {
        let response = self.send(self.request(Method::DELETE, segments)).await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        tracing::debug!("📡 {} {}", method, url);
        self.client.request(method, url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        tracing::debug!("📡 {} -> {}", response.url(), response.status());
        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Builds the error for a refused write from the body's `detail` field.
async fn rejection(response: Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    let detail = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| match detail {
                Value::Null => None,
                Value::String(s) if s.is_empty() => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            }),
        Err(e) => {
            tracing::debug!("Could not read error body: {}", e);
            None
        }
    };

    ApiError::Rejected {
        status,
        detail: detail.unwrap_or_else(|| fallback.to_string()),
    }
}
