use crate::domain::ports::Authenticator;
use crate::utils::error::{DiscoveryError, Result};
use crate::utils::validation::validate_url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::multipart::Part;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

pub const SDK_ANALYTICS_HEADER: HeaderName = HeaderName::from_static("x-ibmcloud-sdk-analytics");
const USER_AGENT_VALUE: &str = concat!("discovery-v2-rust/", env!("CARGO_PKG_VERSION"));

/// Status, headers and decoded body of a successful call.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn into_result(self) -> T {
        self.result
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Ordered query string pairs of one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn with_version(version: &str) -> Self {
        Self(vec![("version", version.to_string())])
    }

    pub fn push(&mut self, name: &'static str, value: impl ToString) -> &mut Self {
        self.0.push((name, value.to_string()));
        self
    }

    pub fn push_opt<T: ToString>(&mut self, name: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.0.push((name, value.to_string()));
        }
        self
    }

    /// Lists travel as one comma separated value; an empty list is left out.
    pub fn push_list<T: ToString>(&mut self, name: &'static str, values: Option<&[T]>) -> &mut Self {
        if let Some(values) = values.filter(|v| !v.is_empty()) {
            let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
            self.0.push((name, joined.join(",")));
        }
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Generic transport shared by the service facades: URL building, default
/// headers, authentication, sending and response decoding.
pub struct BaseService {
    service_name: &'static str,
    service_version: &'static str,
    client: Client,
    service_url: Url,
    default_headers: HeaderMap,
    authenticator: Box<dyn Authenticator>,
}

impl std::fmt::Debug for BaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseService")
            .field("service_name", &self.service_name)
            .field("service_url", &self.service_url.as_str())
            .field("authenticator", &self.authenticator.kind())
            .finish()
    }
}

impl BaseService {
    pub fn new(
        service_name: &'static str,
        service_version: &'static str,
        service_url: &str,
        authenticator: Box<dyn Authenticator>,
    ) -> Result<Self> {
        Ok(Self {
            service_name,
            service_version,
            client: Client::new(),
            service_url: parse_service_url(service_url)?,
            default_headers: HeaderMap::new(),
            authenticator,
        })
    }

    pub fn service_url(&self) -> &str {
        self.service_url.as_str()
    }

    pub fn set_service_url(&mut self, service_url: &str) -> Result<()> {
        self.service_url = parse_service_url(service_url)?;
        tracing::debug!("Service URL set to {}", self.service_url);
        Ok(())
    }

    /// Headers added to every request. They replace the built-in Accept and
    /// User-Agent values of the same name.
    pub fn set_default_headers(&mut self, headers: &HashMap<String, String>) -> Result<()> {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                DiscoveryError::InvalidConfigValue {
                    field: "headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| DiscoveryError::InvalidConfigValue {
                    field: format!("headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            map.insert(header_name, header_value);
        }
        self.default_headers = map;
        Ok(())
    }

    /// Rebuilds the HTTP client with a request timeout and TLS verification setting.
    pub fn configure_client(
        &mut self,
        timeout: Option<Duration>,
        disable_ssl_verification: bool,
    ) -> Result<()> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if disable_ssl_verification {
            tracing::warn!("⚠️ TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        self.client = builder.build()?;
        Ok(())
    }

    pub fn set_authenticator(&mut self, authenticator: Box<dyn Authenticator>) {
        self.authenticator = authenticator;
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    /// Appends each segment to the service URL path, percent-encoding it so a
    /// parameter value can never spill into a neighbouring segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.service_url.clone();
        url.path_segments_mut()
            .map_err(|_| DiscoveryError::Config {
                message: format!("Service URL cannot carry a path: {}", self.service_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn request(
        &self,
        method: Method,
        segments: &[&str],
        query: &QueryParams,
        operation_id: &str,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        let analytics = format!(
            "service_name={};service_version={};operation_id={}",
            self.service_name, self.service_version, operation_id
        );

        let analytics = HeaderValue::from_str(&analytics).map_err(|e| DiscoveryError::Config {
            message: format!("Invalid operation id '{}': {}", operation_id, e),
        })?;

        // Default headers replace the built-in Accept and User-Agent values.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        for (name, value) in &self.default_headers {
            headers.insert(name.clone(), value.clone());
        }
        headers.insert(SDK_ANALYTICS_HEADER, analytics);

        Ok(self
            .client
            .request(method, url)
            .headers(headers)
            .query(query.pairs()))
    }

    /// Sends the request and decodes the JSON body into `T`. An empty body
    /// decodes as JSON `null`, which suits `Option` results.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<DetailedResponse<T>> {
        let (status, headers, body) = self.execute(request).await?;
        let result = if body.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(Value::Null)?
        } else {
            serde_json::from_slice(&body)?
        };
        Ok(DetailedResponse {
            status,
            headers,
            result,
        })
    }

    /// Sends a request whose response body carries nothing of interest.
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<DetailedResponse<()>> {
        let (status, headers, _) = self.execute(request).await?;
        Ok(DetailedResponse {
            status,
            headers,
            result: (),
        })
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(u16, HeaderMap, Vec<u8>)> {
        let request = self.authenticator.authenticate(request).await?.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!("📡 {} {}", method, url);
        let response = self.client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        tracing::debug!("📡 {} {} -> {}", method, url.path(), status);

        if !status.is_success() {
            let parsed: Option<Value> = serde_json::from_slice(&body).ok();
            let message = parsed
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            tracing::warn!("❌ {} {} failed with {}: {}", method, url.path(), status, message);
            return Err(DiscoveryError::Service {
                status: status.as_u16(),
                message,
                body: parsed,
            });
        }

        Ok((status.as_u16(), headers, body))
    }
}

fn parse_service_url(service_url: &str) -> Result<Url> {
    validate_url("service_url", service_url)?;
    Ok(Url::parse(service_url.trim_end_matches('/'))?)
}

/// Pulls the human readable message out of an error body. The service uses
/// several shapes depending on which layer rejected the call.
fn error_message(body: &Value) -> Option<String> {
    if let Some(message) = body
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
    {
        return Some(message.to_string());
    }

    ["error", "message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

pub(crate) fn json_part<T: Serialize + ?Sized>(value: &T) -> Result<Part> {
    Ok(Part::text(serde_json::to_string(value)?).mime_str("application/json")?)
}

pub(crate) fn file_part(
    bytes: Vec<u8>,
    filename: Option<&str>,
    content_type: Option<&str>,
) -> Result<Part> {
    let part = Part::bytes(bytes).file_name(filename.unwrap_or("file").to_string());
    Ok(part.mime_str(content_type.unwrap_or("application/octet-stream"))?)
}
