use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Decorates outgoing requests with credentials.
///
/// Implementations may do I/O (for example to refresh a token) before
/// returning the request, hence the async signature.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder>;

    /// Short name used in logs, e.g. `bearerToken`.
    fn kind(&self) -> &'static str;
}

#[async_trait]
impl<T: Authenticator + ?Sized> Authenticator for Box<T> {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        (**self).authenticate(request).await
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

/// Lets the caller keep a handle, e.g. to rotate a bearer token after the client is built.
#[async_trait]
impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        (**self).authenticate(request).await
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn service_url(&self) -> &str;
    fn version(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn disable_ssl_verification(&self) -> bool;
    fn default_headers(&self) -> HashMap<String, String>;
}
