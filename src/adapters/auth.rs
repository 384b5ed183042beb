use crate::domain::ports::Authenticator;
use crate::utils::error::Result;
use crate::utils::validation::validate_credential;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use std::sync::RwLock;

/// Sends requests without credentials, e.g. behind an authenticating proxy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request)
    }

    fn kind(&self) -> &'static str {
        "noAuth"
    }
}

/// Adds `Authorization: Bearer <token>`. The caller owns the token lifecycle
/// and swaps in fresh tokens with `set_bearer_token`.
#[derive(Debug)]
pub struct BearerTokenAuthenticator {
    token: RwLock<String>,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        validate_credential("bearer_token", &token)?;
        Ok(Self {
            token: RwLock::new(token),
        })
    }

    pub fn set_bearer_token(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        validate_credential("bearer_token", &token)?;
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
        Ok(())
    }

    fn current(&self) -> String {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.header(AUTHORIZATION, format!("Bearer {}", self.current())))
    }

    fn kind(&self) -> &'static str {
        "bearerToken"
    }
}

/// HTTP basic credentials. API keys are sent as user `apikey`.
#[derive(Debug, Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        validate_credential("username", &username)?;
        validate_credential("password", &password)?;
        Ok(Self { username, password })
    }

    pub fn from_apikey(apikey: impl Into<String>) -> Result<Self> {
        Self::new("apikey", apikey)
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.basic_auth(&self.username, Some(&self.password)))
    }

    fn kind(&self) -> &'static str {
        "basic"
    }
}
