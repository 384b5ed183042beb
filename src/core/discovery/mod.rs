//! The Discovery v2 service facade.
//!
//! Each method maps to exactly one REST endpoint: it checks required
//! parameters, places the rest in the path, query string, headers or body,
//! and decodes the response into the matching model type.

mod analyze;
mod classifiers;
mod collections;
mod documents;
mod enrichments;
mod projects;
mod queries;
mod training;

use crate::core::service::{BaseService, QueryParams};
use crate::domain::ports::{Authenticator, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::validate_version_date;

pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";
pub const SERVICE_NAME: &str = "discovery";
const SERVICE_VERSION: &str = "V2";

#[derive(Debug)]
pub struct DiscoveryV2 {
    service: BaseService,
    version: String,
}

impl DiscoveryV2 {
    /// `version` is the API release date the client is written against, e.g. `2023-03-31`.
    pub fn new<A: Authenticator + 'static>(version: &str, authenticator: A) -> Result<Self> {
        validate_version_date("version", version)?;
        let service = BaseService::new(
            SERVICE_NAME,
            SERVICE_VERSION,
            DEFAULT_SERVICE_URL,
            Box::new(authenticator),
        )?;
        Ok(Self {
            service,
            version: version.to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider, A: Authenticator + 'static>(
        config: &C,
        authenticator: A,
    ) -> Result<Self> {
        let mut discovery = Self::new(config.version(), authenticator)?;
        discovery.service.set_service_url(config.service_url())?;
        discovery
            .service
            .configure_client(config.timeout(), config.disable_ssl_verification())?;
        discovery
            .service
            .set_default_headers(&config.default_headers())?;
        tracing::debug!(
            "Discovery client ready for {} (version {})",
            discovery.service.service_url(),
            discovery.version
        );
        Ok(discovery)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_service_url(&mut self, service_url: &str) -> Result<()> {
        self.service.set_service_url(service_url)
    }

    pub fn service(&self) -> &BaseService {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    fn params(&self) -> QueryParams {
        QueryParams::with_version(&self.version)
    }
}
