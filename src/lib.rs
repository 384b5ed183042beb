//! Client library for the IBM Watson Discovery v2 REST API.
//!
//! ```no_run
//! use discovery_v2::{BearerTokenAuthenticator, DiscoveryV2, QueryOptions};
//!
//! # async fn run() -> discovery_v2::Result<()> {
//! let mut discovery = DiscoveryV2::new("2023-03-31", BearerTokenAuthenticator::new("token")?)?;
//! discovery.set_service_url("https://api.us-south.discovery.watson.cloud.ibm.com/instances/abc")?;
//!
//! let response = discovery
//!     .query("project-id", &QueryOptions::natural_language("reset my router"))
//!     .await?;
//! println!("{} matches", response.result.matching_results.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServiceConfig;

pub use adapters::auth::{BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
pub use core::discovery::{DiscoveryV2, DEFAULT_SERVICE_URL};
pub use core::service::DetailedResponse;
pub use domain::model::*;
pub use domain::ports::{Authenticator, ConfigProvider};
pub use utils::error::{DiscoveryError, Result};
