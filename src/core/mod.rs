pub mod discovery;
pub mod service;

pub use crate::domain::ports::{Authenticator, ConfigProvider};
pub use crate::utils::error::Result;
pub use discovery::DiscoveryV2;
pub use service::{BaseService, DetailedResponse, QueryParams};
