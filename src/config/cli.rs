use crate::adapters::auth::{BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator};
use crate::config::toml_config::ServiceConfig;
use crate::domain::ports::Authenticator;
use crate::utils::error::{DiscoveryError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_VERSION_DATE: &str = "2023-03-31";

#[derive(Debug, Clone, Parser)]
#[command(name = "discovery")]
#[command(about = "Command line client for the Watson Discovery v2 API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Service endpoint, overrides the config file")]
    pub service_url: Option<String>,

    #[arg(long, global = true, help = "API version date (YYYY-MM-DD)")]
    pub version_date: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML service config")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, conflicts_with = "apikey")]
    pub bearer_token: Option<String>,

    #[arg(long, global = true)]
    pub apikey: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List projects
    Projects,
    /// Show one project
    Project { project_id: String },
    /// List the collections of a project
    Collections { project_id: String },
    /// List the queryable fields of a project
    Fields {
        project_id: String,
        #[arg(long, value_delimiter = ',')]
        collection_ids: Vec<String>,
    },
    /// Run a search
    Query {
        project_id: String,
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        nlq: Option<String>,
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        count: Option<i64>,
        #[arg(long, value_delimiter = ',')]
        collection_ids: Vec<String>,
    },
    /// Suggest completions for a prefix
    Autocomplete {
        project_id: String,
        prefix: String,
        #[arg(long)]
        count: Option<i64>,
    },
    /// Search ingestion notices of a project
    Notices {
        project_id: String,
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        count: Option<i64>,
    },
    /// List the documents of a collection
    Documents {
        project_id: String,
        collection_id: String,
        #[arg(long)]
        count: Option<i64>,
    },
    /// Delete all data labeled with a customer id
    DeleteUserData { customer_id: String },
}

impl CliConfig {
    /// Config file if given, then command line overrides on top.
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::new(DEFAULT_VERSION_DATE),
        };

        if let Some(url) = &self.service_url {
            config.service.url = Some(url.clone());
        }
        if let Some(version) = &self.version_date {
            config.service.version = version.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn authenticator(&self) -> Result<Box<dyn Authenticator>> {
        match (&self.bearer_token, &self.apikey) {
            (Some(_), Some(_)) => Err(DiscoveryError::Config {
                message: "Use either --bearer-token or --apikey, not both".to_string(),
            }),
            (Some(token), None) => Ok(Box::new(BearerTokenAuthenticator::new(token.as_str())?)),
            (None, Some(apikey)) => Ok(Box::new(BasicAuthenticator::from_apikey(apikey.as_str())?)),
            (None, None) => {
                tracing::warn!("⚠️ No credentials given, requests are sent unauthenticated");
                Ok(Box::new(NoAuthAuthenticator))
            }
        }
    }
}
