use clap::Parser;
use discovery_v2::config::{CliConfig, Command};
use discovery_v2::utils::logger;
use discovery_v2::{
    AutocompletionOptions, DiscoveryError, DiscoveryV2, ListDocumentsOptions,
    NoticesQueryOptions, QueryOptions, Result,
};
use serde::Serialize;
use serde_json::Value;

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

async fn run(cli: CliConfig) -> Result<Value> {
    let config = cli.service_config()?;
    let discovery = DiscoveryV2::from_config(&config, cli.authenticator()?)?;
    tracing::info!("🔗 Using {}", discovery.service().service_url());

    match cli.command {
        Command::Projects => to_json(discovery.list_projects().await?.result),
        Command::Project { project_id } => to_json(discovery.get_project(&project_id).await?.result),
        Command::Collections { project_id } => {
            to_json(discovery.list_collections(&project_id).await?.result)
        }
        Command::Fields {
            project_id,
            collection_ids,
        } => {
            let response = discovery
                .list_fields(&project_id, non_empty(collection_ids).as_deref())
                .await?;
            to_json(response.result)
        }
        Command::Query {
            project_id,
            query,
            nlq,
            filter,
            count,
            collection_ids,
        } => {
            let options = QueryOptions {
                collection_ids: non_empty(collection_ids),
                filter,
                query,
                natural_language_query: nlq,
                count,
                ..Default::default()
            };
            to_json(discovery.query(&project_id, &options).await?.result)
        }
        Command::Autocomplete {
            project_id,
            prefix,
            count,
        } => {
            let options = AutocompletionOptions {
                count,
                ..Default::default()
            };
            let response = discovery
                .get_autocompletion(&project_id, &prefix, &options)
                .await?;
            to_json(response.result)
        }
        Command::Notices {
            project_id,
            filter,
            count,
        } => {
            let options = NoticesQueryOptions {
                filter,
                count,
                ..Default::default()
            };
            to_json(discovery.query_notices(&project_id, &options).await?.result)
        }
        Command::Documents {
            project_id,
            collection_id,
            count,
        } => {
            let options = ListDocumentsOptions {
                count,
                ..Default::default()
            };
            let response = discovery
                .list_documents(&project_id, &collection_id, &options)
                .await?;
            to_json(response.result)
        }
        Command::DeleteUserData { customer_id } => {
            let response = discovery.delete_user_data(&customer_id).await?;
            tracing::info!("🗑️ User data deletion accepted for {}", customer_id);
            Ok(serde_json::json!({ "status": response.status }))
        }
    }
}

fn exit_code(error: &DiscoveryError) -> i32 {
    match error {
        DiscoveryError::Config { .. }
        | DiscoveryError::InvalidConfigValue { .. }
        | DiscoveryError::ConfigValidation { .. }
        | DiscoveryError::Validation { .. } => 2,
        DiscoveryError::Service { status, .. } if *status < 500 => 1,
        _ => 3,
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting discovery CLI");
    tracing::debug!("CLI command: {:?}", cli.command);

    match run(cli).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(3);
            }
        },
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    }
}
