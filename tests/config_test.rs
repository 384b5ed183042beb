use anyhow::Result;
use discovery_v2::utils::validation::Validate;
use discovery_v2::{ConfigProvider, DiscoveryV2, NoAuthAuthenticator, ServiceConfig};
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// A client built from a config file uses its URL, version and headers.
#[tokio::test]
async fn test_client_from_config_file() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/instances/inst-1/v2/projects")
            .query_param("version", "2020-08-30")
            .header("x-watson-learning-opt-out", "true");
        then.status(200).json_body(json!({"projects": []}));
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("discovery.toml");
    let config_content = format!(
        r#"
[service]
url = "{}/instances/inst-1"
version = "2020-08-30"
timeout_seconds = 5

[headers]
X-Watson-Learning-Opt-Out = "true"
"#,
        server.base_url()
    );
    tokio::fs::write(&config_path, config_content).await?;

    let config = ServiceConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.version(), "2020-08-30");

    let discovery = DiscoveryV2::from_config(&config, NoAuthAuthenticator)?;
    let response = discovery.list_projects().await?;

    api_mock.assert();
    assert_eq!(response.result.projects, Some(vec![]));
    Ok(())
}

#[test]
fn test_invalid_header_name_is_rejected() -> Result<()> {
    let config = ServiceConfig::from_toml_str(
        r#"
[service]
version = "2023-03-31"

[headers]
"bad header" = "x"
"#,
    )?;

    assert!(DiscoveryV2::from_config(&config, NoAuthAuthenticator).is_err());
    Ok(())
}
