use anyhow::Result;
use discovery_v2::{DiscoveryV2, NoAuthAuthenticator, TrainingExample};
use httpmock::prelude::*;
use serde_json::json;

const VERSION: &str = "2023-03-31";

fn client(server: &MockServer) -> Result<DiscoveryV2> {
    let mut discovery = DiscoveryV2::new(VERSION, NoAuthAuthenticator)?;
    discovery.set_service_url(&server.base_url())?;
    Ok(discovery)
}

#[tokio::test]
async fn test_create_and_update_training_query() -> Result<()> {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/training_data/queries")
            .json_body(json!({
                "natural_language_query": "router reboot",
                "examples": [{"document_id": "d-1", "collection_id": "c-1", "relevance": 10}]
            }));
        then.status(201).json_body(json!({
            "query_id": "q-1",
            "natural_language_query": "router reboot",
            "created": "2023-06-01T08:00:00Z",
            "examples": [{"document_id": "d-1", "collection_id": "c-1", "relevance": 10}]
        }));
    });
    let update_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/training_data/queries/q-1")
            .json_body(json!({
                "natural_language_query": "router reboot loop",
                "examples": [],
                "filter": "category::network"
            }));
        then.status(201).json_body(json!({
            "query_id": "q-1",
            "natural_language_query": "router reboot loop",
            "filter": "category::network",
            "examples": []
        }));
    });

    let discovery = client(&server)?;
    let examples = vec![TrainingExample::new("d-1", "c-1", 10)];
    let created = discovery
        .create_training_query("p-1", "router reboot", &examples, None)
        .await?
        .result;
    assert_eq!(created.query_id.as_deref(), Some("q-1"));
    assert_eq!(created.examples[0].relevance, 10);

    let updated = discovery
        .update_training_query("p-1", "q-1", "router reboot loop", &[], Some("category::network"))
        .await?
        .result;
    assert_eq!(updated.filter.as_deref(), Some("category::network"));

    create_mock.assert();
    update_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_list_get_and_delete_training_queries() -> Result<()> {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/projects/p-1/training_data/queries");
        then.status(200).json_body(json!({
            "queries": [{"query_id": "q-1", "natural_language_query": "a", "examples": []}]
        }));
    });
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/projects/p-1/training_data/queries/q-1");
        then.status(200)
            .json_body(json!({"query_id": "q-1", "natural_language_query": "a", "examples": []}));
    });
    let delete_one_mock = server.mock(|when, then| {
        when.method(DELETE).path("/v2/projects/p-1/training_data/queries/q-1");
        then.status(204);
    });
    let delete_all_mock = server.mock(|when, then| {
        when.method(DELETE).path("/v2/projects/p-1/training_data/queries");
        then.status(204);
    });

    let discovery = client(&server)?;
    let set = discovery.list_training_queries("p-1").await?.result;
    assert_eq!(set.queries.unwrap().len(), 1);
    let query = discovery.get_training_query("p-1", "q-1").await?.result;
    assert_eq!(query.natural_language_query, "a");
    discovery.delete_training_query("p-1", "q-1").await?;
    discovery.delete_training_queries("p-1").await?;

    list_mock.assert();
    get_mock.assert();
    delete_one_mock.assert();
    delete_all_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_training_query_requires_text() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v2/projects/p-1/training_data/queries");
        then.status(201);
    });

    let discovery = client(&server)?;
    let err = discovery
        .create_training_query("p-1", "", &[], None)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Validation error: natural_language_query must be provided"
    );
    api_mock.assert_hits(0);
    Ok(())
}
