use anyhow::Result;
use discovery_v2::{
    ClassifierModelStatus, CreateClassifierModelOptions, CreateDocumentClassifier,
    CreateEnrichment, DiscoveryV2, EnrichmentOptions, EnrichmentType, NoAuthAuthenticator,
    UpdateDocumentClassifier,
};
use httpmock::prelude::*;
use serde_json::json;

const VERSION: &str = "2023-03-31";

fn client(server: &MockServer) -> Result<DiscoveryV2> {
    let mut discovery = DiscoveryV2::new(VERSION, NoAuthAuthenticator)?;
    discovery.set_service_url(&server.base_url())?;
    Ok(discovery)
}

#[tokio::test]
async fn test_create_dictionary_enrichment_with_file() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/enrichments")
            .query_param("version", VERSION)
            .body_contains("name=\"enrichment\"")
            .body_contains("\"type\":\"dictionary\"")
            .body_contains("name=\"file\"")
            .body_contains("router,modem");
        then.status(201).json_body(json!({
            "enrichment_id": "e-1",
            "name": "devices",
            "type": "dictionary",
            "options": {"languages": ["en"], "entity_type": "device"}
        }));
    });

    let enrichment = CreateEnrichment {
        name: Some("devices".to_string()),
        kind: Some(EnrichmentType::Dictionary),
        options: Some(EnrichmentOptions {
            languages: Some(vec!["en".to_string()]),
            entity_type: Some("device".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let discovery = client(&server)?;
    let created = discovery
        .create_enrichment("p-1", &enrichment, Some(b"router,modem".to_vec()))
        .await?
        .result;

    api_mock.assert();
    assert_eq!(created.enrichment_id.as_deref(), Some("e-1"));
    assert_eq!(created.kind, Some(EnrichmentType::Dictionary));
    Ok(())
}

#[tokio::test]
async fn test_enrichment_get_update_delete() -> Result<()> {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/projects/p-1/enrichments");
        then.status(200).json_body(json!({
            "enrichments": [{"enrichment_id": "e-0", "name": "Part of Speech", "type": "part_of_speech"}]
        }));
    });
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/projects/p-1/enrichments/e-1");
        then.status(200)
            .json_body(json!({"enrichment_id": "e-1", "name": "devices", "type": "dictionary"}));
    });
    let update_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/enrichments/e-1")
            .json_body(json!({"name": "hardware", "description": "Device names"}));
        then.status(200)
            .json_body(json!({"enrichment_id": "e-1", "name": "hardware", "type": "dictionary"}));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/v2/projects/p-1/enrichments/e-1");
        then.status(204);
    });

    let discovery = client(&server)?;
    let listed = discovery.list_enrichments("p-1").await?.result;
    assert_eq!(
        listed.enrichments.unwrap()[0].kind,
        Some(EnrichmentType::PartOfSpeech)
    );
    assert_eq!(
        discovery.get_enrichment("p-1", "e-1").await?.result.name.as_deref(),
        Some("devices")
    );
    let updated = discovery
        .update_enrichment("p-1", "e-1", "hardware", Some("Device names"))
        .await?
        .result;
    assert_eq!(updated.name.as_deref(), Some("hardware"));
    discovery.delete_enrichment("p-1", "e-1").await?;

    list_mock.assert();
    get_mock.assert();
    update_mock.assert();
    delete_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_create_document_classifier_multipart() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/document_classifiers")
            .body_contains("name=\"training_data\"")
            .body_contains("text,label")
            .body_contains("name=\"classifier\"")
            .body_contains("\"answer_field\":\"label\"")
            .body_contains("name=\"test_data\"");
        then.status(201).json_body(json!({
            "classifier_id": "dc-1",
            "name": "tickets",
            "language": "en",
            "answer_field": "label",
            "recognized_fields": ["text", "label"]
        }));
    });

    let classifier = CreateDocumentClassifier {
        name: "tickets".to_string(),
        language: "en".to_string(),
        answer_field: "label".to_string(),
        ..Default::default()
    };
    let discovery = client(&server)?;
    let created = discovery
        .create_document_classifier(
            "p-1",
            b"text,label\nreboot,network\n".to_vec(),
            &classifier,
            Some(b"text,label\nslow,network\n".to_vec()),
        )
        .await?
        .result;

    api_mock.assert();
    assert_eq!(created.classifier_id.as_deref(), Some("dc-1"));
    assert_eq!(created.recognized_fields.unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_create_document_classifier_requires_language_and_answer_field() -> Result<()> {
    let server = MockServer::start();
    let catch_all = server.mock(|_when, then| {
        then.status(201).json_body(json!({"classifier_id": "dc-1", "name": "tickets"}));
    });

    let discovery = client(&server)?;
    let training = b"text,label\nreboot,network\n".to_vec();

    let no_answer_field = CreateDocumentClassifier {
        name: "tickets".to_string(),
        language: "en".to_string(),
        ..Default::default()
    };
    let err = discovery
        .create_document_classifier("p-1", training.clone(), &no_answer_field, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Validation error: answer_field must be provided");

    let no_language = CreateDocumentClassifier {
        name: "tickets".to_string(),
        answer_field: "label".to_string(),
        ..Default::default()
    };
    let err = discovery
        .create_document_classifier("p-1", training, &no_language, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Validation error: language must be provided");

    catch_all.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_document_classifier_lifecycle() -> Result<()> {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/projects/p-1/document_classifiers");
        then.status(200)
            .json_body(json!({"classifiers": [{"classifier_id": "dc-1", "name": "tickets"}]}));
    });
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/v2/projects/p-1/document_classifiers/dc-1");
        then.status(200)
            .json_body(json!({"classifier_id": "dc-1", "name": "tickets"}));
    });
    let update_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/document_classifiers/dc-1")
            .body_contains("name=\"classifier\"")
            .body_contains("{\"description\":\"Support tickets\"}");
        then.status(201).json_body(json!({
            "classifier_id": "dc-1",
            "name": "tickets",
            "description": "Support tickets"
        }));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/v2/projects/p-1/document_classifiers/dc-1");
        then.status(204);
    });

    let discovery = client(&server)?;
    assert_eq!(
        discovery.list_document_classifiers("p-1").await?.result.classifiers.unwrap().len(),
        1
    );
    assert_eq!(
        discovery.get_document_classifier("p-1", "dc-1").await?.result.name,
        "tickets"
    );
    let update = UpdateDocumentClassifier {
        description: Some("Support tickets".to_string()),
        ..Default::default()
    };
    let updated = discovery
        .update_document_classifier("p-1", "dc-1", &update, None, None)
        .await?
        .result;
    assert_eq!(updated.description.as_deref(), Some("Support tickets"));
    discovery.delete_document_classifier("p-1", "dc-1").await?;

    list_mock.assert();
    get_mock.assert();
    update_mock.assert();
    delete_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_classifier_models() -> Result<()> {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/document_classifiers/dc-1/models")
            .json_body(json!({"name": "v1", "learning_rate": 0.1, "training_max_steps": 1000}));
        then.status(201)
            .json_body(json!({"model_id": "m-1", "name": "v1", "status": "training"}));
    });
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/projects/p-1/document_classifiers/dc-1/models");
        then.status(200)
            .json_body(json!({"models": [{"model_id": "m-1", "name": "v1", "status": "available"}]}));
    });
    let get_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/projects/p-1/document_classifiers/dc-1/models/m-1");
        then.status(200).json_body(json!({
            "model_id": "m-1",
            "name": "v1",
            "status": "available",
            "evaluation": {
                "micro_average": {"precision": 0.9, "recall": 0.8, "f1": 0.85},
                "macro_average": {"precision": 0.7, "recall": 0.6, "f1": 0.65},
                "per_class": [{"name": "network", "precision": 0.9, "recall": 0.8, "f1": 0.85}]
            }
        }));
    });
    let update_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/projects/p-1/document_classifiers/dc-1/models/m-1")
            .json_body(json!({"description": "first cut"}));
        then.status(201).json_body(json!({
            "model_id": "m-1",
            "name": "v1",
            "description": "first cut"
        }));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/v2/projects/p-1/document_classifiers/dc-1/models/m-1");
        then.status(204);
    });

    let discovery = client(&server)?;
    let options = CreateClassifierModelOptions {
        learning_rate: Some(0.1),
        training_max_steps: Some(1000),
        ..CreateClassifierModelOptions::new("v1")
    };
    let created = discovery
        .create_document_classifier_model("p-1", "dc-1", &options)
        .await?
        .result;
    assert_eq!(created.status, Some(ClassifierModelStatus::Training));

    let models = discovery
        .list_document_classifier_models("p-1", "dc-1")
        .await?
        .result;
    assert_eq!(models.models.unwrap().len(), 1);

    let model = discovery
        .get_document_classifier_model("p-1", "dc-1", "m-1")
        .await?
        .result;
    let evaluation = model.evaluation.unwrap();
    assert_eq!(evaluation.per_class[0].name, "network");

    let updated = discovery
        .update_document_classifier_model("p-1", "dc-1", "m-1", None, Some("first cut"))
        .await?
        .result;
    assert_eq!(updated.description.as_deref(), Some("first cut"));

    discovery
        .delete_document_classifier_model("p-1", "dc-1", "m-1")
        .await?;

    create_mock.assert();
    list_mock.assert();
    get_mock.assert();
    update_mock.assert();
    delete_mock.assert();
    Ok(())
}
