//! Integration tests for tenant info and shape selection.

use crystallize_onboard::prompt::{PromptRecord, ScriptedPrompter};
use crystallize_onboard::shape::{select_shape, ShapeError, ShapeQuery};
use crystallize_onboard::tenant::{fetch_tenant_info, TenantContext};
use crystallize_onboard::{
    ApiUrl, Credentials, GraphqlClient, GraphqlError, OnboardConfig, TenantIdentifier,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> GraphqlClient {
    let config = OnboardConfig::builder()
        .api_url(ApiUrl::new(format!("{}/graphql", server.uri())).unwrap())
        .build();
    GraphqlClient::new(&Credentials::new("token-id", "token-secret"), Some(&config)).unwrap()
}

fn create_context(server: &MockServer, language: Option<&str>) -> TenantContext {
    TenantContext::new(
        "t-1".to_string(),
        TenantIdentifier::new("demo").unwrap(),
        language.map(str::to_string),
        create_client(server),
    )
}

async fn mount_tenant_info(server: &MockServer, shapes: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "id": "t-1" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "tenant": {
                    "get": {
                        "identifier": "demo",
                        "rootItemId": "root-1",
                        "shapes": shapes,
                        "vatTypes": [{ "id": "vat-1", "percent": 25.0, "name": "Standard" }]
                    }
                }
            }
        })))
        .mount(server)
        .await;
}

fn sample_shapes() -> Value {
    json!([
        {
            "id": "default-product",
            "type": "product",
            "name": "Default product",
            "components": [{ "id": "description", "type": "richText" }]
        },
        { "id": "folder", "type": "folder", "name": "Folder", "components": [] },
        { "id": "t-shirt", "type": "product", "name": "T-shirt", "components": [] }
    ])
}

// ============================================================================
// Tenant Info Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_tenant_info_returns_snapshot() {
    let server = MockServer::start().await;
    mount_tenant_info(&server, sample_shapes()).await;

    let info = fetch_tenant_info(&create_client(&server), "t-1").await.unwrap();

    assert_eq!(info.identifier, "demo");
    assert_eq!(info.root_item_id, "root-1");
    assert_eq!(info.shapes.len(), 3);
    assert_eq!(info.shapes[0].components[0].component_type, "richText");
    assert_eq!(info.vat_types[0].name, "Standard");
}

#[tokio::test]
async fn test_fetch_tenant_info_null_tenant_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "tenant": { "get": null } } })),
        )
        .mount(&server)
        .await;

    let result = fetch_tenant_info(&create_client(&server), "t-1").await;

    assert!(matches!(result, Err(GraphqlError::MissingData { .. })));
}

// ============================================================================
// Shape Selection Tests
// ============================================================================

#[tokio::test]
async fn test_multiple_shapes_prompt_with_names() {
    let server = MockServer::start().await;
    mount_tenant_info(&server, sample_shapes()).await;

    let prompter = ScriptedPrompter::new().with_choice(2);
    let context = create_context(&server, Some("en"));
    let selected = select_shape(&context, &prompter, ShapeQuery::new())
        .await
        .unwrap();

    assert_eq!(selected.shape_id, "t-shirt");
    assert_eq!(selected.shape.name, "T-shirt");
    assert_eq!(selected.root_item_id, "root-1");
    assert_eq!(
        prompter.select_prompts(),
        vec![PromptRecord::Select {
            message: "Select a shape".to_string(),
            labels: vec![
                "Default product".to_string(),
                "Folder".to_string(),
                "T-shirt".to_string(),
            ],
        }]
    );
}

#[tokio::test]
async fn test_custom_message_and_filter() {
    let server = MockServer::start().await;
    mount_tenant_info(&server, sample_shapes()).await;

    let prompter = ScriptedPrompter::new().with_choice(0);
    let query = ShapeQuery::new()
        .of_type("product")
        .message("Pick a product shape");
    let selected = select_shape(&create_context(&server, Some("en")), &prompter, query)
        .await
        .unwrap();

    assert_eq!(selected.shape_id, "default-product");
    assert_eq!(
        prompter.select_prompts(),
        vec![PromptRecord::Select {
            message: "Pick a product shape".to_string(),
            labels: vec!["Default product".to_string(), "T-shirt".to_string()],
        }]
    );
}

#[tokio::test]
async fn test_single_match_is_selected_without_prompt() {
    let server = MockServer::start().await;
    mount_tenant_info(&server, sample_shapes()).await;

    let prompter = ScriptedPrompter::new();
    let query = ShapeQuery::new().filter(|shape| shape.shape_type == "folder");
    let selected = select_shape(&create_context(&server, Some("en")), &prompter, query)
        .await
        .unwrap();

    assert_eq!(selected.shape_id, "folder");
    assert_eq!(selected.shape.id, selected.shape_id);
    assert_eq!(selected.root_item_id, "root-1");
    assert!(prompter.select_prompts().is_empty());
    assert!(prompter.infos().contains(&"Using shape Folder".to_string()));
}

#[tokio::test]
async fn test_filter_excluding_everything_errors_before_prompting() {
    let server = MockServer::start().await;
    mount_tenant_info(&server, sample_shapes()).await;

    let prompter = ScriptedPrompter::new().with_choice(0);
    let query = ShapeQuery::new().of_type("document");
    let result = select_shape(&create_context(&server, Some("no")), &prompter, query).await;

    match result {
        Err(ShapeError::NoShapes { url }) => {
            assert_eq!(url, "https://pim.crystallize.com/@demo/no/settings/shapes");
        }
        other => panic!("expected NoShapes, got {other:?}"),
    }
    assert!(prompter.select_prompts().is_empty());
}

#[tokio::test]
async fn test_tenant_without_shapes_links_default_language() {
    let server = MockServer::start().await;
    mount_tenant_info(&server, json!([])).await;

    let result = select_shape(
        &create_context(&server, None),
        &ScriptedPrompter::new(),
        ShapeQuery::new(),
    )
    .await;

    match result {
        Err(error @ ShapeError::NoShapes { .. }) => {
            assert!(error
                .to_string()
                .contains("https://pim.crystallize.com/@demo/en/settings/shapes"));
        }
        other => panic!("expected NoShapes, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_failure_is_graphql_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let result = select_shape(
        &create_context(&server, Some("en")),
        &ScriptedPrompter::new(),
        ShapeQuery::new(),
    )
    .await;

    assert!(matches!(result, Err(ShapeError::Graphql(_))));
}
