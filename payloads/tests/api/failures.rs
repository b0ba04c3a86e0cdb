use payloads::ClientError;
use reqwest::StatusCode;
use test_helpers::{
    MISSING_ID, assert_status_code, property_details_a, spawn_app,
};

#[tokio::test]
async fn unknown_property_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_status_code(
        app.client.get_property(&MISSING_ID).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client
            .update_property(&MISSING_ID, &property_details_a())
            .await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.delete_property(&MISSING_ID).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn server_failures_surface_as_api_errors() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let created = app.create_test_property().await?;

    app.fail_requests(true);
    assert_status_code(
        app.client.list_properties().await,
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    assert_status_code(
        app.client.delete_property(&created.id).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    // nothing was removed by the failed delete
    app.fail_requests(false);
    assert_eq!(app.client.list_properties().await?, vec![created]);

    Ok(())
}

#[tokio::test]
async fn missing_required_field_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("http://127.0.0.1:{}/api/properties", app.port))
        .json(&serde_json::json!({ "name": "No price" }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.client.list_properties().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = payloads::APIClient {
        address: "http://127.0.0.1:1".into(),
        inner_client: app.client.inner_client.clone(),
    };

    let error = client.list_properties().await.unwrap_err();
    assert!(matches!(error, ClientError::Network(_)));
    assert_eq!(error.status(), None);
    assert!(!error.is_not_found());

    Ok(())
}
