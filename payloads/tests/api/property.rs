use payloads::{FormMode, PropertyDraft, PropertyField, PropertyId};
use rust_decimal::dec;
use test_helpers::{
    property_details_a, property_details_b, spawn_app, store::FALLBACK_IMAGE,
};

#[tokio::test]
async fn create_read_update_delete_property() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let created = app.create_test_property().await?;
    assert_eq!(created.id, PropertyId(1));
    assert_eq!(created.image_url.as_deref(), Some(FALLBACK_IMAGE));

    let fetched = app.client.get_property(&created.id).await?;
    assert_eq!(fetched, created);

    let updated = app
        .client
        .update_property(&created.id, &property_details_b())
        .await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.details, property_details_b());

    let listed = app.client.list_properties().await?;
    assert_eq!(listed, vec![updated]);

    app.client.delete_property(&created.id).await?;
    assert!(app.client.list_properties().await?.is_empty());
    assert!(
        app.client
            .get_property(&created.id)
            .await
            .unwrap_err()
            .is_not_found()
    );

    Ok(())
}

#[tokio::test]
async fn list_is_ordered_by_id() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let a = app.client.create_property(&property_details_a()).await?;
    let b = app.client.create_property(&property_details_b()).await?;

    let ids: Vec<_> = app
        .client
        .list_properties()
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

#[tokio::test]
async fn draft_typed_as_text_is_submitted_with_numbers() -> anyhow::Result<()>
{
    let app = spawn_app().await;
    let draft = PropertyDraft::default()
        .with(PropertyField::Name, "Garden Duplex")
        .with(PropertyField::Price, "1750")
        .with(PropertyField::Location, "Eastside")
        .with(PropertyField::Bedrooms, "3")
        .with(PropertyField::Bathrooms, "2");
    let details = draft.to_details()?;

    let body = serde_json::to_value(&details)?;
    assert!(body["price"].is_number());
    assert_eq!(body["bedrooms"], serde_json::json!(3));
    assert_eq!(body["bathrooms"], serde_json::json!(2));

    let created = app.client.submit_property(&FormMode::Create, &details).await?;
    assert_eq!(created.bedrooms, 3);
    assert_eq!(created.bathrooms, 2);
    assert_eq!(created.price, dec!(1750));
    assert_eq!(app.request_count(), 1);

    Ok(())
}

#[tokio::test]
async fn submit_in_edit_mode_updates_in_place() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let created = app.create_test_property().await?;

    let draft =
        PropertyDraft::from(&created).with(PropertyField::Price, "1300");
    let mode = FormMode::Edit(created.id);
    let updated = app.client.submit_property(&mode, &draft.to_details()?).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, dec!(1300));
    assert_eq!(app.client.list_properties().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn delete_of_listed_property_leaves_empty_list() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let lakeview = app.create_test_property().await?;
    assert_eq!(lakeview.name, "Lakeview");

    app.client.delete_property(&lakeview.id).await?;

    assert_eq!(app.client.list_properties().await?, vec![]);

    Ok(())
}
