use std::sync::Arc;

use copykit_settings::{
    DEFAULT_SELECTOR, KeyValueStore, SETTINGS_KEY, Settings, SettingsPatch, SettingsService,
    SqliteKeyValueStore,
};

#[tokio::test]
async fn sqlite_store_round_trips_settings() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteKeyValueStore::in_memory().await?;
    let service = SettingsService::new(Arc::new(store.clone()));

    let initial = service.get().await?;
    assert_eq!(initial, Settings::default());

    service
        .set(&SettingsPatch::with_selector("div.code"), &initial)
        .await?;
    let updated = service.get().await?;
    assert_eq!(updated.selector, "div.code");

    let raw = store
        .get(SETTINGS_KEY)
        .await?
        .expect("record should be persisted");
    let stored: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(stored["selector"], "div.code");

    Ok(())
}

#[tokio::test]
async fn sqlite_store_last_write_wins() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(SqliteKeyValueStore::in_memory().await?);
    let service = SettingsService::new(store);

    let current = service.get().await?;
    let first = service
        .set(&SettingsPatch::with_selector(".highlight"), &current)
        .await?;
    service
        .set(&SettingsPatch::with_selector("pre.snippet"), &first)
        .await?;

    assert_eq!(service.get().await?.selector, "pre.snippet");
    Ok(())
}

#[tokio::test]
async fn sqlite_store_persists_across_reconnects() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let url = format!(
        "sqlite://{}",
        dir.path().join("copykit.db").to_string_lossy()
    );

    {
        let service = SettingsService::new(Arc::new(SqliteKeyValueStore::connect(&url).await?));
        let current = service.get().await?;
        service
            .set(&SettingsPatch::with_selector("code.sample"), &current)
            .await?;
    }

    let reopened = SettingsService::new(Arc::new(SqliteKeyValueStore::connect(&url).await?));
    assert_eq!(reopened.get().await?.selector, "code.sample");
    Ok(())
}

#[tokio::test]
async fn blank_stored_selector_degrades_to_default() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(SqliteKeyValueStore::in_memory().await?);
    store.put(SETTINGS_KEY, r#"{"selector":"  "}"#).await?;

    let service = SettingsService::new(store);
    assert_eq!(service.get().await?.selector, DEFAULT_SELECTOR);
    Ok(())
}
