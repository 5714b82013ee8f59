//! Definition store tests
//!
//! Every contract test runs against both stores.

use plugrack_domain::entities::ProviderDefinition;
use plugrack_domain::error::Error;
use plugrack_domain::repositories::ProviderRepository;
use plugrack_providers::notification::{
    LogNotificationSettings, NotificationSettings, WebhookNotificationSettings,
};
use plugrack_providers::{InMemoryProviderRepository, JsonFileProviderRepository};

type Settings = NotificationSettings;

fn log_definition(name: &str) -> ProviderDefinition<Settings> {
    ProviderDefinition::new(
        name,
        "LogNotification",
        LogNotificationSettings::CONTRACT,
        NotificationSettings::Log(LogNotificationSettings::default()),
    )
}

async fn assigns_increasing_ids(store: &dyn ProviderRepository<Settings>) {
    let first = store.insert(log_definition("first")).await.expect("insert");
    let second = store.insert(log_definition("second")).await.expect("insert");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.get(2).await.expect("get"), second);

    let all = store.all().await.expect("all");
    assert_eq!(all, vec![first, second]);
}

async fn rejects_saved_insert(store: &dyn ProviderRepository<Settings>) {
    let err = store
        .insert(log_definition("saved").with_id(7))
        .await
        .expect_err("should reject");
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(store.all().await.expect("all").is_empty());
}

async fn update_replaces_definition(store: &dyn ProviderRepository<Settings>) {
    let mut stored = store.insert(log_definition("before")).await.expect("insert");
    stored.name = "after".to_string();
    stored.implementation = "WebhookNotification".to_string();
    stored.config_contract = WebhookNotificationSettings::CONTRACT.to_string();
    stored.settings = NotificationSettings::Webhook(WebhookNotificationSettings {
        url: "https://example.com/hook".to_string(),
        ..Default::default()
    });

    store.update(&stored).await.expect("update");

    assert_eq!(store.get(stored.id).await.expect("get"), stored);
}

async fn update_requires_known_id(store: &dyn ProviderRepository<Settings>) {
    let unsaved = store.update(&log_definition("unsaved")).await;
    assert!(matches!(unsaved, Err(Error::InvalidArgument { .. })));

    let unknown = store.update(&log_definition("unknown").with_id(42)).await;
    assert!(unknown.expect_err("should fail").is_not_found());
    assert!(store.all().await.expect("all").is_empty());
}

async fn delete_is_idempotent(store: &dyn ProviderRepository<Settings>) {
    let stored = store.insert(log_definition("doomed")).await.expect("insert");

    store.delete(stored.id).await.expect("delete");
    store.delete(stored.id).await.expect("second delete");

    assert!(store.get(stored.id).await.expect_err("gone").is_not_found());

    let next = store.insert(log_definition("next")).await.expect("insert");
    assert_eq!(next.id, stored.id + 1, "ids are never reused");
}

#[tokio::test]
async fn test_in_memory_contract() {
    assigns_increasing_ids(&InMemoryProviderRepository::new()).await;
    rejects_saved_insert(&InMemoryProviderRepository::new()).await;
    update_replaces_definition(&InMemoryProviderRepository::new()).await;
    update_requires_known_id(&InMemoryProviderRepository::new()).await;
    delete_is_idempotent(&InMemoryProviderRepository::new()).await;
}

#[tokio::test]
async fn test_json_file_contract() {
    let dir = tempfile::tempdir().expect("tempdir");
    let open = |name: &str| JsonFileProviderRepository::<Settings>::open(dir.path().join(name));

    assigns_increasing_ids(&open("a.json").await.expect("open")).await;
    rejects_saved_insert(&open("b.json").await.expect("open")).await;
    update_replaces_definition(&open("c.json").await.expect("open")).await;
    update_requires_known_id(&open("d.json").await.expect("open")).await;
    delete_is_idempotent(&open("e.json").await.expect("open")).await;
}

#[tokio::test]
async fn test_json_file_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("notification.json");

    let stored = {
        let store = JsonFileProviderRepository::<Settings>::open(&path)
            .await
            .expect("open");
        let kept = store.insert(log_definition("kept")).await.expect("insert");
        let dropped = store.insert(log_definition("dropped")).await.expect("insert");
        store.delete(dropped.id).await.expect("delete");
        kept
    };

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let reopened = JsonFileProviderRepository::<Settings>::open(&path)
        .await
        .expect("reopen");
    assert_eq!(reopened.all().await.expect("all"), vec![stored]);

    let next = reopened.insert(log_definition("next")).await.expect("insert");
    assert_eq!(next.id, 3, "deleted ids stay retired across restarts");
}

#[tokio::test]
async fn test_json_file_corrupt_document_is_database_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, b"{ not json").expect("write");

    let err = JsonFileProviderRepository::<Settings>::open(&path)
        .await
        .expect_err("should fail");
    assert!(matches!(err, Error::Database { .. }));
}

#[tokio::test]
async fn test_json_file_document_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notification.json");
    let store = JsonFileProviderRepository::<Settings>::open(&path)
        .await
        .expect("open");
    store.insert(log_definition("Log")).await.expect("insert");

    let document: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).expect("read")).expect("json");

    assert_eq!(document["next_id"], 2);
    assert_eq!(document["definitions"][0]["implementation"], "LogNotification");
    assert_eq!(
        document["definitions"][0]["settings"]["contract"],
        "LogNotificationSettings"
    );
}

#[tokio::test]
async fn test_json_file_failed_writes_leave_state_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notification.json");
    let store = JsonFileProviderRepository::<Settings>::open(&path)
        .await
        .expect("open");
    let stored = store.insert(log_definition("kept")).await.expect("insert");

    // A directory in place of the document makes every rename fail.
    std::fs::remove_file(&path).expect("remove");
    std::fs::create_dir(&path).expect("mkdir");
    std::fs::write(path.join("occupied"), b"x").expect("write");

    let insert = store.insert(log_definition("lost")).await;
    assert!(matches!(insert, Err(Error::Io { .. })));

    let mut renamed = stored.clone();
    renamed.name = "renamed".to_string();
    let update = store.update(&renamed).await;
    assert!(matches!(update, Err(Error::Io { .. })));

    let delete = store.delete(stored.id).await;
    assert!(matches!(delete, Err(Error::Io { .. })));

    assert_eq!(store.all().await.expect("all"), vec![stored.clone()]);
    assert_eq!(store.next_id().await, 2);

    std::fs::remove_dir_all(&path).expect("cleanup");
    let next = store.insert(log_definition("next")).await.expect("insert");
    assert_eq!(next.id, 2, "failed inserts do not consume ids");
}

#[tokio::test]
async fn test_json_file_exhausted_ids_are_database_errors() {
    let dir = tempfile::tempdir().expect("tempdir");

    let full = dir.path().join("full.json");
    std::fs::write(
        &full,
        format!(r#"{{"next_id": {}, "definitions": []}}"#, i32::MAX),
    )
    .expect("write");
    let store = JsonFileProviderRepository::<Settings>::open(&full)
        .await
        .expect("open");
    let err = store
        .insert(log_definition("overflow"))
        .await
        .expect_err("no id left");
    assert!(matches!(err, Error::Database { .. }));
    assert!(store.all().await.expect("all").is_empty());
    assert_eq!(store.next_id().await, i32::MAX);

    let edited = dir.path().join("edited.json");
    let mut definition = serde_json::to_value(log_definition("edited")).expect("serialize");
    definition["id"] = i32::MAX.into();
    std::fs::write(
        &edited,
        serde_json::to_vec(&serde_json::json!({ "next_id": 1, "definitions": [definition] }))
            .expect("serialize"),
    )
    .expect("write");
    let err = JsonFileProviderRepository::<Settings>::open(&edited)
        .await
        .expect_err("no id after the highest");
    assert!(matches!(err, Error::Database { .. }));
}
