use super::*;

/// Tests that saved configs load back identically.
///
/// Expected: Ok save, loaded configs equal to the saved ones
#[tokio::test]
async fn round_trips_saved_configs() {
    let dir = TempDir::new().unwrap();
    let store = ServerConfigStore::new(store_path(&dir));
    let configs = sample_configs();

    store.save(&configs).await.expect("save should succeed");

    assert_eq!(store.load().await, configs);
}

/// Tests that no backup file lingers after a successful overwrite.
///
/// Verifies that overwriting an existing settings file goes through the
/// `.backup` sibling and that the backup is removed once the write succeeds.
///
/// Expected: Ok save, no `.backup` file on disk
#[tokio::test]
async fn removes_backup_after_successful_save() {
    let dir = TempDir::new().unwrap();
    let store = ServerConfigStore::new(store_path(&dir));

    store.save(&ServerConfigs::default()).await.unwrap();
    store.save(&sample_configs()).await.unwrap();

    let backup = dir.path().join("server_configs.json.backup");
    assert!(!backup.exists());
    assert_eq!(store.load().await, sample_configs());
}

/// Tests that an unwritable path is reported as an error.
///
/// The store path points at a directory, so both the backup copy and the
/// write itself are impossible.
///
/// Expected: Err from save, no panic
#[tokio::test]
async fn reports_failure_for_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let store = ServerConfigStore::new(dir.path());

    let result = store.save(&sample_configs()).await;

    assert!(result.is_err());
}
