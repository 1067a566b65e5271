use super::*;

/// Tests loading when the settings file does not exist yet.
///
/// Verifies that the store creates the file containing an empty object and
/// returns empty configs instead of an error.
///
/// Expected: empty configs, file created with `{}`
#[tokio::test]
async fn creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let store = ServerConfigStore::new(&path);

    let configs = store.load().await;

    assert!(configs.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

/// Tests loading a file containing malformed JSON.
///
/// Verifies that the store resets the file to an empty object, preserves the
/// original bytes at the `.corrupt` sibling path, and returns empty configs.
///
/// Expected: empty configs, reset file, quarantined original
#[tokio::test]
async fn resets_and_quarantines_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "{ definitely not json").unwrap();
    let store = ServerConfigStore::new(&path);

    let configs = store.load().await;

    assert!(configs.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

    let quarantined = dir.path().join("server_configs.json.corrupt");
    assert_eq!(
        std::fs::read_to_string(quarantined).unwrap(),
        "{ definitely not json"
    );
}

/// Tests loading a file whose top level is not an object.
///
/// Verifies that valid-but-wrong-shape JSON is treated the same as corrupt
/// JSON.
///
/// Expected: empty configs, reset file
#[tokio::test]
async fn resets_non_object_top_level() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    let store = ServerConfigStore::new(&path);

    let configs = store.load().await;

    assert!(configs.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

/// Tests loading a well-formed settings file.
///
/// Expected: configs with the stored guild entry
#[tokio::test]
async fn loads_valid_configs() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(
        &path,
        serde_json::to_string_pretty(&sample_configs()).unwrap(),
    )
    .unwrap();
    let store = ServerConfigStore::new(&path);

    let configs = store.load().await;

    let game_results = configs.game_results(GUILD).expect("entry should load");
    assert_eq!(game_results.channel_id, "200");
    assert_eq!(game_results.submitter_role_ids, vec!["11"]);
    assert_eq!(game_results.participant_role_ids, vec!["22", "33"]);
}
