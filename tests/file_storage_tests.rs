//! End-to-end tests against on-disk storage.

use muggins::config::GameConfig;
use muggins::core::GameState;
use muggins::render::{GameView, TextRenderer};
use muggins::storage::{FileStorage, Storage};
use muggins::store::GameStore;
use std::fs;

fn quiet(_: &GameView) {}

#[test]
fn game_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = GameStore::open(
            GameConfig::default(),
            FileStorage::new(dir.path()),
            quiet as fn(&GameView),
        );
        store.rename_player(0, "Ada");
        store.add_score(0, 35);
        store.add_score(0, 10);
        store.add_score(1, 5);
        store.undo_score(0);
    }

    let store = GameStore::open(
        GameConfig::default(),
        FileStorage::new(dir.path()),
        quiet as fn(&GameView),
    );

    let ada = store.state().player(0).unwrap();
    assert_eq!(ada.name(), "Ada");
    assert_eq!(ada.score(), 35);
    assert_eq!(ada.history().len(), 1);
    assert_eq!(store.state().player(1).unwrap().score(), 5);
}

#[test]
fn blob_lives_under_storage_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GameStore::open(
        GameConfig::default(),
        FileStorage::new(dir.path()),
        quiet as fn(&GameView),
    );

    store.add_score(1, 20);

    let blob = fs::read_to_string(dir.path().join("domino-counter.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json["players"][1]["score"], 20);
    assert_eq!(json["players"][1]["history"][0]["points"], 20);
    assert!(json["players"][1]["history"][0]["timestamp"].is_string());
}

#[test]
fn browser_blob_is_restored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("domino-counter.json"),
        r#"{"players":[
            {"name":"Ada","score":45,"history":[
                {"points":35,"timestamp":"2024-03-01T18:22:05.000Z"},
                {"points":10,"timestamp":"2024-03-01T18:30:12.250Z"}]},
            {"name":"Bo","score":0,"history":[]}]}"#,
    )
    .unwrap();

    let mut store = GameStore::open(
        GameConfig::default(),
        FileStorage::new(dir.path()),
        quiet as fn(&GameView),
    );
    store.show_history(0);

    let modal = store.view().modal.unwrap();
    assert_eq!(
        modal.lines,
        [
            "+10 points @ 2024-03-01 18:30:12",
            "+35 points @ 2024-03-01 18:22:05"
        ]
    );
}

#[test]
fn corrupt_file_starts_fresh_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("domino-counter.json");
    fs::write(&path, "{\"players\": [").unwrap();

    let mut store = GameStore::open(
        GameConfig::default(),
        FileStorage::new(dir.path()),
        quiet as fn(&GameView),
    );
    assert_eq!(store.state(), &GameState::default());

    store.add_score(0, 15);

    let restored: GameState = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored.player(0).unwrap().score(), 15);
}

#[test]
fn new_game_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GameStore::open(
        GameConfig::default(),
        FileStorage::new(dir.path()),
        quiet as fn(&GameView),
    );
    store.add_score(0, 5);
    assert!(store.storage().get("domino-counter").unwrap().is_some());

    store.new_game();

    assert!(!dir.path().join("domino-counter.json").exists());
    assert_eq!(store.state(), &GameState::default());
}

#[test]
fn text_renderer_draws_every_change() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GameStore::open(
        GameConfig::default(),
        FileStorage::new(dir.path()),
        TextRenderer::new(Vec::new()),
    );

    store.add_score(1, 30);
    store.show_history(1);

    let out = String::from_utf8(store.renderer().get_ref().clone()).unwrap();
    assert_eq!(out.matches("[1] Enter your name").count(), 3);
    assert!(out.contains("[2] Enter your name: 30 (+30)"));
    assert!(out.contains("+30 points @ "));
}
