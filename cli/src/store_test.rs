use std::time::{SystemTime, UNIX_EPOCH};

use super::*;

fn scratch_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos());
    std::env::temp_dir()
        .join(format!("shortlink-cli-{tag}-{}-{nanos}", std::process::id()))
        .join("session.json")
}

#[test]
fn save_creates_parent_and_load_reads_back() {
    let path = scratch_path("save");
    let mut store = FileSessionStore::new(&path);
    assert_eq!(store.load(), None);
    store.save("{\"token\":\"abc\"}");
    assert_eq!(store.load().as_deref(), Some("{\"token\":\"abc\"}"));
    store.clear();
    assert_eq!(store.load(), None);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn clear_without_file_is_harmless() {
    let mut store = FileSessionStore::new(scratch_path("clear"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn default_path_ends_with_session_file() {
    assert!(default_session_path().ends_with(".shortlink/session.json"));
}
