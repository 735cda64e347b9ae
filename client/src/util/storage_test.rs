use super::*;

#[test]
fn server_side_store_never_yields_a_session() {
    let mut store = BrowserSessionStore;
    store.save("{\"token\":\"t\"}");
    assert_eq!(store.load(), None);
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn raw_helpers_are_inert_without_a_browser() {
    write_item("k", "v");
    assert_eq!(read_item("k"), None);
    remove_item("k");
}
