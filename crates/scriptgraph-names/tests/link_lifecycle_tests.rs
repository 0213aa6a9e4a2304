use std::rc::Rc;

use pretty_assertions::assert_eq;
use scriptgraph_core::HostContainer;
use scriptgraph_names::{AuxiliaryStore, NameOverlay, NameTable, SidecarStore, CUSTOM_NAMES_TAG};
use scriptgraph_test_utils::{entity_id, init_test_tracing, name_table, InMemoryAuxStore, InMemoryHost};

const HOST_A: &str = "levels/bsp_torrens/commands.pak";
const HOST_B: &str = "levels/tech_hub/commands.pak";

fn encoded(entries: &[(&str, &str, &str)]) -> Vec<u8> {
    let entries: Vec<_> = entries
        .iter()
        .map(|(c, e, n)| (entity_id(c), entity_id(e), *n))
        .collect();
    name_table(&entries).encode().unwrap()
}

fn overlay_with(store: &Rc<InMemoryAuxStore>) -> NameOverlay {
    let store: Rc<dyn AuxiliaryStore> = store.clone();
    NameOverlay::new(NameTable::new(), store)
}

#[test]
fn test_link_reloads_from_host_path() {
    init_test_tracing();
    let store = Rc::new(InMemoryAuxStore::new());
    store.insert_table(HOST_A, CUSTOM_NAMES_TAG, encoded(&[("lift", "button", "call_button")]));
    let host = Rc::new(InMemoryHost::new(HOST_A));

    let mut overlay = overlay_with(&store);
    overlay.link(Some(host.clone()));

    assert!(overlay.is_linked());
    assert_eq!(host.listener_count(), 2);
    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("button")), "call_button");
}

#[test]
fn test_relink_detaches_previous_host() {
    init_test_tracing();
    let store = Rc::new(InMemoryAuxStore::new());
    store.insert_table(HOST_A, CUSTOM_NAMES_TAG, encoded(&[("lift", "button", "from_a")]));
    store.insert_table(HOST_B, CUSTOM_NAMES_TAG, encoded(&[("lift", "button", "from_b")]));
    let host_a = Rc::new(InMemoryHost::new(HOST_A));
    let host_b = Rc::new(InMemoryHost::new(HOST_B));

    let mut overlay = overlay_with(&store);
    overlay.link(Some(host_a.clone()));
    overlay.link(Some(host_b.clone()));

    assert_eq!(host_a.listener_count(), 0);
    assert_eq!(host_b.listener_count(), 2);
    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("button")), "from_b");

    let reads = store.read_count();
    let writes = store.write_count();
    assert_eq!(host_a.simulate_load(HOST_A), 0);
    assert_eq!(host_a.simulate_save(HOST_A), 0);
    assert_eq!(store.read_count(), reads);
    assert_eq!(store.write_count(), writes);
    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("button")), "from_b");
}

#[test]
fn test_link_none_only_detaches() {
    let store = Rc::new(InMemoryAuxStore::new());
    store.insert_table(HOST_A, CUSTOM_NAMES_TAG, encoded(&[("lift", "button", "from_a")]));
    let host = Rc::new(InMemoryHost::new(HOST_A));

    let mut overlay = overlay_with(&store);
    overlay.link(Some(host.clone()));
    overlay.link(None);

    assert!(!overlay.is_linked());
    assert_eq!(host.listener_count(), 0);
    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("button")), "from_a");
}

#[test]
fn test_host_load_event_replaces_custom_names() {
    let store = Rc::new(InMemoryAuxStore::new());
    let host = Rc::new(InMemoryHost::new(HOST_A));
    let mut overlay = overlay_with(&store);
    overlay.link(Some(host.clone()));
    overlay.set_name(entity_id("lift"), entity_id("button"), "unsaved");

    store.insert_table(HOST_B, CUSTOM_NAMES_TAG, encoded(&[("lift", "panel", "panel_b")]));
    assert_eq!(host.simulate_load(HOST_B), 1);

    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("panel")), "panel_b");
    assert_eq!(
        overlay.get_name(entity_id("lift"), entity_id("button")),
        entity_id("button").to_byte_string()
    );
}

#[test]
fn test_host_save_event_persists_custom_names() {
    let store = Rc::new(InMemoryAuxStore::new());
    let host = Rc::new(InMemoryHost::new(HOST_A));
    let mut overlay = overlay_with(&store);
    overlay.link(Some(host.clone()));
    overlay.set_name(entity_id("lift"), entity_id("button"), "call_button");

    assert_eq!(host.simulate_save(HOST_B), 1);

    let bytes = store.table(HOST_B, CUSTOM_NAMES_TAG).unwrap();
    let saved = NameTable::decode(&bytes).unwrap();
    assert_eq!(saved.get(entity_id("lift"), entity_id("button")), Some("call_button"));
    assert!(store.table(HOST_A, CUSTOM_NAMES_TAG).is_none());
}

#[test]
fn test_failed_save_leaves_overlay_usable() {
    let store = Rc::new(InMemoryAuxStore::new());
    let host = Rc::new(InMemoryHost::new(HOST_A));
    let mut overlay = overlay_with(&store);
    overlay.link(Some(host.clone()));
    overlay.set_name(entity_id("lift"), entity_id("button"), "call_button");

    store.fail_writes(true);
    host.simulate_save(HOST_A);

    assert_eq!(store.write_count(), 1);
    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("button")), "call_button");
}

#[test]
fn test_drop_detaches_from_host() {
    let store = Rc::new(InMemoryAuxStore::new());
    let host = Rc::new(InMemoryHost::new(HOST_A));
    {
        let mut overlay = overlay_with(&store);
        overlay.link(Some(host.clone()));
        assert_eq!(host.listener_count(), 2);
    }
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.simulate_save(HOST_A), 0);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_sidecar_store_round_trip_through_host_events() {
    let dir = tempfile::tempdir().unwrap();
    let host_file = dir.path().join("commands.pak");
    let host = Rc::new(InMemoryHost::new(&host_file));

    let mut writer = NameOverlay::new(NameTable::new(), Rc::new(SidecarStore::new()));
    writer.link(Some(host.clone()));
    writer.set_name(entity_id("lift"), entity_id("button"), "call_button");
    host.simulate_save(&host_file);
    writer.link(None);

    assert!(SidecarStore::sidecar_path(&host_file, CUSTOM_NAMES_TAG).exists());

    let mut reader = NameOverlay::new(NameTable::new(), Rc::new(SidecarStore::new()));
    reader.link(Some(host.clone()));
    assert_eq!(reader.get_name(entity_id("lift"), entity_id("button")), "call_button");
    assert_eq!(host.file_path(), host_file);
}

#[test]
fn test_custom_snapshot_survives_host_load() {
    let store = Rc::new(InMemoryAuxStore::new());
    store.insert_table(HOST_B, CUSTOM_NAMES_TAG, encoded(&[("lift", "button", "from_b")]));
    let host = Rc::new(InMemoryHost::new(HOST_A));
    let mut overlay = overlay_with(&store);
    overlay.link(Some(host.clone()));
    overlay.set_name(entity_id("lift"), entity_id("button"), "before_load");

    let snapshot = overlay.custom();
    assert_eq!(host.simulate_load(HOST_B), 1);

    assert_eq!(snapshot.get(entity_id("lift"), entity_id("button")), Some("before_load"));
    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("button")), "from_b");
}

#[test]
fn test_retag_after_link_moves_host_events_to_new_tag() {
    let store = Rc::new(InMemoryAuxStore::new());
    store.insert_table(HOST_A, "RENAMES", encoded(&[("lift", "button", "retagged")]));
    let host = Rc::new(InMemoryHost::new(HOST_A));
    let mut overlay = overlay_with(&store);
    overlay.link(Some(host.clone()));

    let mut overlay = overlay.with_tag("RENAMES");
    assert_eq!(host.listener_count(), 2);
    assert_eq!(overlay.get_name(entity_id("lift"), entity_id("button")), "retagged");

    overlay.set_name(entity_id("lift"), entity_id("panel"), "panel");
    host.simulate_save(HOST_B);
    assert!(store.table(HOST_B, "RENAMES").is_some());
    assert!(store.table(HOST_B, CUSTOM_NAMES_TAG).is_none());
}
