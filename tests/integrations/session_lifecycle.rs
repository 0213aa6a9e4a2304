use std::rc::Rc;

use pretty_assertions::assert_eq;
use scriptgraph::core::{Composite, DataType, Entity, HostContainer, TypedValue};
use scriptgraph::{AuxiliaryStore, Kind, ScriptgraphConfig, Session, CUSTOM_NAMES_TAG};
use scriptgraph_test_utils::{entity_id, init_test_tracing, name_table, InMemoryAuxStore, InMemoryHost};

const LEVEL: &str = "levels/tech_hub/commands.pak";

fn session_over(store: &Rc<InMemoryAuxStore>) -> Session {
    let store: Rc<dyn AuxiliaryStore> = store.clone();
    Session::new(&ScriptgraphConfig::default(), store).unwrap()
}

#[test]
fn test_session_resolves_composites_of_linked_host() {
    init_test_tracing();
    let composite = Composite::new("ARCHETYPES\\SCRIPTS\\LIFT_PANEL").with_variable("floor", DataType::Integer);
    let composite_id = composite.id;
    let host = Rc::new(InMemoryHost::new(LEVEL).with_composite(composite));
    let store = Rc::new(InMemoryAuxStore::new());
    let mut session = session_over(&store);

    let mut before = Entity::function(entity_id("panel_a"), composite_id);
    session.apply_defaults(&mut before, false).unwrap();
    assert!(before.parameter("floor").is_none());

    session.link_host(Some(host.clone()));
    let mut after = Entity::function(entity_id("panel_b"), composite_id);
    session.apply_defaults(&mut after, false).unwrap();
    assert_eq!(after.parameter("floor").map(|p| &p.value), Some(&TypedValue::Integer(0)));
}

#[test]
fn test_session_names_follow_host_lifecycle() {
    init_test_tracing();
    let container = entity_id("tech_hub");
    let door = entity_id("front_door");
    let store = Rc::new(InMemoryAuxStore::new());
    store.insert_table(
        LEVEL,
        CUSTOM_NAMES_TAG,
        name_table(&[(container, door, "front_door")]).encode().unwrap(),
    );

    let host = Rc::new(InMemoryHost::new(LEVEL));
    let mut session = session_over(&store);
    assert_eq!(session.display_name(container, door), door.to_byte_string());

    session.link_host(Some(host.clone()));
    assert_eq!(session.display_name(container, door), "front_door");
    assert!(session.host().is_some());

    session.names_mut().set_name(container, door, "lobby_door");
    host.simulate_save("levels/tech_hub/commands_v2.pak");
    assert_eq!(host.file_path(), std::path::PathBuf::from("levels/tech_hub/commands_v2.pak"));
    assert!(store.table("levels/tech_hub/commands_v2.pak", CUSTOM_NAMES_TAG).is_some());

    session.link_host(None);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(session.display_name(container, door), "lobby_door");
}

#[test]
fn test_session_rejects_unknown_kind_lookup() {
    let store = Rc::new(InMemoryAuxStore::new());
    let session = session_over(&store);
    assert_eq!(session.catalog().kind_for_id(entity_id("NotAKind")), None);
    assert_eq!(session.catalog().kind_for_id(Kind::Door.short_id()), Some(Kind::Door));
}

