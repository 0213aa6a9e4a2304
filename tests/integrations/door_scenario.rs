use pretty_assertions::assert_eq;
use scriptgraph::core::{Entity, ParameterRole, TypedValue};
use scriptgraph::{Catalog, Kind};
use scriptgraph_test_utils::{entity_of, init_test_tracing};

fn names_of(catalog: &Catalog, kind: Kind) -> Vec<String> {
    catalog.schema(kind).iter().map(|spec| spec.name.to_string()).collect()
}

#[test]
fn test_door_defaults_end_to_end() {
    init_test_tracing();
    let catalog = Catalog::bundled();
    catalog.verify().unwrap();
    assert_eq!(
        catalog.ancestry(Kind::Door).unwrap(),
        vec![
            Kind::Door,
            Kind::GateResourceInterface,
            Kind::ScriptInterface,
            Kind::EntityInterface,
            Kind::EntityMethodInterface,
        ]
    );
    assert!(catalog.schema(Kind::EntityInterface).is_empty());

    let resolver = scriptgraph::DefaultResolver::new(&catalog);
    let mut door: Entity = entity_of(Kind::Door);
    resolver.apply_defaults(&mut door, true).unwrap();

    let mut expected = Vec::new();
    for kind in [
        Kind::EntityMethodInterface,
        Kind::EntityInterface,
        Kind::ScriptInterface,
        Kind::GateResourceInterface,
        Kind::Door,
    ] {
        expected.extend(names_of(&catalog, kind));
    }
    let actual: Vec<String> = door.parameter_names().into_iter().map(str::to_string).collect();
    assert_eq!(actual, expected);

    let delete_me = door.parameter("delete_me").unwrap();
    assert_eq!(delete_me.role, ParameterRole::Method);
    assert_eq!(delete_me.value, TypedValue::Link);

    let started_opening = door.parameter("started_opening").unwrap();
    assert_eq!(started_opening.role, ParameterRole::Target);
}

#[test]
fn test_door_without_inheritance() {
    let catalog = Catalog::bundled();
    let resolver = scriptgraph::DefaultResolver::new(&catalog);
    let mut door = entity_of(Kind::Door);

    resolver.apply_defaults(&mut door, false).unwrap();

    let actual: Vec<String> = door.parameter_names().into_iter().map(str::to_string).collect();
    assert_eq!(actual, names_of(&catalog, Kind::Door));
    assert!(door.parameter("gate_status_changed").is_none());
}

#[test]
fn test_door_json_dump_lists_parameters() {
    let catalog = Catalog::bundled();
    let resolver = scriptgraph::DefaultResolver::new(&catalog);
    let mut door = entity_of(Kind::Door);
    resolver.apply_defaults(&mut door, false).unwrap();

    let json = door.to_json().unwrap();
    let parameters = json["parameters"].as_array().unwrap();
    assert_eq!(parameters.len(), catalog.schema(Kind::Door).len());
    assert_eq!(parameters[0]["name"], "started_opening");
}
