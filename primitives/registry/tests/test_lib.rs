use ir::{Envelope, ServiceMap, TypeSpec};
use registry::{
    ArgumentSignature, MethodSignature, Registrar, RegistrarError, ServiceMapReader,
};
use serde_json::{json, Value};
use types::SmdError;

/// Helper describing a `bar($one, $two = 'two', $three = null)` style method
fn bar_signature() -> MethodSignature {
    MethodSignature::new("bar")
        .arg(ArgumentSignature::required("one", ["bool"]))
        .arg(ArgumentSignature::optional("two", ["string"], "two"))
        .arg(ArgumentSignature::optional("three", ["mixed"], Value::Null))
        .returning(["array"])
}

/// Helper describing a method with no arguments returning nothing
fn baz_signature() -> MethodSignature { MethodSignature::new("baz").returning(["void"]) }

#[test]
fn test_register_builds_service_from_signature() {
    let mut map = ServiceMap::new();
    Registrar::new().register(&mut map, &bar_signature()).expect("registration should succeed");

    let service = map.get_service("bar").expect("bar should be registered");
    let params = service.params();
    assert_eq!(params.len(), 3);
    assert_eq!(params[0].param_type, "boolean");
    assert_eq!(params[0].name.as_deref(), Some("one"));
    assert_eq!(params[0].optional, Some(false));
    assert_eq!(params[0].default, None);
    assert_eq!(params[1].default, Some(json!("two")));
    assert_eq!(params[2].param_type, "any");
    assert_eq!(params[2].default, Some(Value::Null));
    assert_eq!(service.returns(), Some(&TypeSpec::Single("array".to_string())));
}

#[test]
fn test_register_uses_map_defaults() {
    let mut map = ServiceMap::new();
    map.set_default_envelope("JSON-RPC-2.0").expect("valid envelope").set_default_target("/rpc");
    Registrar::new().register(&mut map, &baz_signature()).expect("registration should succeed");

    let baz = map.get_service("baz").expect("baz should be registered");
    assert_eq!(baz.envelope(), Envelope::JsonRpc2);
    assert_eq!(baz.target(), Some("/rpc"));
    assert_eq!(baz.returns(), Some(&TypeSpec::Single("null".to_string())));
}

#[test]
fn test_namespace_prefixes_service_names() {
    let mut map = ServiceMap::new();
    let registrar = Registrar::with_namespace("foo");
    let count = registrar
        .register_all(&mut map, &[bar_signature(), baz_signature()])
        .expect("registration should succeed");

    assert_eq!(count, 2);
    assert_eq!(map.list_services(), vec!["foo.bar", "foo.baz"]);
    assert_eq!(map.service_count(), 2);
    assert!(map.get_service("bar").is_none());
}

#[test]
fn test_register_all_is_all_or_nothing() {
    let mut map = ServiceMap::new();
    let bad = MethodSignature::new("0bad");
    let err = Registrar::new()
        .register_all(&mut map, &[bar_signature(), bad])
        .expect_err("invalid name should fail the batch");
    assert!(matches!(err, RegistrarError::Smd(SmdError::InvalidServiceName(_))));
    assert!(map.is_empty());

    let err = Registrar::new()
        .register_all(&mut map, &[bar_signature(), baz_signature(), bar_signature()])
        .expect_err("duplicate should fail the batch");
    match err {
        RegistrarError::DuplicateMethod(name) => assert_eq!(name, "bar"),
        other => panic!("Expected DuplicateMethod, got {:?}", other),
    }
    assert!(map.is_empty());
}

#[test]
fn test_reregistering_overwrites_in_place() {
    let mut map = ServiceMap::new();
    let registrar = Registrar::new();
    registrar.register_all(&mut map, &[bar_signature(), baz_signature()]).expect("first batch");

    let narrowed = MethodSignature::new("bar").returning(["int", "string"]);
    registrar.register(&mut map, &narrowed).expect("re-registration");

    assert_eq!(map.list_services(), vec!["bar", "baz"]);
    let bar = map.get_service("bar").expect("bar should be registered");
    assert!(bar.params().is_empty());
    assert_eq!(
        bar.returns(),
        Some(&TypeSpec::Union(vec!["integer".to_string(), "string".to_string()]))
    );
}

#[test]
fn test_registered_map_serializes_parameters_in_declaration_order() {
    let mut map = ServiceMap::new();
    Registrar::new().register(&mut map, &bar_signature()).expect("registration should succeed");

    assert_eq!(
        map.to_json_text(),
        concat!(
            r#"{"bar":{"transport":"POST","envelope":"JSON-RPC-1.0","parameters":["#,
            r#"{"type":"boolean","name":"one","optional":false},"#,
            r#"{"type":"string","name":"two","optional":true,"default":"two"},"#,
            r#"{"type":"any","name":"three","optional":true,"default":null}"#,
            r#"],"returns":"array"}}"#
        )
    );
}

#[test]
fn test_load_signatures_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("methods.json");
    let sigs = vec![bar_signature(), baz_signature()];
    std::fs::write(&path, serde_json::to_string(&sigs).expect("Failed to serialize signatures"))
        .expect("Failed to write signatures");

    let loaded = MethodSignature::load_from_file(&path).expect("Failed to load signatures");
    assert_eq!(loaded, sigs);

    let missing = MethodSignature::load_from_file(dir.path().join("missing.json"));
    assert!(matches!(missing, Err(RegistrarError::Io(_))));
}
