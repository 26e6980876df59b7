use serde_json::{json, Value};
use smd::{
    ArgumentSignature, DescriptorCache, Envelope, MethodSignature, ParamOptions, Registrar,
    ServiceDescriptor, ServiceMap, SmdError,
};

/// Helper extracting parameter types of a service as display strings
fn param_types(service: &ServiceDescriptor) -> Vec<String> {
    service.params().iter().map(|p| p.param_type.to_string()).collect()
}

#[test]
fn test_auto_slot_beats_explicit_orders() {
    let mut service = ServiceDescriptor::new("foo").expect("valid name");
    for (ty, order) in [("integer", Some(4)), ("string", None), ("boolean", Some(3))] {
        service.add_param(ty, ParamOptions::new(), order).expect("valid param");
    }
    assert_eq!(param_types(&service), vec!["string", "boolean", "integer"]);
}

#[test]
fn test_set_params_fully_replaces() {
    let mut service = ServiceDescriptor::new("foo").expect("valid name");
    service
        .add_params_from_value(&json!([{"type": "integer"}, {"type": "string"}, {"type": "boolean"}]))
        .expect("valid specs");
    let before = service.params();

    service.set_params_from_value(&json!([{"type": "array"}])).expect("valid specs");
    let after = service.params();
    assert_eq!(after.len(), 1);
    assert!(after.iter().all(|p| !before.contains(p)));
}

#[test]
fn test_invalid_type_leaves_params_unchanged() {
    let mut service = ServiceDescriptor::new("foo").expect("valid name");
    service.add_param("string", ParamOptions::new(), None).expect("valid param");
    let before = service.params();

    let err = service.add_param(json!({"not": "a type"}), ParamOptions::new(), None);
    assert!(matches!(err, Err(SmdError::InvalidParamType(_))));
    assert_eq!(service.params(), before);
}

#[test]
fn test_name_and_envelope_validation() {
    assert!(matches!(ServiceDescriptor::new("0ab-?"), Err(SmdError::InvalidServiceName(_))));
    assert!(matches!(ServiceDescriptor::new("ab-?"), Err(SmdError::InvalidServiceName(_))));
    assert_eq!(ServiceDescriptor::new("foo").expect("valid name").name(), "foo");

    let mut service = ServiceDescriptor::new("foo").expect("valid name");
    assert!(matches!(service.set_envelope("JSON-P"), Err(SmdError::InvalidEnvelope(_))));
    for env in Envelope::ALL {
        service.set_envelope(env.as_str()).expect("supported envelope");
        assert_eq!(service.envelope(), env);
    }
}

#[test]
fn test_registered_map_caches_and_roundtrips() {
    let signatures = vec![
        MethodSignature::new("bar")
            .arg(ArgumentSignature::required("one", ["bool"]))
            .arg(ArgumentSignature::optional("two", ["string"], "two"))
            .arg(ArgumentSignature::optional("three", ["mixed"], Value::Null))
            .returning(["array"]),
        MethodSignature::new("baz").returning(["void"]),
    ];
    let mut map = ServiceMap::new();
    Registrar::with_namespace("foo").register_all(&mut map, &signatures).expect("valid batch");

    let text = map.to_json_text();
    let reparsed: Value = serde_json::from_str(&text).expect("SMD JSON parses");
    assert_eq!(reparsed.to_string(), text);
    assert_eq!(ServiceMap::from_json_text(&text).expect("SMD JSON loads").to_json_text(), text);

    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let location = dir.path().join("zjs");
    let cache = DescriptorCache::new();

    assert_eq!(cache.get(&location), None);
    assert!(cache.save(&location, &map));
    assert_eq!(cache.get(&location), Some(text));
    assert!(cache.delete(&location));
    assert_eq!(cache.get(&location), None);
    assert!(!cache.delete(&location));
}
