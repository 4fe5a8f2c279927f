use crate::{ErrorKind, Value, Variables};

#[test]
fn declare_distinct_names() {
    let mut vars = Variables::new();
    vars.declare("projectName", "[String!]", None).unwrap();
    vars.declare("numOf", "Int", None).unwrap();

    let decls: Vec<_> = vars.declarations().collect();
    assert_eq!(decls, vec![("projectName", "[String!]"), ("numOf", "Int")]);
}

#[test]
fn declare_duplicate_fails_regardless_of_type() {
    let mut vars = Variables::new();
    vars.declare("projectName", "[String!]", Some("my_name".into()))
        .unwrap();

    for value_type in ["[String!]", "Int"] {
        let err = vars.declare("projectName", value_type, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NameConflict);
    }

    let var = vars.get("projectName").unwrap();
    assert_eq!(var.value_type(), "[String!]");
    assert_eq!(var.value(), Some(&Value::from("my_name")));
    assert_eq!(vars.len(), 1);
}

#[test]
fn declare_returns_handle() {
    let mut vars = Variables::new();
    let var = vars.declare("folderIds", "[String!]", None).unwrap();
    assert_eq!(var.name(), "folderIds");
    assert_eq!(var.as_ref(), "folderIds");
}

#[test]
fn set_value_last_write_wins() {
    let mut vars = Variables::new();
    vars.declare("projectName", "String!", Some("a".into()))
        .unwrap();
    vars.set_value("projectName", "b").unwrap();
    vars.set_value("projectName", "b").unwrap();

    assert_eq!(vars.values()["projectName"], Value::from("b"));
}

#[test]
fn set_value_undeclared() {
    let mut vars = Variables::new();
    let err = vars.set_value("missing", 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(vars.is_empty());
}

#[test]
fn values_skip_unassigned() {
    let mut vars = Variables::new();
    vars.declare("a", "Int", Some(1.into())).unwrap();
    vars.declare("b", "Int", None).unwrap();
    vars.declare("c", "Boolean", Some(Value::Null)).unwrap();

    let values = vars.values();
    let keys: Vec<_> = values.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "c"]);
    assert_eq!(values["c"], Value::Null);
}
