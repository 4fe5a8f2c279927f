use entql_lib::{ErrorKind, Value};

use super::render::{RenderArgs, RenderError, render};
use crate::cli::Entity;

fn args(entity: Entity, fields: &[&str]) -> RenderArgs {
    RenderArgs {
        entity,
        fields: fields.iter().map(|f| f.to_string()).collect(),
        values: Vec::new(),
        indent: 2,
        variables: false,
    }
}

#[test]
fn project_query_text() {
    let out = render(&args(Entity::Project, &["name"])).unwrap();

    insta::assert_snapshot!(out, @r"
    query ProjectQuery($projectName: String!) {
      project(name: $projectName) {
        name
      }
    }
    ");
}

#[test]
fn variables_follow_query() {
    let mut args = args(Entity::Subsets, &["id"]);
    args.values = vec![
        ("projectName".to_string(), Value::from("demo")),
        ("subsetNames".to_string(), Value::from(vec!["modelMain"])),
    ];
    args.variables = true;

    let out = render(&args).unwrap();
    let (_, json) = out.split_once("\n\n").unwrap();
    let json: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"projectName": "demo", "subsetNames": ["modelMain"]})
    );
}

#[test]
fn no_values_gives_empty_object() {
    let mut args = args(Entity::Projects, &["name"]);
    args.variables = true;

    let out = render(&args).unwrap();
    assert!(out.ends_with("}\n\n{}"));
}

#[test]
fn custom_indent() {
    let mut args = args(Entity::Projects, &["name"]);
    args.indent = 1;

    insta::assert_snapshot!(render(&args).unwrap(), @r"
    query ProjectsQuery {
     projects {
      edges {
       node {
        name
       }
      }
     }
    }
    ");
}

#[test]
fn unknown_variable_is_reported() {
    let mut args = args(Entity::Project, &["name"]);
    args.values = vec![("folderIds".to_string(), Value::from(vec!["a"]))];

    let err = render(&args).unwrap_err();
    match err {
        RenderError::Query(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
        other => panic!("unexpected error: {other}"),
    }
}
