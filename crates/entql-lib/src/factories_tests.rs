use indoc::indoc;

use crate::factories::{
    folders_query, project_query, projects_query, representations_query, subsets_query,
    versions_query,
};
use crate::{ErrorKind, Value};

#[test]
fn project() {
    let q = project_query(&["name"]).unwrap();

    let expected = indoc! {"
        query ProjectQuery($projectName: String!) {
          project(name: $projectName) {
            name
          }
        }"};
    assert_eq!(q.calculate_query().unwrap(), expected);
    assert!(q.variables_values().is_empty());
}

#[test]
fn project_nested_attributes() {
    let q = project_query(&["name", "attrib.fps", "attrib.resolutionWidth", "name"]).unwrap();

    insta::assert_snapshot!(q.calculate_query().unwrap(), @r"
    query ProjectQuery($projectName: String!) {
      project(name: $projectName) {
        name
        attrib {
          fps
          resolutionWidth
        }
      }
    }
    ");
}

#[test]
fn projects() {
    let q = projects_query(&["name", "code"]).unwrap();

    insta::assert_snapshot!(q.calculate_query().unwrap(), @r"
    query ProjectsQuery {
      projects {
        edges {
          node {
            name
            code
          }
        }
      }
    }
    ");
}

#[test]
fn folders() {
    let q = folders_query(&["id", "name"]).unwrap();

    insta::assert_snapshot!(q.calculate_query().unwrap(), @r"
    query FoldersQuery(
      $projectName: String!
      $folderIds: [String!]
      $parentFolderIds: [String!]
      $folderPaths: [String!]
      $folderNames: [String!]
      $folderHasSubsets: Boolean
    ) {
      project(name: $projectName) {
        folders(ids: $folderIds, parentIds: $parentFolderIds, paths: $folderPaths, names: $folderNames, hasSubsets: $folderHasSubsets) {
          edges {
            node {
              id
              name
            }
          }
        }
      }
    }
    ");
}

#[test]
fn subsets() {
    let q = subsets_query(&["id"]).unwrap();

    insta::assert_snapshot!(q.calculate_query().unwrap(), @r"
    query SubsetsQuery(
      $projectName: String!
      $subsetIds: [String!]
      $subsetNames: [String!]
      $folderIds: [String!]
    ) {
      project(name: $projectName) {
        subsets(ids: $subsetIds, names: $subsetNames, folderIds: $folderIds) {
          edges {
            node {
              id
            }
          }
        }
      }
    }
    ");
}

#[test]
fn versions() {
    let q = versions_query(&["id", "version"]).unwrap();

    insta::assert_snapshot!(q.calculate_query().unwrap(), @r"
    query VersionsQuery(
      $projectName: String!
      $versionIds: [String!]
      $subsetIds: [String!]
      $versions: [Int!]
      $heroOnly: Boolean
      $latestOnly: Boolean
    ) {
      project(name: $projectName) {
        versions(ids: $versionIds, subsetIds: $subsetIds, versions: $versions, heroOnly: $heroOnly, latestOnly: $latestOnly) {
          edges {
            node {
              id
              version
            }
          }
        }
      }
    }
    ");
}

#[test]
fn representations() {
    let q = representations_query(&["id", "name"]).unwrap();

    insta::assert_snapshot!(q.calculate_query().unwrap(), @r"
    query RepresentationsQuery(
      $projectName: String!
      $representationIds: [String!]
      $representationNames: [String!]
      $versionIds: [String!]
    ) {
      project(name: $projectName) {
        representations(ids: $representationIds, names: $representationNames, versionIds: $versionIds) {
          edges {
            node {
              id
              name
            }
          }
        }
      }
    }
    ");
}

#[test]
fn folders_without_fields() {
    let q = folders_query(&[]).unwrap();
    let node = q
        .field_by_path(&["project", "folders", "edges", "node"])
        .unwrap();
    assert!(!q.field(node).unwrap().has_children());
}

#[test]
fn redeclaring_factory_variable_conflicts() {
    let mut q = project_query(&["name"]).unwrap();
    let err = q
        .add_variable_with_value("projectName", "[String!]", "my_name")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NameConflict);

    q.set_variable_value("projectName", "my_name").unwrap();
    q.add_variable_with_value("projectId", "[String!]", "0x23")
        .unwrap();
    q.add_variable_with_value("numOf", "Int", 3).unwrap();

    let values = q.variables_values();
    assert_eq!(values.len(), 3);
    assert_eq!(values["projectName"], Value::from("my_name"));
    assert_eq!(values["projectId"], Value::from("0x23"));
    assert_eq!(values["numOf"], Value::from(3));
}

#[test]
fn reuse_text_with_new_values() {
    let mut q = folders_query(&["id"]).unwrap();
    let text = q.calculate_query().unwrap();

    q.set_variable_value("projectName", "demo_Commercial").unwrap();
    q.set_variable_value("folderIds", vec!["a", "b"]).unwrap();
    assert_eq!(q.calculate_query().unwrap(), text);
    assert_eq!(
        q.variables_json().unwrap(),
        serde_json::json!({"projectName": "demo_Commercial", "folderIds": ["a", "b"]})
    );

    q.set_variable_value("folderIds", vec!["c"]).unwrap();
    assert_eq!(q.calculate_query().unwrap(), text);
    assert_eq!(q.variables_values()["folderIds"], Value::from(vec!["c"]));
}

#[test]
fn remove_factory_filter() {
    let mut q = folders_query(&["id"]).unwrap();
    let folders = q.field_by_path(&["project", "folders"]).unwrap();
    let mut field = q.field_mut(folders).unwrap();
    assert_eq!(field.remove_filter("ids"), Some("folderIds".to_string()));

    let field = q.field(folders).unwrap();
    assert_eq!(field.filter("ids"), None);
    assert_eq!(field.filters().count(), 4);
}
