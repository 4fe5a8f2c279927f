//! Prebuilt queries for the entity hierarchy:
//! project → folders → subsets → versions → representations.
//!
//! Each factory declares its variables without values and binds them as
//! filters. Callers assign values with [`Query::set_variable_value`]
//! before each call; unset variables are simply not sent.
//!
//! `fields` are selected under the entity node. Dotted paths select
//! nested attributes: `["id", "attrib.frameStart", "attrib.frameEnd"]`.

use crate::Result;
use crate::field::FieldMut;
use crate::query::Query;

/// `(argument, variable, type)` triples for one filtered field.
type FilterSpec<'a> = &'a [(&'a str, &'a str, &'a str)];

const PROJECT_NAME: (&str, &str, &str) = ("name", "projectName", "String!");

/// Single project by name.
pub fn project_query(fields: &[&str]) -> Result<Query> {
    let mut query = Query::new("ProjectQuery");
    declare(&mut query, &[PROJECT_NAME])?;

    let mut project = query.add_field("project");
    bind(&mut project, &[PROJECT_NAME])?;
    select(&mut project, fields);
    Ok(query)
}

/// All projects.
pub fn projects_query(fields: &[&str]) -> Result<Query> {
    let mut query = Query::new("ProjectsQuery");
    let mut projects = query.add_field("projects");
    select_connection(&mut projects, fields);
    Ok(query)
}

const FOLDER_FILTERS: FilterSpec<'static> = &[
    ("ids", "folderIds", "[String!]"),
    ("parentIds", "parentFolderIds", "[String!]"),
    ("paths", "folderPaths", "[String!]"),
    ("names", "folderNames", "[String!]"),
    ("hasSubsets", "folderHasSubsets", "Boolean"),
];

/// Folders of one project.
pub fn folders_query(fields: &[&str]) -> Result<Query> {
    project_entities_query("FoldersQuery", "folders", FOLDER_FILTERS, fields)
}

const SUBSET_FILTERS: FilterSpec<'static> = &[
    ("ids", "subsetIds", "[String!]"),
    ("names", "subsetNames", "[String!]"),
    ("folderIds", "folderIds", "[String!]"),
];

/// Subsets of one project.
pub fn subsets_query(fields: &[&str]) -> Result<Query> {
    project_entities_query("SubsetsQuery", "subsets", SUBSET_FILTERS, fields)
}

const VERSION_FILTERS: FilterSpec<'static> = &[
    ("ids", "versionIds", "[String!]"),
    ("subsetIds", "subsetIds", "[String!]"),
    ("versions", "versions", "[Int!]"),
    ("heroOnly", "heroOnly", "Boolean"),
    ("latestOnly", "latestOnly", "Boolean"),
];

/// Versions of one project.
pub fn versions_query(fields: &[&str]) -> Result<Query> {
    project_entities_query("VersionsQuery", "versions", VERSION_FILTERS, fields)
}

const REPRESENTATION_FILTERS: FilterSpec<'static> = &[
    ("ids", "representationIds", "[String!]"),
    ("names", "representationNames", "[String!]"),
    ("versionIds", "versionIds", "[String!]"),
];

/// Representations of one project.
pub fn representations_query(fields: &[&str]) -> Result<Query> {
    project_entities_query(
        "RepresentationsQuery",
        "representations",
        REPRESENTATION_FILTERS,
        fields,
    )
}

/// `project(name: $projectName) { <entity>(<filters>) { edges { node { <fields> } } } }`
fn project_entities_query(
    query_name: &str,
    entity: &str,
    filters: FilterSpec<'_>,
    fields: &[&str],
) -> Result<Query> {
    let mut query = Query::new(query_name);
    declare(&mut query, &[PROJECT_NAME])?;
    declare(&mut query, filters)?;

    let mut project = query.add_field("project");
    bind(&mut project, &[PROJECT_NAME])?;

    let mut entities = project.add_field(entity);
    bind(&mut entities, filters)?;
    select_connection(&mut entities, fields);
    Ok(query)
}

fn declare(query: &mut Query, filters: FilterSpec<'_>) -> Result<()> {
    for &(_, variable, value_type) in filters {
        query.add_variable(variable, value_type)?;
    }
    Ok(())
}

fn bind(field: &mut FieldMut<'_>, filters: FilterSpec<'_>) -> Result<()> {
    for &(argument, variable, _) in filters {
        field.set_filter(argument, variable)?;
    }
    Ok(())
}

fn select(field: &mut FieldMut<'_>, fields: &[&str]) {
    for path in fields {
        field.add_field_path(path);
    }
}

fn select_connection(field: &mut FieldMut<'_>, fields: &[&str]) {
    let mut edges = field.add_field("edges");
    let mut node = edges.add_field("node");
    select(&mut node, fields);
}
