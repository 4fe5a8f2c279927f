//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! List-valued args accept both repeated flags and comma-separated values.

use clap::{Arg, ArgAction, value_parser};

/// Selected fields (-f/--field), dotted for nested attributes.
pub fn fields_arg() -> Arg {
    Arg::new("fields")
        .short('f')
        .long("field")
        .value_name("FIELD")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("Field to select (repeatable, dotted for nested: attrib.fps)")
}

/// Project name (-p/--project).
///
/// Required: project-scoped queries declare `$projectName: String!`.
pub fn project_arg() -> Arg {
    Arg::new("project")
        .short('p')
        .long("project")
        .value_name("NAME")
        .required(true)
        .help("Project name")
}

fn string_list_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("VALUE")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help(help)
}

fn flag_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .action(ArgAction::SetTrue)
        .help(help)
}

/// Entity ids (--ids).
pub fn ids_arg() -> Arg {
    string_list_arg("ids", "ids", "Filter by entity ids")
}

/// Entity names (--names).
pub fn names_arg() -> Arg {
    string_list_arg("names", "names", "Filter by entity names")
}

/// Folder paths (--paths).
pub fn paths_arg() -> Arg {
    string_list_arg("paths", "paths", "Filter by folder paths")
}

/// Parent folder ids (--parent-ids).
pub fn parent_ids_arg() -> Arg {
    string_list_arg("parent_ids", "parent-ids", "Filter by parent folder ids")
}

/// Folder ids (--folder-ids).
pub fn folder_ids_arg() -> Arg {
    string_list_arg("folder_ids", "folder-ids", "Filter by folder ids")
}

/// Subset ids (--subset-ids).
pub fn subset_ids_arg() -> Arg {
    string_list_arg("subset_ids", "subset-ids", "Filter by subset ids")
}

/// Version ids (--version-ids).
pub fn version_ids_arg() -> Arg {
    string_list_arg("version_ids", "version-ids", "Filter by version ids")
}

/// Version numbers (--versions).
pub fn versions_arg() -> Arg {
    Arg::new("versions")
        .long("versions")
        .value_name("N")
        .action(ArgAction::Append)
        .value_delimiter(',')
        .value_parser(value_parser!(i64))
        .help("Filter by version numbers")
}

/// Only folders that have subsets (--has-subsets).
pub fn has_subsets_arg() -> Arg {
    flag_arg("has_subsets", "has-subsets", "Only folders with subsets")
}

/// Only hero versions (--hero).
pub fn hero_arg() -> Arg {
    flag_arg("hero", "hero", "Only hero versions")
}

/// Only latest versions (--latest).
pub fn latest_arg() -> Arg {
    flag_arg("latest", "latest", "Only latest versions")
}

/// Indentation width (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("2")
        .value_parser(value_parser!(usize))
        .help("Spaces per nesting level")
}

/// Print the variable values after the query (--variables).
pub fn variables_arg() -> Arg {
    flag_arg(
        "variables",
        "variables",
        "Print variable values as JSON after the query",
    )
}

/// Debug logging (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Log builder activity to stderr")
}
