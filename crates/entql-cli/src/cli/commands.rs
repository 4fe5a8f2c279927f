//! Command builders for the CLI.
//!
//! Every entity subcommand shares the output args (fields, indent,
//! variables, verbose) and adds the filters its query declares.

use clap::Command;

use super::Entity;
use super::args::*;

/// Add the args every entity command accepts.
fn with_output_args(cmd: Command) -> Command {
    cmd.arg(fields_arg())
        .arg(indent_arg())
        .arg(variables_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("entql")
        .about("Render entity queries and their variables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(Entity::ALL.map(entity_command))
}

pub fn entity_command(entity: Entity) -> Command {
    match entity {
        Entity::Project => project_command(),
        Entity::Projects => projects_command(),
        Entity::Folders => folders_command(),
        Entity::Subsets => subsets_command(),
        Entity::Versions => versions_command(),
        Entity::Representations => representations_command(),
    }
}

pub fn project_command() -> Command {
    let cmd = Command::new("project")
        .about("Query a single project by name")
        .after_help(
            r#"EXAMPLES:
  entql project -p demo -f name,code
  entql project -p demo -f attrib.fps --variables"#,
        )
        .arg(project_arg());
    with_output_args(cmd)
}

pub fn projects_command() -> Command {
    let cmd = Command::new("projects").about("Query all projects");
    with_output_args(cmd)
}

pub fn folders_command() -> Command {
    let cmd = Command::new("folders")
        .about("Query folders of a project")
        .after_help(
            r#"EXAMPLES:
  entql folders -p demo --names sh010,sh020 -f id,name
  entql folders -p demo --parent-ids 1a2b --has-subsets --variables"#,
        )
        .arg(project_arg())
        .arg(ids_arg())
        .arg(parent_ids_arg())
        .arg(paths_arg())
        .arg(names_arg())
        .arg(has_subsets_arg());
    with_output_args(cmd)
}

pub fn subsets_command() -> Command {
    let cmd = Command::new("subsets")
        .about("Query subsets of a project")
        .arg(project_arg())
        .arg(ids_arg())
        .arg(names_arg())
        .arg(folder_ids_arg());
    with_output_args(cmd)
}

pub fn versions_command() -> Command {
    let cmd = Command::new("versions")
        .about("Query versions of a project")
        .after_help(
            r#"EXAMPLES:
  entql versions -p demo --subset-ids 9f8e --latest
  entql versions -p demo --versions 1,2,3 -f id,version --variables"#,
        )
        .arg(project_arg())
        .arg(ids_arg())
        .arg(subset_ids_arg())
        .arg(versions_arg())
        .arg(hero_arg())
        .arg(latest_arg());
    with_output_args(cmd)
}

pub fn representations_command() -> Command {
    let cmd = Command::new("representations")
        .about("Query representations of a project")
        .arg(project_arg())
        .arg(ids_arg())
        .arg(names_arg())
        .arg(version_ids_arg());
    with_output_args(cmd)
}
