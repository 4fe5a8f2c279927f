use entql_lib::factories::{
    folders_query, project_query, projects_query, representations_query, subsets_query,
    versions_query,
};
use entql_lib::{Query, Value};

use crate::cli::Entity;

pub struct RenderArgs {
    pub entity: Entity,
    pub fields: Vec<String>,
    pub values: Vec<(String, Value)>,
    pub indent: usize,
    pub variables: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Query(#[from] entql_lib::Error),

    #[error("failed to encode variables: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn run(args: RenderArgs) {
    match render(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the entity query, assign the filter values and render it.
pub fn render(args: &RenderArgs) -> Result<String, RenderError> {
    let query = build_query(args)?;
    query.ensure_fields()?;
    let mut output = query.printer().indent(args.indent).dump();

    if args.variables {
        output.push_str("\n\n");
        output.push_str(&serde_json::to_string_pretty(&query.variables_values())?);
    }
    Ok(output)
}

fn build_query(args: &RenderArgs) -> Result<Query, RenderError> {
    let fields: Vec<&str> = args.fields.iter().map(String::as_str).collect();
    let mut query = match args.entity {
        Entity::Project => project_query(&fields)?,
        Entity::Projects => projects_query(&fields)?,
        Entity::Folders => folders_query(&fields)?,
        Entity::Subsets => subsets_query(&fields)?,
        Entity::Versions => versions_query(&fields)?,
        Entity::Representations => representations_query(&fields)?,
    };

    for (name, value) in &args.values {
        query.set_variable_value(name, value.clone())?;
    }
    tracing::debug!(
        entity = args.entity.name(),
        values = args.values.len(),
        "built entity query"
    );
    Ok(query)
}
