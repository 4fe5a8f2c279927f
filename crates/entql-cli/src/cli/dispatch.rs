//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! Filter args are translated into `(variable, value)` pairs here, using the
//! per-entity tables on [`Entity`], so the render command only deals with
//! query variables.

use clap::ArgMatches;
use entql_lib::Value;

use super::Entity;
use crate::commands::render::RenderArgs;

const DEFAULT_FIELDS: [&str; 2] = ["id", "name"];

pub struct RenderParams {
    pub entity: Entity,
    pub fields: Vec<String>,
    pub values: Vec<(String, Value)>,
    pub indent: usize,
    pub variables: bool,
    pub verbose: bool,
}

impl RenderParams {
    pub fn from_matches(entity: Entity, m: &ArgMatches) -> Self {
        let fields: Vec<String> = m
            .get_many::<String>("fields")
            .map(|values| values.filter(|f| !f.is_empty()).cloned().collect())
            .unwrap_or_default();
        let fields = if fields.is_empty() {
            DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
        } else {
            fields
        };

        Self {
            entity,
            fields,
            values: collect_values(entity, m),
            indent: m.get_one::<usize>("indent").copied().unwrap_or(2),
            variables: m.get_flag("variables"),
            verbose: m.get_flag("verbose"),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            entity: p.entity,
            fields: p.fields,
            values: p.values,
            indent: p.indent,
            variables: p.variables,
        }
    }
}

fn collect_values(entity: Entity, m: &ArgMatches) -> Vec<(String, Value)> {
    let mut values = Vec::new();

    if entity.has_project() {
        if let Some(project) = m.get_one::<String>("project") {
            values.push(("projectName".to_string(), Value::from(project.as_str())));
        }
    }

    for &(arg, variable) in entity.list_filters() {
        if let Some(items) = m.get_many::<String>(arg) {
            let items: Vec<String> = items.cloned().collect();
            values.push((variable.to_string(), Value::from(items)));
        }
    }

    if entity == Entity::Versions {
        if let Some(numbers) = m.get_many::<i64>("versions") {
            let numbers: Vec<i64> = numbers.copied().collect();
            values.push(("versions".to_string(), Value::from(numbers)));
        }
    }

    for &(arg, variable) in entity.flag_filters() {
        if m.get_flag(arg) {
            values.push((variable.to_string(), Value::from(true)));
        }
    }

    values
}
