//! Variable registry: named, typed parameters declared for one query.
//!
//! Declaration is structural (name and type end up in the query header),
//! value assignment is per call. A query built once can be re-run with
//! fresh values without touching its field tree.

use indexmap::IndexMap;

use crate::value::Value;
use crate::{Error, Result};

/// A declared query variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    value_type: String,
    value: Option<Value>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type expression as written in the header, e.g. `[String!]`.
    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// Handle to a declared variable, used to bind filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarRef(String);

impl VarRef {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VarRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Declaration-ordered registry of variables.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    entries: IndexMap<String, Variable>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable. Fails if the name is taken, leaving the
    /// registry untouched.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        value_type: impl Into<String>,
        value: Option<Value>,
    ) -> Result<VarRef> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            tracing::warn!(variable = %name, "variable already declared");
            return Err(Error::VariableConflict(name));
        }

        let variable = Variable {
            name: name.clone(),
            value_type: value_type.into(),
            value,
        };
        tracing::debug!(
            variable = %name,
            value_type = %variable.value_type,
            has_value = variable.has_value(),
            "declared variable"
        );
        self.entries.insert(name.clone(), variable);
        Ok(VarRef(name))
    }

    /// Assign a value, replacing any previous one.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let Some(variable) = self.entries.get_mut(name) else {
            tracing::warn!(variable = %name, "value assigned to undeclared variable");
            return Err(Error::VariableNotFound(name.to_string()));
        };
        variable.value = Some(value.into());
        tracing::debug!(variable = %name, "assigned variable value");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.values()
    }

    /// Assigned values by name, in declaration order. Variables that were
    /// never given a value are left out.
    pub fn values(&self) -> IndexMap<String, Value> {
        self.entries
            .values()
            .filter_map(|v| v.value.clone().map(|value| (v.name.clone(), value)))
            .collect()
    }

    /// `(name, type)` pairs in declaration order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|v| (v.name.as_str(), v.value_type.as_str()))
    }
}
