//! Field tree: selectable fields, their sub-selections and filters.
//!
//! Nodes live in an arena owned by [`Query`] and are addressed by
//! [`FieldId`]. Mutation goes through [`FieldMut`], which borrows the whole
//! query so that filters can be checked against the variable registry at
//! bind time.

use indexmap::IndexMap;

use crate::query::Query;
use crate::{Error, Result};

/// Index of a field node within its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(usize);

impl FieldId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// One selected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    name: String,
    children: Vec<FieldId>,
    /// argument name -> variable name
    filters: IndexMap<String, String>,
}

impl FieldNode {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
            filters: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sub-selections in insertion order.
    pub fn children(&self) -> &[FieldId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// `(argument, variable)` pairs in insertion order.
    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }

    pub fn filter(&self, argument: &str) -> Option<&str> {
        self.filters.get(argument).map(String::as_str)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Mutable handle to a field node.
pub struct FieldMut<'q> {
    query: &'q mut Query,
    id: FieldId,
}

impl<'q> FieldMut<'q> {
    pub(crate) fn new(query: &'q mut Query, id: FieldId) -> Self {
        Self { query, id }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.node().name()
    }

    pub fn node(&self) -> &FieldNode {
        self.query.node(self.id)
    }

    fn node_mut(&mut self) -> &mut FieldNode {
        self.query.node_mut(self.id)
    }

    /// Append a new child field and return it. Repeated names are kept.
    pub fn add_field(&mut self, name: impl Into<String>) -> FieldMut<'_> {
        let child = self.query.alloc(name.into());
        self.node_mut().children.push(child);
        tracing::debug!(parent = %self.name(), field = %self.query.node(child).name(), "added field");
        FieldMut::new(&mut *self.query, child)
    }

    /// Return the first child named `name`, adding it if missing.
    pub fn ensure_field(&mut self, name: &str) -> FieldMut<'_> {
        let existing = self
            .node()
            .children
            .iter()
            .copied()
            .find(|&child| self.query.node(child).name() == name);

        match existing {
            Some(child) => FieldMut::new(&mut *self.query, child),
            None => self.add_field(name),
        }
    }

    /// Walk a dotted path (`attrib.frameStart`) below this field, adding
    /// missing segments. Returns the last segment's field.
    pub fn add_field_path(&mut self, path: &str) -> FieldMut<'_> {
        let mut current = self.id;
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            current = FieldMut::new(&mut *self.query, current)
                .ensure_field(segment)
                .id();
        }
        FieldMut::new(&mut *self.query, current)
    }

    /// Bind `argument` to a declared variable.
    ///
    /// Fails if the argument is already bound here or the variable is not
    /// declared on the owning query.
    pub fn set_filter(
        &mut self,
        argument: impl Into<String>,
        variable: impl AsRef<str>,
    ) -> Result<()> {
        let argument = argument.into();
        let variable = variable.as_ref();

        if self.node().filters.contains_key(&argument) {
            tracing::warn!(field = %self.name(), %argument, "filter already set");
            return Err(Error::FilterConflict {
                field: self.name().to_string(),
                argument,
            });
        }

        if !self.query.variables().contains(variable) {
            tracing::warn!(field = %self.name(), %argument, %variable, "filter references undeclared variable");
            return Err(Error::UndefinedVariable {
                argument,
                variable: variable.to_string(),
            });
        }

        tracing::debug!(field = %self.name(), %argument, %variable, "set filter");
        self.node_mut()
            .filters
            .insert(argument, variable.to_string());
        Ok(())
    }

    /// Unbind `argument`. Returns the variable it was bound to, or `None`
    /// if nothing was bound.
    pub fn remove_filter(&mut self, argument: &str) -> Option<String> {
        let removed = self.node_mut().filters.shift_remove(argument);
        if removed.is_some() {
            tracing::debug!(field = %self.name(), %argument, "removed filter");
        }
        removed
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.node().filters()
    }
}
