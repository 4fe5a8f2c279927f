//! Query root: named container for the field tree and its variables.

use indexmap::IndexMap;

use crate::field::{FieldId, FieldMut, FieldNode};
use crate::printer::QueryPrinter;
use crate::value::Value;
use crate::variables::{VarRef, Variable, Variables};
use crate::{Error, Result};

/// A GraphQL query under construction.
///
/// Create with [`new`](Self::new), declare variables, add fields and bind
/// filters, then call [`calculate_query`](Self::calculate_query) for the
/// text and [`variables_values`](Self::variables_values) for the values.
#[derive(Debug, Clone)]
pub struct Query {
    name: String,
    variables: Variables,
    nodes: Vec<FieldNode>,
    roots: Vec<FieldId>,
}

impl Query {
    /// Create an empty query. `name` becomes the operation name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Variables::new(),
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a variable without a value.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Result<VarRef> {
        self.variables.declare(name, value_type, None)
    }

    /// Declare a variable with an initial value.
    pub fn add_variable_with_value(
        &mut self,
        name: impl Into<String>,
        value_type: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<VarRef> {
        self.variables
            .declare(name, value_type, Some(value.into()))
    }

    pub fn set_variable_value(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.variables.set_value(name, value)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Values of all variables that have one, in declaration order.
    pub fn variables_values(&self) -> IndexMap<String, Value> {
        self.variables.values()
    }

    /// [`variables_values`](Self::variables_values) as a JSON object.
    pub fn variables_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.variables_values())
    }

    /// Append a top-level field and return it.
    pub fn add_field(&mut self, name: impl Into<String>) -> FieldMut<'_> {
        let id = self.alloc(name.into());
        self.roots.push(id);
        tracing::debug!(query = %self.name, field = %self.node(id).name(), "added top-level field");
        FieldMut::new(self, id)
    }

    /// Top-level fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldNode> {
        self.roots.iter().map(|&id| self.node(id))
    }

    pub fn field_ids(&self) -> &[FieldId] {
        &self.roots
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldNode> {
        self.nodes.get(id.index())
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<FieldMut<'_>> {
        if id.index() >= self.nodes.len() {
            return None;
        }
        Some(FieldMut::new(self, id))
    }

    /// Children of `node`, in insertion order.
    pub fn children<'a>(&'a self, node: &'a FieldNode) -> impl Iterator<Item = &'a FieldNode> {
        node.children().iter().map(|&id| self.node(id))
    }

    /// Follow field names from the top level down, taking the first match
    /// at each level.
    pub fn field_by_path(&self, path: &[&str]) -> Option<FieldId> {
        let (first, rest) = path.split_first()?;
        let mut current = self
            .roots
            .iter()
            .copied()
            .find(|&id| self.node(id).name() == *first)?;

        for segment in rest {
            current = self
                .node(current)
                .children()
                .iter()
                .copied()
                .find(|&id| self.node(id).name() == *segment)?;
        }
        Some(current)
    }

    /// Printer over the current state of the query.
    pub fn printer(&self) -> QueryPrinter<'_> {
        QueryPrinter::new(self)
    }

    /// Render the query text.
    ///
    /// Fails when there are no top-level fields. Variable values are not
    /// part of the text.
    pub fn calculate_query(&self) -> Result<String> {
        self.ensure_fields()?;

        let text = self.printer().dump();
        tracing::debug!(
            query = %self.name,
            fields = self.nodes.len(),
            variables = self.variables.len(),
            "rendered query"
        );
        Ok(text)
    }

    /// Check that there is something to select.
    ///
    /// [`calculate_query`](Self::calculate_query) runs this first; call it
    /// directly before rendering through a configured [`printer`](Self::printer).
    pub fn ensure_fields(&self) -> Result<()> {
        if self.roots.is_empty() {
            tracing::warn!(query = %self.name, "query has no fields");
            return Err(Error::MissingFields(self.name.clone()));
        }
        Ok(())
    }

    pub(crate) fn alloc(&mut self, name: String) -> FieldId {
        let id = FieldId::new(self.nodes.len());
        self.nodes.push(FieldNode::new(name));
        id
    }

    // FieldIds are only minted by `alloc` and nodes are never removed.
    pub(crate) fn node(&self, id: FieldId) -> &FieldNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: FieldId) -> &mut FieldNode {
        &mut self.nodes[id.index()]
    }
}
