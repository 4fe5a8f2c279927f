//! Query text rendering.
//!
//! Output shape:
//!
//! ```text
//! query FoldersQuery(
//!   $projectName: String!
//!   $folderIds: [String!]
//! ) {
//!   project(name: $projectName) {
//!     folders(ids: $folderIds) {
//!       name
//!     }
//!   }
//! }
//! ```
//!
//! A single variable stays on the header line: `query Q($name: String!) {`.
//! No trailing newline.

use std::fmt::Write;

use crate::field::FieldNode;
use crate::query::Query;

const DEFAULT_INDENT: usize = 2;

pub struct QueryPrinter<'q> {
    query: &'q Query,
    indent: usize,
}

impl<'q> QueryPrinter<'q> {
    pub fn new(query: &'q Query) -> Self {
        Self {
            query,
            indent: DEFAULT_INDENT,
        }
    }

    /// Spaces per nesting level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_header(w)?;
        for field in self.query.fields() {
            self.format_field(field, 1, w)?;
        }
        write!(w, "\n}}")
    }

    fn format_header(&self, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "query {}", self.query.name())?;

        let variables = self.query.variables();
        match variables.len() {
            0 => {}
            1 => {
                for (name, value_type) in variables.declarations() {
                    write!(w, "(${}: {})", name, value_type)?;
                }
            }
            _ => {
                let prefix = self.prefix(1);
                write!(w, "(")?;
                for (name, value_type) in variables.declarations() {
                    write!(w, "\n{}${}: {}", prefix, name, value_type)?;
                }
                write!(w, "\n)")?;
            }
        }

        write!(w, " {{")
    }

    fn format_field(&self, field: &FieldNode, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = self.prefix(depth);
        write!(w, "\n{}{}", prefix, field.name())?;

        if field.has_filters() {
            write!(w, "(")?;
            for (i, (argument, variable)) in field.filters().enumerate() {
                if i > 0 {
                    write!(w, ", ")?;
                }
                write!(w, "{}: ${}", argument, variable)?;
            }
            write!(w, ")")?;
        }

        if !field.has_children() {
            return Ok(());
        }

        write!(w, " {{")?;
        for child in self.query.children(field) {
            self.format_field(child, depth + 1, w)?;
        }
        write!(w, "\n{}}}", prefix)
    }

    fn prefix(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }
}
