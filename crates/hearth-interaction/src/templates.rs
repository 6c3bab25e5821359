//! Reply template tables.
//!
//! A table is an ordered list of `(keyword, template)` pairs plus a default
//! template. Order is a behavioral contract: the first keyword that appears
//! as a substring of the lowercased input wins, and nothing here depends on
//! map iteration order.

use std::collections::HashMap;

/// The reserved context whose table backs every unknown context.
pub const GENERAL_CONTEXT: &str = "general";

/// An ordered keyword-to-template table with a default entry.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    entries: Vec<(String, String)>,
    default_template: String,
}

impl TemplateTable {
    /// Creates a table with its default template and no keyword entries.
    pub fn new(default_template: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            default_template: default_template.into(),
        }
    }

    /// Appends a keyword entry. Keywords are matched case-insensitively and
    /// stored lowercased; insertion order is evaluation order.
    pub fn with_entry(mut self, keyword: impl Into<String>, template: impl Into<String>) -> Self {
        self.entries
            .push((keyword.into().to_lowercase(), template.into()));
        self
    }

    /// Selects the template for an already-lowercased input: first keyword
    /// that is a substring wins, otherwise the default.
    pub fn select<'a>(&'a self, input_lower: &str) -> &'a str {
        for (keyword, template) in &self.entries {
            if input_lower.contains(keyword.as_str()) {
                return template;
            }
        }
        &self.default_template
    }

    /// The table's default template.
    pub fn default_template(&self) -> &str {
        &self.default_template
    }
}

/// Context-label to table mapping with a guaranteed general fallback.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    tables: HashMap<String, TemplateTable>,
}

impl TemplateSet {
    /// Creates a set from its general table, which also serves as the
    /// fallback for unknown contexts.
    pub fn new(general: TemplateTable) -> Self {
        let mut tables = HashMap::new();
        tables.insert(GENERAL_CONTEXT.to_string(), general);
        Self { tables }
    }

    /// Registers the table for a context label.
    pub fn with_context(mut self, context: impl Into<String>, table: TemplateTable) -> Self {
        self.tables.insert(context.into(), table);
        self
    }

    /// Resolves the table for a context, falling back to general.
    pub fn resolve(&self, context: &str) -> &TemplateTable {
        self.tables
            .get(context)
            .unwrap_or_else(|| &self.tables[GENERAL_CONTEXT])
    }
}
