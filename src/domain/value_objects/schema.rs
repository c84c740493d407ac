//! Descriptor schema
//!
//! The content model a `layers.xml` document is validated against. Deserialized from the
//! versioned schema asset shipped with the binary.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    pub version: String,
    #[serde(default)]
    pub namespace: Option<String>,
    /// Attribute namespaces that are accepted anywhere and never validated.
    #[serde(default)]
    pub ignored_attribute_namespaces: Vec<String>,
    pub root: String,
    pub elements: BTreeMap<String, ElementRule>,
}

impl Schema {
    pub fn rule(&self, key: &str) -> Option<&ElementRule> {
        self.elements.get(key)
    }

    /// Check that the root and every child reference resolve to a rule.
    pub fn check_references(&self) -> Result<(), String> {
        if !self.elements.contains_key(&self.root) {
            return Err(format!("root element '{}' has no rule", self.root));
        }
        for (key, rule) in &self.elements {
            if rule.content != ContentModel::Elements && !rule.children.is_empty() {
                return Err(format!("'{key}' declares children but its content is not 'elements'"));
            }
            for child in &rule.children {
                if !self.elements.contains_key(child.rule_key()) {
                    return Err(format!(
                        "'{key}' references undefined rule '{}'",
                        child.rule_key()
                    ));
                }
                if matches!(child.max, Some(max) if max < child.min) {
                    return Err(format!("'{key}' child '{}' has max < min", child.name));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementRule {
    #[serde(default)]
    pub attributes: Vec<AttributeRule>,
    #[serde(default)]
    pub content: ContentModel,
    /// Child elements, as a sequence in declaration order.
    #[serde(default)]
    pub children: Vec<ChildRule>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentModel {
    /// No children, no text.
    #[default]
    Empty,
    /// Child elements only; whitespace between them is allowed.
    Elements,
    /// Non-blank character data.
    Text,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeRule {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub non_blank: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChildRule {
    pub name: String,
    /// Other element names accepted in this position.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Key into [`Schema::elements`]; defaults to `name`.
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub min: usize,
    /// `None` means unbounded.
    #[serde(default)]
    pub max: Option<usize>,
}

impl ChildRule {
    pub fn accepts(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|a| a == name)
    }

    pub fn rule_key(&self) -> &str {
        self.rule.as_deref().unwrap_or(&self.name)
    }
}

/// Why a document does not conform to the [`Schema`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("expected root element '{expected}' but found '{found}'")]
    UnexpectedRoot { expected: String, found: String },

    #[error("element {path} is in namespace '{found}', expected '{expected}'")]
    WrongNamespace {
        path: String,
        expected: String,
        found: String,
    },

    #[error("unexpected element '{element}' in {path}")]
    UnexpectedElement { path: String, element: String },

    #[error("{path} requires at least {min} '{element}' element(s), found {found}")]
    MissingElement {
        path: String,
        element: String,
        min: usize,
        found: usize,
    },

    #[error("{path} allows at most {max} '{element}' element(s), found {found}")]
    TooManyElements {
        path: String,
        element: String,
        max: usize,
        found: usize,
    },

    #[error("{path} is missing required attribute '{attribute}'")]
    MissingAttribute { path: String, attribute: String },

    #[error("attribute '{attribute}' on {path} must not be blank")]
    BlankAttribute { path: String, attribute: String },

    #[error("attribute '{attribute}' is not allowed on {path}")]
    UnexpectedAttribute { path: String, attribute: String },

    #[error("text content is not allowed in {path}")]
    UnexpectedText { path: String },

    #[error("{path} must not be empty")]
    EmptyText { path: String },

    #[error("{path} is nested deeper than {limit} elements")]
    TooDeep { path: String, limit: usize },

    #[error("schema has no rule for '{rule}' (referenced from {path})")]
    UnknownRule { path: String, rule: String },
}
