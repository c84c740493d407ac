//! Document validator
//!
//! Checks a parsed descriptor against a [`Schema`]. Content models are sequences: each
//! child rule consumes a run of matching elements, in declaration order.

use crate::domain::entities::Element;
use crate::domain::value_objects::{ContentModel, ElementRule, Schema, SchemaViolation};

#[derive(Debug, Clone, Copy)]
pub struct DocumentValidator<'s> {
    schema: &'s Schema,
}

impl<'s> DocumentValidator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    pub fn validate(&self, root: &Element) -> Result<(), SchemaViolation> {
        if root.name() != self.schema.root {
            return Err(SchemaViolation::UnexpectedRoot {
                expected: self.schema.root.clone(),
                found: root.name().to_string(),
            });
        }

        let path = format!("/{}", root.name());
        if let Some(found) = root.namespace() {
            if self.schema.namespace.as_deref() != Some(found) {
                return Err(SchemaViolation::WrongNamespace {
                    path,
                    expected: self.schema.namespace.clone().unwrap_or_default(),
                    found: found.to_string(),
                });
            }
        }

        let rule = self.rule(&self.schema.root, &path)?;
        self.validate_element(root, rule, &path, root.namespace())
    }

    fn rule(&self, key: &str, path: &str) -> Result<&'s ElementRule, SchemaViolation> {
        self.schema.rule(key).ok_or_else(|| SchemaViolation::UnknownRule {
            path: path.to_string(),
            rule: key.to_string(),
        })
    }

    fn validate_element(
        &self,
        element: &Element,
        rule: &ElementRule,
        path: &str,
        namespace: Option<&str>,
    ) -> Result<(), SchemaViolation> {
        if element.namespace() != namespace {
            return Err(SchemaViolation::WrongNamespace {
                path: path.to_string(),
                expected: namespace.unwrap_or_default().to_string(),
                found: element.namespace().unwrap_or_default().to_string(),
            });
        }

        self.validate_attributes(element, rule, path)?;

        let has_text = !element.text().trim().is_empty();
        match rule.content {
            ContentModel::Empty | ContentModel::Text => {
                if let Some(child) = element.children().first() {
                    return Err(SchemaViolation::UnexpectedElement {
                        path: path.to_string(),
                        element: child.name().to_string(),
                    });
                }
                if rule.content == ContentModel::Empty && has_text {
                    return Err(SchemaViolation::UnexpectedText {
                        path: path.to_string(),
                    });
                }
                if rule.content == ContentModel::Text && !has_text {
                    return Err(SchemaViolation::EmptyText {
                        path: path.to_string(),
                    });
                }
                Ok(())
            }
            ContentModel::Elements => {
                if has_text {
                    return Err(SchemaViolation::UnexpectedText {
                        path: path.to_string(),
                    });
                }
                self.validate_children(element, rule, path, namespace)
            }
        }
    }

    fn validate_attributes(
        &self,
        element: &Element,
        rule: &ElementRule,
        path: &str,
    ) -> Result<(), SchemaViolation> {
        for attribute in element.attributes() {
            if let Some(ns) = &attribute.namespace {
                if self.schema.ignored_attribute_namespaces.contains(ns) {
                    continue;
                }
            }
            let declared = attribute.namespace.is_none()
                && rule.attributes.iter().any(|a| a.name == attribute.name);
            if !declared {
                return Err(SchemaViolation::UnexpectedAttribute {
                    path: path.to_string(),
                    attribute: attribute.name.clone(),
                });
            }
        }

        for declared in &rule.attributes {
            match element.attribute(&declared.name) {
                None if declared.required => {
                    return Err(SchemaViolation::MissingAttribute {
                        path: path.to_string(),
                        attribute: declared.name.clone(),
                    });
                }
                Some(value) if declared.non_blank && value.trim().is_empty() => {
                    return Err(SchemaViolation::BlankAttribute {
                        path: path.to_string(),
                        attribute: declared.name.clone(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn validate_children(
        &self,
        element: &Element,
        rule: &ElementRule,
        path: &str,
        namespace: Option<&str>,
    ) -> Result<(), SchemaViolation> {
        let children = element.children();
        let mut next = 0;

        for child_rule in &rule.children {
            let start = next;
            while next < children.len() && child_rule.accepts(children[next].name()) {
                next += 1;
            }
            let found = next - start;

            if found < child_rule.min {
                return Err(SchemaViolation::MissingElement {
                    path: path.to_string(),
                    element: child_rule.name.clone(),
                    min: child_rule.min,
                    found,
                });
            }
            if let Some(max) = child_rule.max {
                if found > max {
                    return Err(SchemaViolation::TooManyElements {
                        path: path.to_string(),
                        element: child_rule.name.clone(),
                        max,
                        found,
                    });
                }
            }

            let child_rule_def = self.rule(child_rule.rule_key(), path)?;
            for (index, child) in children[start..next].iter().enumerate() {
                let child_path = if found == 1 {
                    format!("{path}/{}", child.name())
                } else {
                    format!("{path}/{}[{}]", child.name(), index + 1)
                };
                self.validate_element(child, child_rule_def, &child_path, namespace)?;
            }
        }

        if let Some(extra) = children.get(next) {
            return Err(SchemaViolation::UnexpectedElement {
                path: path.to_string(),
                element: extra.name().to_string(),
            });
        }
        Ok(())
    }
}
