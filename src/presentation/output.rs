//! Output Rendering
//!
//! Text and JSON renderings of compiled layers, assignments and the schema.

use std::fmt::Write as _;

use serde::Serialize;

use crate::application::Assignment;
use crate::domain::entities::{CustomLayers, Layer, Layers};
use crate::domain::value_objects::{Content, ContentSelector, Schema};

/// Serializable form of [`CustomLayers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayersView {
    pub layers: Vec<Layer>,
    pub application: Vec<SelectorView>,
    pub dependencies: Vec<SelectorView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    pub layer: Layer,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl<T: Content + ?Sized> From<&ContentSelector<T>> for SelectorView {
    fn from(selector: &ContentSelector<T>) -> Self {
        Self {
            layer: selector.layer().clone(),
            includes: selector.includes().iter().map(ToString::to_string).collect(),
            excludes: selector.excludes().iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<&CustomLayers> for LayersView {
    fn from(layers: &CustomLayers) -> Self {
        Self {
            layers: layers.layers().to_vec(),
            application: layers
                .application_selectors()
                .iter()
                .map(SelectorView::from)
                .collect(),
            dependencies: layers
                .library_selectors()
                .iter()
                .map(SelectorView::from)
                .collect(),
        }
    }
}

/// Serializable summary of the embedded schema.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaView<'a> {
    pub version: &'a str,
    pub namespace: Option<&'a str>,
    pub root: &'a str,
    pub elements: Vec<&'a str>,
}

impl<'a> From<&'a Schema> for SchemaView<'a> {
    fn from(schema: &'a Schema) -> Self {
        Self {
            version: &schema.version,
            namespace: schema.namespace.as_deref(),
            root: &schema.root,
            elements: schema.elements.keys().map(String::as_str).collect(),
        }
    }
}

pub fn render_layers_text(layers: &CustomLayers) -> String {
    let mut out = String::new();

    if layers.has_explicit_order() {
        out.push_str("Layers (declared order):\n");
    } else {
        out.push_str("Layers (standard order, none declared):\n");
    }
    for (i, layer) in layers.effective_order().iter().enumerate() {
        let _ = writeln!(out, "  {}. {layer}", i + 1);
    }

    out.push_str("Application selectors:\n");
    render_selectors(&mut out, layers.application_selectors());
    out.push_str("Library selectors:\n");
    render_selectors(&mut out, layers.library_selectors());

    out
}

fn render_selectors<T: Content + ?Sized>(out: &mut String, selectors: &[ContentSelector<T>]) {
    if selectors.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for selector in selectors {
        let _ = writeln!(out, "  {}", selector.layer());
        if selector.includes().is_empty() {
            out.push_str("    include (everything)\n");
        }
        for include in selector.includes() {
            let _ = writeln!(out, "    include {include}");
        }
        for exclude in selector.excludes() {
            let _ = writeln!(out, "    exclude {exclude}");
        }
    }
}

pub fn render_assignments_text(assignments: &[Assignment]) -> String {
    let width = assignments
        .iter()
        .map(|a| a.item.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for assignment in assignments {
        let _ = writeln!(
            out,
            "{:<width$}  -> {}",
            assignment.item,
            assignment.layer,
            width = width
        );
    }
    out
}

pub fn render_schema_text(schema: &Schema) -> String {
    let view = SchemaView::from(schema);
    let mut out = String::new();
    let _ = writeln!(out, "layers.xml schema {}", view.version);
    if let Some(namespace) = view.namespace {
        let _ = writeln!(out, "  namespace: {namespace}");
    }
    let _ = writeln!(out, "  root: {}", view.root);
    let _ = writeln!(out, "  rules: {}", view.elements.join(", "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{compile_str, AssignRequest, AssignUseCase};
    use crate::domain::entities::Library;
    use crate::domain::policies::StandardLayers;

    const WORKED_EXAMPLE: &str = r#"<layers xmlns="http://www.springframework.org/schema/boot/layers">
    <application>
        <into layer="app">
            <include>org/app/**</include>
        </into>
    </application>
    <dependencies>
        <into layer="deps">
            <excludeModuleDependencies/>
        </into>
    </dependencies>
    <layerOrder>
        <layer>deps</layer>
        <layer>app</layer>
    </layerOrder>
</layers>"#;

    #[test]
    fn render_worked_example_text() {
        let layers = compile_str(WORKED_EXAMPLE).unwrap();
        insta::assert_snapshot!(render_layers_text(&layers), @r"
        Layers (declared order):
          1. deps
          2. app
        Application selectors:
          app
            include org/app/**
        Library selectors:
          deps
            include (everything)
            exclude <module-dependencies>
        ");
    }

    #[test]
    fn render_without_layer_order_uses_standard_order() {
        let layers = compile_str("<layers/>").unwrap();
        insta::assert_snapshot!(render_layers_text(&layers), @r"
        Layers (standard order, none declared):
          1. dependencies
          2. spring-boot-loader
          3. snapshot-dependencies
          4. application
        Application selectors:
          (none)
        Library selectors:
          (none)
        ");
    }

    #[test]
    fn layers_view_serializes_module_filters() {
        let layers = compile_str(WORKED_EXAMPLE).unwrap();
        let json = serde_json::to_value(LayersView::from(&layers)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "layers": ["deps", "app"],
                "application": [
                    {"layer": "app", "includes": ["org/app/**"], "excludes": []}
                ],
                "dependencies": [
                    {"layer": "deps", "includes": [], "excludes": ["<module-dependencies>"]}
                ]
            })
        );
    }

    #[test]
    fn render_assignments_aligns_items() {
        let standard = StandardLayers::default();
        let request = AssignRequest {
            resources: vec!["org/app/Main.class".to_string()],
            libraries: vec![Library::from_coordinates("com.acme:core:1.0-SNAPSHOT".parse().unwrap())],
        };
        let assignments = AssignUseCase::new(&standard).assign(&request).unwrap();

        insta::assert_snapshot!(render_assignments_text(&assignments), @r"
        org/app/Main.class          -> application
        com.acme:core:1.0-SNAPSHOT  -> snapshot-dependencies
        ");
    }
}
