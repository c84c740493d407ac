//! Layers compiler
//!
//! Turns a validated `layers.xml` document into [`CustomLayers`]:
//! validate, extract selectors for `application` and `dependencies`, extract `layerOrder`.
//! Nothing here checks that selector layers appear in the order; consumers decide that.

use tracing::{debug, trace};

use crate::domain::entities::{CustomLayers, Element, Layer, Library};
use crate::domain::services::DocumentValidator;
use crate::domain::value_objects::{Content, ContentFilter, ContentSelector, Schema};
use crate::error::{LayersError, LayersResult};

const APPLICATION: &str = "application";
const DEPENDENCIES: &str = "dependencies";
const LAYER_ORDER: &str = "layerOrder";
const LAYER: &str = "layer";
const INCLUDE: &str = "include";
const EXCLUDE: &str = "exclude";
const INCLUDE_MODULE_DEPENDENCIES: &str = "includeModuleDependencies";
const EXCLUDE_MODULE_DEPENDENCIES: &str = "excludeModuleDependencies";

/// Stateless compiler bound to a schema.
#[derive(Debug, Clone, Copy)]
pub struct LayersCompiler<'s> {
    validator: DocumentValidator<'s>,
}

impl<'s> LayersCompiler<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            validator: DocumentValidator::new(schema),
        }
    }

    pub fn compile(&self, document: &Element) -> LayersResult<CustomLayers> {
        self.validate(document)?;
        let application_selectors = application_selectors(document)?;
        let library_selectors = library_selectors(document)?;
        let layers = layer_order(document)?;
        debug!(
            layers = layers.len(),
            application_selectors = application_selectors.len(),
            library_selectors = library_selectors.len(),
            "compiled layers descriptor"
        );
        Ok(CustomLayers::new(layers, application_selectors, library_selectors))
    }

    pub fn validate(&self, document: &Element) -> LayersResult<()> {
        self.validator
            .validate(document)
            .map_err(|source| LayersError::InvalidConfiguration { source })
    }
}

/// Explicit layer order; empty when the document has no `layerOrder`.
pub fn layer_order(root: &Element) -> LayersResult<Vec<Layer>> {
    let Some(order) = child_element(root, LAYER_ORDER)? else {
        debug!("no layerOrder declared");
        return Ok(Vec::new());
    };
    Ok(child_texts(order, LAYER).map(Layer::new).collect())
}

pub fn application_selectors(root: &Element) -> LayersResult<Vec<ContentSelector<str>>> {
    selectors(root, APPLICATION, selector::<str>)
}

pub fn library_selectors(root: &Element) -> LayersResult<Vec<ContentSelector<Library>>> {
    selectors(root, DEPENDENCIES, library_selector)
}

/// One selector per child element of `section`, in document order.
fn selectors<T, F>(root: &Element, section: &str, factory: F) -> LayersResult<Vec<ContentSelector<T>>>
where
    T: Content + ?Sized,
    F: Fn(&Element) -> LayersResult<ContentSelector<T>>,
{
    let Some(element) = child_element(root, section)? else {
        return Ok(Vec::new());
    };
    let selectors = element
        .children()
        .iter()
        .map(&factory)
        .collect::<LayersResult<Vec<_>>>()?;
    debug!(section, count = selectors.len(), "extracted selectors");
    Ok(selectors)
}

fn selector<T: Content + ?Sized>(element: &Element) -> LayersResult<ContentSelector<T>> {
    let layer = target_layer(element);
    trace!(%layer, "selector");
    ContentSelector::from_patterns(layer, child_texts(element, INCLUDE), child_texts(element, EXCLUDE))
}

fn library_selector(element: &Element) -> LayersResult<ContentSelector<Library>> {
    let layer = target_layer(element);
    let mut includes = pattern_filters::<Library>(element, INCLUDE)?;
    if child_element(element, INCLUDE_MODULE_DEPENDENCIES)?.is_some() {
        includes.push(ContentFilter::LocalModule);
    }
    let mut excludes = pattern_filters::<Library>(element, EXCLUDE)?;
    if child_element(element, EXCLUDE_MODULE_DEPENDENCIES)?.is_some() {
        excludes.push(ContentFilter::LocalModule);
    }
    trace!(%layer, includes = includes.len(), excludes = excludes.len(), "library selector");
    Ok(ContentSelector::new(layer, includes, excludes))
}

fn target_layer(element: &Element) -> Layer {
    Layer::new(element.attribute(LAYER).unwrap_or_default().trim())
}

fn pattern_filters<T: Content + ?Sized>(
    element: &Element,
    tag: &str,
) -> LayersResult<Vec<ContentFilter<T>>> {
    child_texts(element, tag).map(ContentFilter::<T>::pattern).collect()
}

fn child_texts<'a>(element: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    element.children_named(tag).map(|e| e.text().trim())
}

/// The single child named `tag`, if any. More than one is a configuration error.
fn child_element<'a>(element: &'a Element, tag: &str) -> LayersResult<Option<&'a Element>> {
    let mut matches = element.children().iter().filter(|c| c.name() == tag);
    let first = matches.next();
    if matches.next().is_some() {
        return Err(LayersError::MultipleNodes {
            tag: tag.to_string(),
        });
    }
    Ok(first)
}
