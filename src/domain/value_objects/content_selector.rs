//! Content selector
//!
//! Assigns content to a layer: an item is contained when some include filter matches
//! (or there are no includes) and no exclude filter matches.

use std::fmt;

use super::content_filter::{Content, ContentFilter};
use crate::domain::entities::Layer;
use crate::error::LayersResult;

pub struct ContentSelector<T: Content + ?Sized> {
    layer: Layer,
    includes: Vec<ContentFilter<T>>,
    excludes: Vec<ContentFilter<T>>,
}

impl<T: Content + ?Sized> ContentSelector<T> {
    pub fn new(layer: Layer, includes: Vec<ContentFilter<T>>, excludes: Vec<ContentFilter<T>>) -> Self {
        Self {
            layer,
            includes,
            excludes,
        }
    }

    /// Compile include/exclude pattern text into pattern filters.
    pub fn from_patterns<I, E>(layer: Layer, includes: I, excludes: E) -> LayersResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let includes = includes
            .into_iter()
            .map(|p| ContentFilter::pattern(p.as_ref()))
            .collect::<LayersResult<Vec<_>>>()?;
        let excludes = excludes
            .into_iter()
            .map(|p| ContentFilter::pattern(p.as_ref()))
            .collect::<LayersResult<Vec<_>>>()?;
        Ok(Self::new(layer, includes, excludes))
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn includes(&self) -> &[ContentFilter<T>] {
        &self.includes
    }

    pub fn excludes(&self) -> &[ContentFilter<T>] {
        &self.excludes
    }

    pub fn contains(&self, item: &T) -> bool {
        self.is_included(item) && !self.is_excluded(item)
    }

    fn is_included(&self, item: &T) -> bool {
        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(item))
    }

    fn is_excluded(&self, item: &T) -> bool {
        self.excludes.iter().any(|f| f.matches(item))
    }
}

impl<T: Content + ?Sized> Clone for ContentSelector<T> {
    fn clone(&self) -> Self {
        Self {
            layer: self.layer.clone(),
            includes: self.includes.clone(),
            excludes: self.excludes.clone(),
        }
    }
}

impl<T: Content + ?Sized> PartialEq for ContentSelector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.layer == other.layer && self.includes == other.includes && self.excludes == other.excludes
    }
}

impl<T: Content + ?Sized> fmt::Debug for ContentSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentSelector")
            .field("layer", &self.layer)
            .field("includes", &self.includes)
            .field("excludes", &self.excludes)
            .finish()
    }
}
