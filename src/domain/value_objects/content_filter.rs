//! Content filters
//!
//! A filter is either a compiled pattern or the structural "local module dependency" test.
//! Application resources are matched with Ant-style path globs, libraries by their
//! `group:artifact:version` notation.

use std::fmt;

use globset::{GlobBuilder, GlobMatcher};

use crate::domain::entities::Library;
use crate::error::{LayersError, LayersResult};

/// Something a [`ContentFilter`] can be evaluated against.
pub trait Content {
    /// Compiled pattern type for this kind of content.
    type Pattern: fmt::Debug + fmt::Display + Clone + PartialEq;

    /// Compile the text of an `include` / `exclude` element.
    fn compile_pattern(pattern: &str) -> LayersResult<Self::Pattern>;

    fn matches_pattern(&self, pattern: &Self::Pattern) -> bool;

    fn is_local_module(&self) -> bool;
}

/// A single include or exclude predicate.
pub enum ContentFilter<T: Content + ?Sized> {
    Pattern(T::Pattern),
    LocalModule,
}

impl<T: Content + ?Sized> ContentFilter<T> {
    pub fn pattern(pattern: &str) -> LayersResult<Self> {
        T::compile_pattern(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, item: &T) -> bool {
        match self {
            Self::Pattern(pattern) => item.matches_pattern(pattern),
            Self::LocalModule => item.is_local_module(),
        }
    }
}

// Manual impls: derives would demand `T: Clone` etc., which `str` cannot satisfy.
impl<T: Content + ?Sized> Clone for ContentFilter<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Pattern(p) => Self::Pattern(p.clone()),
            Self::LocalModule => Self::LocalModule,
        }
    }
}

impl<T: Content + ?Sized> PartialEq for ContentFilter<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Pattern(a), Self::Pattern(b)) => a == b,
            (Self::LocalModule, Self::LocalModule) => true,
            _ => false,
        }
    }
}

impl<T: Content + ?Sized> fmt::Debug for ContentFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            Self::LocalModule => f.write_str("LocalModule"),
        }
    }
}

impl<T: Content + ?Sized> fmt::Display for ContentFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(p) => write!(f, "{p}"),
            Self::LocalModule => f.write_str("<module-dependencies>"),
        }
    }
}

/// Ant-style path pattern over application resources (`org/app/**`, `**/*.class`).
#[derive(Debug, Clone)]
pub struct ApplicationPattern {
    pattern: String,
    matcher: GlobMatcher,
}

impl ApplicationPattern {
    pub fn new(pattern: &str) -> LayersResult<Self> {
        let matcher = GlobBuilder::new(&escape_glob(pattern, "[]{}\\"))
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|source| LayersError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();
        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

impl PartialEq for ApplicationPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl fmt::Display for ApplicationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Coordinate pattern over libraries (`com.example:*`, `*:*:*-SNAPSHOT`).
///
/// `*` matches any run of characters, `:` included. Patterns naming fewer than three
/// coordinate parts match any remaining parts.
#[derive(Debug, Clone)]
pub struct LibraryPattern {
    pattern: String,
    matcher: GlobMatcher,
}

impl LibraryPattern {
    pub fn new(pattern: &str) -> LayersResult<Self> {
        let mut glob = escape_glob(pattern, "?[]{}\\");
        if pattern.matches(':').count() < 2 {
            glob.push_str(":*");
        }
        let matcher = GlobBuilder::new(&glob)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|source| LayersError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();
        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, coordinates: &str) -> bool {
        self.matcher.is_match(coordinates)
    }
}

impl PartialEq for LibraryPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl fmt::Display for LibraryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Content for str {
    type Pattern = ApplicationPattern;

    fn compile_pattern(pattern: &str) -> LayersResult<Self::Pattern> {
        ApplicationPattern::new(pattern)
    }

    fn matches_pattern(&self, pattern: &Self::Pattern) -> bool {
        pattern.is_match(self)
    }

    fn is_local_module(&self) -> bool {
        false
    }
}

impl Content for Library {
    type Pattern = LibraryPattern;

    fn compile_pattern(pattern: &str) -> LayersResult<Self::Pattern> {
        LibraryPattern::new(pattern)
    }

    fn matches_pattern(&self, pattern: &Self::Pattern) -> bool {
        pattern.is_match(&self.standard_notation())
    }

    fn is_local_module(&self) -> bool {
        self.is_local()
    }
}

/// Backslash-escape every char in `special` so only the wildcards we support stay live.
fn escape_glob(pattern: &str, special: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if special.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
