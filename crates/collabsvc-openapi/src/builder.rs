//! Builder for assembling the bundled document from fragment mappings.

use crate::document::{BundledDocument, DocumentHeader};
use serde_yaml::Mapping;

/// Builder that merges path fragments and component definitions under a
/// fixed header.
///
/// # Example
///
/// ```
/// use collabsvc_openapi::BundleBuilder;
///
/// let fragment: serde_yaml::Mapping =
///     serde_yaml::from_str("/sessions:\n  get:\n    summary: List sessions\n").unwrap();
///
/// let document = BundleBuilder::new().merge_fragment(fragment).build();
/// assert_eq!(document.paths.len(), 1);
/// ```
///
/// # Conflict Resolution
///
/// Path keys are replaced whole: a later `merge_fragment` call overwrites
/// any earlier value stored under the same top-level key.
#[derive(Debug, Clone)]
pub struct BundleBuilder {
    header: DocumentHeader,
    paths: Mapping,
    components: Mapping,
}

impl Default for BundleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleBuilder {
    /// Create a builder with the collaboration-service header.
    pub fn new() -> Self {
        Self::with_header(DocumentHeader::default())
    }

    /// Create a builder with a custom header.
    pub fn with_header(header: DocumentHeader) -> Self {
        Self {
            header,
            paths: Mapping::new(),
            components: Mapping::new(),
        }
    }

    /// Merge every top-level entry of a fragment into `paths`.
    ///
    /// Last write wins on key collision.
    pub fn merge_fragment(mut self, fragment: Mapping) -> Self {
        for (key, value) in fragment {
            self.paths.insert(key, value);
        }
        self
    }

    /// Replace the `components` mapping.
    pub fn components(mut self, components: Mapping) -> Self {
        self.components = components;
        self
    }

    /// Assemble the final document.
    pub fn build(self) -> BundledDocument {
        BundledDocument {
            openapi: self.header.openapi,
            info: self.header.info,
            external_docs: self.header.external_docs,
            servers: self.header.servers,
            tags: self.header.tags,
            paths: self.paths,
            components: self.components,
        }
    }
}
