//! The bundled OpenAPI document and its fixed header.
//!
//! Field declaration order on [`BundledDocument`] is the serialization order
//! of the output file.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// The `info` block of the bundled document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Info {
    /// API title.
    pub title: String,
    /// Human-readable description.
    pub description: String,
    /// API version.
    pub version: String,
}

/// Link to external documentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalDocs {
    /// What the linked documentation covers.
    pub description: String,
    /// Documentation URL.
    pub url: String,
}

/// A server entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Server {
    /// Base URL of the server.
    pub url: String,
}

/// A tag descriptor (name plus description).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Tag name as referenced by operations.
    pub name: String,
    /// Short description shown in generated docs.
    pub description: String,
}

impl Tag {
    /// Create a new tag descriptor.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The fixed metadata injected at the top of every bundled document.
///
/// The collaboration-service values live in [`DocumentHeader::default`];
/// that impl is the single place to change them. Callers needing a different
/// header pass their own to [`BundleBuilder::with_header`] or
/// [`bundle_with_header`].
///
/// [`BundleBuilder::with_header`]: crate::BundleBuilder::with_header
/// [`bundle_with_header`]: crate::bundle_with_header
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentHeader {
    /// OpenAPI format version, e.g. "3.0.2".
    pub openapi: String,
    /// The `info` block.
    pub info: Info,
    /// External documentation link.
    pub external_docs: ExternalDocs,
    /// Server entries.
    pub servers: Vec<Server>,
    /// Ordered tag descriptors.
    pub tags: Vec<Tag>,
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            openapi: "3.0.2".to_string(),
            info: Info {
                title: "Creo Collaboration service".to_string(),
                description: "API specification for Creo Collaboration service".to_string(),
                version: "1.0.71".to_string(),
            },
            external_docs: ExternalDocs {
                description: "Error Codes Documentation".to_string(),
                url: "https://gitlab.rd-services.aws.ptc.com/creo/cgm/collabsvc/-/blob/master/errors/error_codes.go".to_string(),
            },
            servers: vec![Server {
                url: "https://creo.staging.atlas.ptc.com/collabsvc/api/cs".to_string(),
            }],
            tags: vec![
                Tag::new("Sessions", "Session endpoints"),
                Tag::new("Branches", "Branches endpoints"),
                Tag::new("Checkpoints", "Checkpoint endpoints"),
                Tag::new("Chapters", "Chapters endpoints"),
                Tag::new("Comments", "Comments endpoints"),
                Tag::new("ConnectionSpeed", "ConnectionSpeed endpoints"),
            ],
        }
    }
}

/// The assembled document written to the output file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundledDocument {
    /// OpenAPI format version.
    pub openapi: String,
    /// The `info` block.
    pub info: Info,
    /// External documentation link.
    #[serde(rename = "externalDocs")]
    pub external_docs: ExternalDocs,
    /// Server entries.
    pub servers: Vec<Server>,
    /// Ordered tag descriptors.
    pub tags: Vec<Tag>,
    /// Path entries merged from fragment files.
    pub paths: Mapping,
    /// Component definitions from the components file.
    pub components: Mapping,
}

/// Wrapper matching the on-disk components file.
///
/// A file without a top-level `components` key deserializes to an empty
/// mapping and takes the empty-components warning path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsFile {
    /// The `components` mapping carried into the bundled document.
    #[serde(default)]
    pub components: Mapping,
}
