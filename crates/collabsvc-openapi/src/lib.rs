//! OpenAPI bundling for the Creo Collaboration service.
//!
//! This crate provides the bundled-document model and a builder for merging
//! per-tag path fragments and shared component definitions into a single
//! OpenAPI 3.0 document with a fixed header.
//!
//! # Example
//!
//! ```ignore
//! use collabsvc_openapi::bundle;
//!
//! let report = bundle(
//!     "tags".as_ref(),
//!     "components/components.yaml".as_ref(),
//!     "collabsvc_bundled.yaml".as_ref(),
//! )?;
//! println!("merged {} fragment files", report.merged);
//! ```

mod builder;
mod bundle;
mod document;
mod error;

pub use builder::BundleBuilder;
pub use bundle::{BundleReport, bundle, bundle_with_header};
pub use document::{BundledDocument, ComponentsFile, DocumentHeader, ExternalDocs, Info, Server, Tag};
pub use error::BundleError;

/// Result type for bundling operations.
pub type Result<T> = std::result::Result<T, BundleError>;
