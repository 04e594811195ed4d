//! Directory-level bundling: enumerate fragment files, merge them, write the
//! output document.
//!
//! Expected layout relative to some base directory:
//!
//! ```text
//! tags/
//! ├── sessions.yaml        # mapping of path patterns to operations
//! └── branches.yaml
//! components/
//! └── components.yaml      # top-level `components` mapping
//! ```
//!
//! A fragment that fails to read or parse is skipped with a warning; the
//! remaining fragments are still merged. A missing, malformed, or empty
//! components file leaves `components` empty. Only the tags directory, the
//! final serialization, and the output write are fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::Result;
use crate::builder::BundleBuilder;
use crate::document::{ComponentsFile, DocumentHeader};
use crate::error::BundleError;

/// Extensions recognized as fragment files.
const FRAGMENT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Counters describing one bundling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleReport {
    /// Fragment files merged into the document.
    pub merged: usize,
    /// Fragment files skipped because they could not be read or parsed.
    pub skipped: usize,
    /// Path entries in the written document.
    pub paths: usize,
    /// Top-level component categories in the written document.
    pub components: usize,
}

/// Bundle with the collaboration-service header.
///
/// See [`bundle_with_header`].
pub fn bundle(tags_dir: &Path, components_file: &Path, output_file: &Path) -> Result<BundleReport> {
    bundle_with_header(DocumentHeader::default(), tags_dir, components_file, output_file)
}

/// Merge every fragment in `tags_dir` and the components file into one
/// document under `header`, and write it to `output_file`.
///
/// Fragments are processed in file-name order, so on key collision the
/// lexicographically last file wins. An existing file at `output_file` is
/// overwritten.
pub fn bundle_with_header(
    header: DocumentHeader,
    tags_dir: &Path,
    components_file: &Path,
    output_file: &Path,
) -> Result<BundleReport> {
    let mut builder = BundleBuilder::with_header(header);
    let mut report = BundleReport::default();

    for path in fragment_files(tags_dir)? {
        match load_fragment(&path) {
            Ok(fragment) => {
                builder = builder.merge_fragment(fragment);
                report.merged += 1;
            }
            Err(err) => {
                tracing::warn!("{err}; skipping fragment");
                report.skipped += 1;
            }
        }
    }

    match load_components(components_file) {
        Ok(components) if !components.is_empty() => {
            builder = builder.components(components);
        }
        Ok(_) => {
            tracing::warn!(
                "'components' section is empty or not found in {}",
                components_file.display()
            );
        }
        Err(err) => {
            tracing::warn!("{err}; no components will be included");
        }
    }

    let document = builder.build();
    report.paths = document.paths.len();
    report.components = document.components.len();

    let rendered = serde_yaml::to_string(&document).map_err(BundleError::Serialize)?;
    fs::write(output_file, rendered).map_err(|source| BundleError::Write {
        path: output_file.to_path_buf(),
        source,
    })?;

    Ok(report)
}

/// Enumerate fragment files in `dir`, sorted by file name.
fn fragment_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| BundleError::TagsDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BundleError::TagsDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| FRAGMENT_EXTENSIONS.contains(&ext));
        if recognized {
            files.push(path);
        } else {
            tracing::debug!("ignoring non-fragment entry {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Parse one fragment file into a mapping of path entries.
///
/// An empty file is a valid fragment holding zero entries.
fn load_fragment(path: &Path) -> Result<Mapping> {
    match load_yaml(path)? {
        Value::Null => Ok(Mapping::new()),
        value => serde_yaml::from_value(value).map_err(|source| BundleError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse the components file into its `components` mapping.
fn load_components(path: &Path) -> Result<Mapping> {
    let wrapper: ComponentsFile = match load_yaml(path)? {
        Value::Null => ComponentsFile::default(),
        value => serde_yaml::from_value(value).map_err(|source| BundleError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
    };
    Ok(wrapper.components)
}

/// Read a file and parse it as a single YAML document.
fn load_yaml(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|source| BundleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| BundleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
