//! JSON and YAML renderings of a document snapshot

use crate::thrift::ast::{snapshot_from_document, Document, FormatError, SnapshotOptions};

pub fn to_json(doc: &Document, options: &SnapshotOptions) -> Result<String, FormatError> {
    let snapshot = snapshot_from_document(doc, options);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

pub fn to_yaml(doc: &Document, options: &SnapshotOptions) -> Result<String, FormatError> {
    let snapshot = snapshot_from_document(doc, options);
    Ok(serde_yaml::to_string(&snapshot)?)
}
