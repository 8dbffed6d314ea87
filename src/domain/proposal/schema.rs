//! Schema versioning for proposal documents.
//!
//! Every producer stamps [`CURRENT_VERSION`]; every consumer rejects a
//! mismatch outright. There is no migration path between versions.

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::ProposalDocument;

/// The only schema version this build reads or writes.
pub const CURRENT_VERSION: u32 = 1;

/// Reasons a raw payload cannot become a [`ProposalDocument`].
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("incompatible schema version: found {found:?}, expected {}", CURRENT_VERSION)]
    IncompatibleVersion { found: Option<u64> },

    #[error("payload does not match the document structure: {0}")]
    Structure(#[source] serde_json::Error),
}

/// True when the document carries the supported schema version.
pub fn is_compatible(doc: &ProposalDocument) -> bool {
    doc.version == CURRENT_VERSION
}

/// Reads the `version` tag of a raw payload without interpreting anything else.
///
/// Integral floats (`1.0`) count as their integer value.
pub fn payload_version(value: &JsonValue) -> Option<u64> {
    let version = value.get("version")?;
    version.as_u64().or_else(|| {
        version
            .as_f64()
            .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u64::MAX as f64)
            .map(|v| v as u64)
    })
}

/// Validates a parsed payload and converts it into a document.
///
/// The version gate runs before structural deserialization, so a payload
/// from another schema is never interpreted.
pub fn document_from_value(value: JsonValue) -> Result<ProposalDocument, SchemaError> {
    if !value.is_object() {
        return Err(SchemaError::NotAnObject);
    }

    let found = payload_version(&value);
    if found != Some(u64::from(CURRENT_VERSION)) {
        return Err(SchemaError::IncompatibleVersion { found });
    }

    serde_json::from_value(value).map_err(SchemaError::Structure)
}
