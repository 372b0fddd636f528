//! Type definitions for the Day One JSON export and the reader that loads it.
//!
//! Layout of an export document:
//! ```json
//! {
//!   "metadata": { "version": "1.0" },
//!   "entries": [
//!     {
//!       "creationDate": "2016-03-07T18:23:45Z",
//!       "timeZone": "Europe/Helsinki",
//!       "text": "![](dayone-moment://5F0...)\n\nBody\n#tag",
//!       "tags": ["tag"],
//!       "photos": [{ "md5": "d41d8...", "type": "jpeg", "identifier": "5F0..." }]
//!     }
//!   ]
//! }
//! ```
//!
//! Only the fields consumed by the converter are modelled. Everything else in the
//! export (weather, location, photo dimensions, ...) is ignored by serde.
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConvertError;

/// The only export schema version this converter understands.
pub const SUPPORTED_VERSION: &str = "1.0";

// ---------------------------------------------------------------------------
// Export document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayOneExport {
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<SourceEntry>,
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One journal record as Day One exports it.
///
/// `tags` and `photos` stay optional: an absent list and an empty list are rendered
/// differently downstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEntry {
    /// UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
    pub creation_date: String,
    /// IANA zone name the entry was written in.
    pub time_zone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub photos: Option<Vec<SourcePhoto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourcePhoto {
    /// Content hash, used as the file stem in the export's `photos/` folder.
    pub md5: String,
    /// File extension (`jpeg`, `png`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Treats an explicit `null` like a missing field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Read and decode an export file, returning its entries in document order.
pub fn read_source(path: &Path) -> Result<Vec<SourceEntry>, ConvertError> {
    let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    parse_source(path, &bytes)
}

/// Decode export bytes. `path` is only used for error messages.
///
/// The version is checked on the untyped document first, so a future schema with a
/// different entry shape reports `UnsupportedVersion` rather than a parse failure.
pub fn parse_source(path: &Path, bytes: &[u8]) -> Result<Vec<SourceEntry>, ConvertError> {
    let parse_err = |source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let document: Value = serde_json::from_slice(bytes).map_err(parse_err)?;

    let version = document
        .pointer("/metadata/version")
        .and_then(Value::as_str);
    if version != Some(SUPPORTED_VERSION) {
        return Err(ConvertError::UnsupportedVersion {
            found: version.map(str::to_string),
        });
    }

    let export: DayOneExport = serde_json::from_value(document).map_err(parse_err)?;
    Ok(export.entries)
}
