//! Project record model and validation
//!
//! Collections are parsed into [`RawProjectRecord`] first so that absent
//! fields can be reported by name, then converted one by one into the strict
//! [`ProjectRecord`]. One bad record rejects the whole collection.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};

/// One showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub image_url: String,
    pub alt_text: String,
    pub description: String,
    pub link: String,
}

/// Project record as found on the wire, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProjectRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl ProjectRecord {
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        alt_text: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

impl RawProjectRecord {
    /// Validate into a strict record. `index` is the position in the
    /// collection and only used for error reporting.
    pub fn validate(self, index: usize) -> Result<ProjectRecord, RecordError> {
        let title = required(self.title, index, "title")?;
        let image_url = required(self.image_url, index, "imageUrl")?;
        let alt_text = required(self.alt_text, index, "altText")?;
        let description = required(self.description, index, "description")?;
        let link = required(self.link, index, "link")?;

        if title.trim().is_empty() {
            return Err(RecordError::BlankField {
                index,
                field: "title",
            });
        }
        if link.trim().is_empty() {
            return Err(RecordError::BlankField {
                index,
                field: "link",
            });
        }

        Ok(ProjectRecord {
            title,
            image_url,
            alt_text,
            description,
            link,
        })
    }
}

fn required(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, RecordError> {
    value.ok_or(RecordError::MissingField { index, field })
}

/// Parse a JSON array of project records, validating every entry.
///
/// A literal `null` is read as an empty collection.
pub fn parse_records(json: &str) -> Result<Vec<ProjectRecord>, RecordError> {
    let raw: Vec<RawProjectRecord> =
        serde_json::from_str::<Option<Vec<_>>>(json)?.unwrap_or_default();
    let records = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Parsed {} project records", records.len());
    Ok(records)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
