//! Photo records and feed decoding for the EPIC imagery API.
//!
//! The fetch itself lives outside the core; hosts hand the raw JSON body
//! to [`decode_feed`] and stage the result as one wholesale sequence
//! swap.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("malformed photo feed: {0}")]
    Feed(#[from] serde_json::Error),
    #[error("record {identifier}: unrecognized date `{date}`")]
    BadDate { identifier: String, date: String },
}

/// One photo as served by the imagery API.
#[derive(Clone, Debug, Deserialize)]
pub struct FeedRecord {
    pub identifier: String,
    pub image: String,
    #[serde(default)]
    pub caption: String,
    pub date: String,
}

/// Core-side photo description. Immutable once built; `identifier` is
/// the stable identity used across sequence swaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoRecord {
    pub identifier: String,
    pub image_ref: String,
    pub caption: String,
    pub date: String,
}

/// Decode an API feed body and resolve each record's archive image URL.
///
/// The archive path embeds the record date as `YYYY/MM/DD`:
/// `{base}{Y/M/D}/png/{image}.png?api_key={key}`.
pub fn decode_feed(
    json: &str,
    archive_base: &str,
    api_key: &str,
) -> Result<Vec<PhotoRecord>, PhotoError> {
    let records: Vec<FeedRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|r| {
            let day = archive_date(&r.date).ok_or_else(|| PhotoError::BadDate {
                identifier: r.identifier.clone(),
                date: r.date.clone(),
            })?;
            let image_ref = format!(
                "{archive_base}{day}/png/{image}.png?api_key={api_key}",
                image = r.image
            );
            Ok(PhotoRecord {
                identifier: r.identifier,
                image_ref,
                caption: r.caption,
                date: r.date,
            })
        })
        .collect()
}

/// `2024-01-15 00:12:03` -> `2024/01/15`
fn archive_date(date: &str) -> Option<String> {
    let day = date.split_whitespace().next()?;
    let mut parts = day.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if [y, m, d]
        .iter()
        .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some(format!("{y}/{m}/{d}"))
}
