//! Canonical JSON output

use crate::card::CardFace;
use crate::error::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct Meta {
    pub date: NaiveDate,
    pub faces: usize,
}

/// `{ "meta": {...}, "data": [...] }` wrapper written by the CLI
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub meta: Meta,
    pub data: &'a [CardFace],
}

impl<'a> Envelope<'a> {
    /// Envelope dated today (UTC)
    pub fn new(data: &'a [CardFace]) -> Self {
        Self::dated(data, Utc::now().date_naive())
    }

    pub fn dated(data: &'a [CardFace], date: NaiveDate) -> Self {
        Self {
            meta: Meta {
                date,
                faces: data.len(),
            },
            data,
        }
    }
}

/// Pretty-print the envelope to `writer`
pub fn write_json<W: Write>(mut writer: W, envelope: &Envelope<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, envelope)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
