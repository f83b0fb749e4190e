//! CSV catalog parsing.
//!
//! A catalog has no header row and exactly two columns per record:
//! card text and content rating.

use std::collections::HashSet;
use std::io;

use csv::{ReaderBuilder, Trim};

use crate::domain::{Card, ContentRating};
use crate::errors::domain::DomainError;

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedCard {
    pub card: Card,
    pub rating: ContentRating,
}

/// Parse a whole catalog.
///
/// Text and rating are trimmed. Rows with empty text are skipped and a
/// repeated text keeps its first row, so a game never deals the same card
/// twice. A row with the wrong number of columns or an unknown rating
/// rejects the whole catalog.
pub fn parse_catalog<R: io::Read>(reader: R) -> Result<Vec<RatedCard>, DomainError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (line, record) in csv.records().enumerate() {
        let record = record.map_err(|e| DomainError::MalformedCardSource(e.to_string()))?;
        if record.len() != 2 {
            return Err(DomainError::MalformedCardSource(format!(
                "line {}: expected 2 columns, found {}",
                line + 1,
                record.len()
            )));
        }
        let rating = record[1].parse::<ContentRating>().map_err(|_| {
            DomainError::MalformedCardSource(format!(
                "line {}: unknown rating {:?}",
                line + 1,
                &record[1]
            ))
        })?;
        let text = &record[0];
        if text.is_empty() || !seen.insert(text.to_string()) {
            continue;
        }
        out.push(RatedCard {
            card: Card::new(text),
            rating,
        });
    }
    Ok(out)
}
