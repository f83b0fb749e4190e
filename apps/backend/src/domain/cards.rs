//! Card and content-rating types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// A setup or punchline card. Cards are opaque text; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(String);

impl Card {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Card {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Card {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which deck a card list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Setup,
    Punchline,
}

impl CardKind {
    /// Object name of the catalog file for this deck.
    pub const fn file_name(self) -> &'static str {
        match self {
            CardKind::Setup => "setups.csv",
            CardKind::Punchline => "punchlines.csv",
        }
    }
}

/// Content rating, ordered from cleanest to filthiest: `G < PG < PG-13 < R < X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ContentRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "X")]
    X,
}

impl ContentRating {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentRating::G => "G",
            ContentRating::Pg => "PG",
            ContentRating::Pg13 => "PG-13",
            ContentRating::R => "R",
            ContentRating::X => "X",
        }
    }

    /// A card rated `self` may be dealt into a game capped at `threshold`.
    #[inline]
    pub fn allowed_under(self, threshold: ContentRating) -> bool {
        self <= threshold
    }
}

impl FromStr for ContentRating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "G" => Ok(ContentRating::G),
            "PG" => Ok(ContentRating::Pg),
            "PG-13" => Ok(ContentRating::Pg13),
            "R" => Ok(ContentRating::R),
            "X" => Ok(ContentRating::X),
            _ => Err(DomainError::InvalidRating(s.to_string())),
        }
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
