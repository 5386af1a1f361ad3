//! Reaction entities - the four fixed reaction categories and their tally

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the four fixed reaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Fire,
    Wow,
    Clap,
    Heart,
}

impl ReactionKind {
    /// Every category, in display order
    pub const ALL: [ReactionKind; 4] = [Self::Fire, Self::Wow, Self::Clap, Self::Heart];

    /// Wire name of the category
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Wow => "wow",
            Self::Clap => "clap",
            Self::Heart => "heart",
        }
    }

    /// Emoji shown by the dashboard front-end
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Fire => "🔥",
            Self::Wow => "😮",
            Self::Clap => "👏",
            Self::Heart => "❤️",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    /// Accepts the wire name (any case) or the emoji glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // The heart glyph may arrive with or without the U+FE0F variation selector
        let bare = s.trim_end_matches('\u{FE0F}');

        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(s)
                    || kind.glyph().trim_end_matches('\u{FE0F}') == bare
            })
            .ok_or_else(|| DomainError::UnknownReaction(s.to_string()))
    }
}

impl Serialize for ReactionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ReactionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Reaction counts for one event
///
/// Always carries exactly the four categories. Counts only ever go up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReactionTally {
    pub fire: u64,
    pub wow: u64,
    pub clap: u64,
    pub heart: u64,
}

impl ReactionTally {
    /// Create a tally with every category at zero
    pub const fn zero() -> Self {
        Self {
            fire: 0,
            wow: 0,
            clap: 0,
            heart: 0,
        }
    }

    /// Count for one category
    pub const fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Fire => self.fire,
            ReactionKind::Wow => self.wow,
            ReactionKind::Clap => self.clap,
            ReactionKind::Heart => self.heart,
        }
    }

    /// Add one to a category and return the new count
    pub fn increment(&mut self, kind: ReactionKind) -> u64 {
        let slot = match kind {
            ReactionKind::Fire => &mut self.fire,
            ReactionKind::Wow => &mut self.wow,
            ReactionKind::Clap => &mut self.clap,
            ReactionKind::Heart => &mut self.heart,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Sum over all categories
    pub fn total(&self) -> u64 {
        ReactionKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }
}
