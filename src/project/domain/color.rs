//! Fixed project colour palette.

use super::ParseProjectColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour tag for a project, stored as its hex value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectColor {
    /// `#3b82f6`
    #[default]
    #[serde(rename = "#3b82f6")]
    Blue,
    /// `#8b5cf6`
    #[serde(rename = "#8b5cf6")]
    Purple,
    /// `#f59e0b`
    #[serde(rename = "#f59e0b")]
    Amber,
    /// `#10b981`
    #[serde(rename = "#10b981")]
    Emerald,
    /// `#ef4444`
    #[serde(rename = "#ef4444")]
    Red,
    /// `#6366f1`
    #[serde(rename = "#6366f1")]
    Indigo,
    /// `#ec4899`
    #[serde(rename = "#ec4899")]
    Pink,
}

impl ProjectColor {
    /// The whole palette in display order.
    pub const PALETTE: [Self; 7] = [
        Self::Blue,
        Self::Purple,
        Self::Amber,
        Self::Emerald,
        Self::Red,
        Self::Indigo,
        Self::Pink,
    ];

    /// Returns the hex value, as stored.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#3b82f6",
            Self::Purple => "#8b5cf6",
            Self::Amber => "#f59e0b",
            Self::Emerald => "#10b981",
            Self::Red => "#ef4444",
            Self::Indigo => "#6366f1",
            Self::Pink => "#ec4899",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Amber => "Amber",
            Self::Emerald => "Emerald",
            Self::Red => "Red",
            Self::Indigo => "Indigo",
            Self::Pink => "Pink",
        }
    }
}

impl fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl TryFrom<&str> for ProjectColor {
    type Error = ParseProjectColorError;

    /// Accepts either the hex value or the label, case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::PALETTE
            .into_iter()
            .find(|color| {
                color.hex().eq_ignore_ascii_case(normalized)
                    || color.label().eq_ignore_ascii_case(normalized)
            })
            .ok_or_else(|| ParseProjectColorError(value.to_owned()))
    }
}
