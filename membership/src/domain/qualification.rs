//! Member qualification tags.

use serde::{Deserialize, Serialize};

/// Role tag attached to a member by the upstream directory.
///
/// The set is closed: the aggregation rules only distinguish companions of
/// work from everyone else, and unknown wire values are dropped during
/// normalization rather than failing ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Qualification {
    /// Group or network leader.
    Leader,
    /// Companion of work ("compagnon d'œuvre"), attached to a network
    /// without group membership.
    CompagnonOeuvre,
    /// Regular member.
    Regulier,
}

impl Qualification {
    /// Returns the wire string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use membership::domain::Qualification;
    /// assert_eq!(Qualification::CompagnonOeuvre.as_str(), "COMPAGNON_OEUVRE");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leader => "LEADER",
            Self::CompagnonOeuvre => "COMPAGNON_OEUVRE",
            Self::Regulier => "REGULIER",
        }
    }
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown qualification string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQualificationError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParseQualificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown qualification: {}", self.input)
    }
}

impl std::error::Error for ParseQualificationError {}

impl std::str::FromStr for Qualification {
    type Err = ParseQualificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEADER" => Ok(Self::Leader),
            "COMPAGNON_OEUVRE" => Ok(Self::CompagnonOeuvre),
            "REGULIER" => Ok(Self::Regulier),
            _ => Err(ParseQualificationError {
                input: s.to_owned(),
            }),
        }
    }
}
