//! Canonical member identity and the raw upstream record it is resolved from.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::qualification::Qualification;

/// Validation errors returned by [`MemberId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    /// Identifier is empty.
    EmptyId,
    /// Identifier carries surrounding whitespace.
    UntrimmedId,
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "member id must not be empty"),
            Self::UntrimmedId => write!(f, "member id must not carry surrounding whitespace"),
        }
    }
}

impl std::error::Error for MemberValidationError {}

/// Opaque member identifier as issued by the upstream directory.
///
/// Upstream documents may spell the identifier under either of two legacy
/// field names; [`RawMemberRecord::resolve_id`] is the single place that
/// resolves the aliases into this canonical type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberId(String);

impl MemberId {
    /// Validate and construct a [`MemberId`].
    pub fn new(id: impl Into<String>) -> Result<Self, MemberValidationError> {
        let raw = id.into();
        if raw.is_empty() {
            return Err(MemberValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(MemberValidationError::UntrimmedId);
        }
        Ok(Self(raw))
    }

    /// Mint a fresh random identifier for fixtures and tests.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MemberId> for String {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

impl TryFrom<String> for MemberId {
    type Error = MemberValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Canonical person record used by rosters and pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identifier; guaranteed present after normalization.
    pub id: MemberId,
    /// Display name, when the upstream record carried one.
    pub name: Option<String>,
    /// Role tag, when the upstream record carried a recognised one.
    pub qualification: Option<Qualification>,
}

impl Member {
    /// Build a member from a validated identifier with no optional fields.
    #[must_use]
    pub const fn new(id: MemberId) -> Self {
        Self {
            id,
            name: None,
            qualification: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the qualification tag.
    #[must_use]
    pub const fn with_qualification(mut self, qualification: Qualification) -> Self {
        self.qualification = Some(qualification);
        self
    }
}

/// Raw upstream person document, exactly as served.
///
/// Field spellings mirror the wire format; `normalize` is the only path from
/// this shape into the canonical [`Member`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMemberRecord {
    /// Canonical identifier spelling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Legacy identifier spelling still present in older documents.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    /// Display name.
    #[serde(rename = "nom", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Qualification tag as a wire string; unknown values are tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
}

impl RawMemberRecord {
    /// Resolve the identifier aliases, preferring the canonical spelling.
    ///
    /// Returns `None` when neither spelling holds a usable identifier; the
    /// caller skips such records instead of raising.
    #[must_use]
    pub fn resolve_id(&self) -> Option<MemberId> {
        self.id
            .as_deref()
            .and_then(|value| MemberId::new(value).ok())
            .or_else(|| {
                self.legacy_id
                    .as_deref()
                    .and_then(|value| MemberId::new(value).ok())
            })
    }

    /// Normalize into a canonical [`Member`], or `None` when no identifier
    /// resolves.
    ///
    /// Unrecognised qualification strings are dropped with a debug trace so
    /// the record still counts towards rosters.
    #[must_use]
    pub fn normalize(&self) -> Option<Member> {
        let id = self.resolve_id()?;
        let qualification = self.qualification.as_deref().and_then(|raw| {
            let parsed = raw.parse::<Qualification>().ok();
            if parsed.is_none() {
                tracing::debug!(qualification = raw, member = %id, "unknown qualification dropped");
            }
            parsed
        });
        let name = self
            .name
            .clone()
            .filter(|value| !value.trim().is_empty());
        Some(Member {
            id,
            name,
            qualification,
        })
    }
}
